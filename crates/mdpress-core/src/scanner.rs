//! Line-by-line structural scanner for Markdown documents
//!
//! Classifies each line's structural role once, so that normalization and
//! validation work on classified block runs instead of overlapping regex
//! substitutions.

use regex::Regex;
use std::sync::OnceLock;

/// Classification of a line's structural role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only line
    Blank,
    /// ATX heading with depth (1-6)
    Heading(u8),
    /// Bulleted list item with its leading indent width and marker character
    Bullet { indent: usize, marker: char },
    /// Ordered list item (`1. `) with its leading indent width
    Ordered { indent: usize },
    /// Pipe table row
    TableRow,
    /// Table alignment rule (`|---|:--:|`)
    TableRule,
    /// Blockquote line
    Quote,
    /// Code fence delimiter, with the info string if present
    Fence { lang: Option<String> },
    /// Line inside a fenced code block
    Code,
    /// Anything else (regular prose)
    Prose,
}

impl LineClass {
    /// Check if this line is a list item (bulleted or ordered)
    pub fn is_list_item(&self) -> bool {
        matches!(self, LineClass::Bullet { .. } | LineClass::Ordered { .. })
    }

    /// Check if this line belongs to a pipe table
    pub fn is_table(&self) -> bool {
        matches!(self, LineClass::TableRow | LineClass::TableRule)
    }

    /// Leading indent of a list item, if this is one
    pub fn list_indent(&self) -> Option<usize> {
        match self {
            LineClass::Bullet { indent, .. } | LineClass::Ordered { indent } => Some(*indent),
            _ => None,
        }
    }
}

/// Width of the leading whitespace of a line
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Classify a single line, ignoring fence context
///
/// This never returns [`LineClass::Code`]; interior lines of fenced blocks
/// can only be recognized with document context, see [`classify_lines`].
pub fn scan(line: &str) -> LineClass {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    static BULLET_RE: OnceLock<Regex> = OnceLock::new();
    static ORDERED_RE: OnceLock<Regex> = OnceLock::new();

    let heading_re = HEADING_RE.get_or_init(|| {
        // # through ###### followed by space and text
        Regex::new(r"^(#{1,6})\s+\S").unwrap()
    });
    let bullet_re = BULLET_RE.get_or_init(|| Regex::new(r"^(\s*)([-*+])\s+\S").unwrap());
    let ordered_re = ORDERED_RE.get_or_init(|| Regex::new(r"^(\s*)\d+\.\s+\S").unwrap());

    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(rest) = trimmed.strip_prefix("```") {
        let info = rest.trim();
        let lang = if info.is_empty() {
            None
        } else {
            Some(info.to_string())
        };
        return LineClass::Fence { lang };
    }

    if let Some(caps) = heading_re.captures(line) {
        return LineClass::Heading(caps[1].len() as u8);
    }

    if trimmed.starts_with('>') {
        return LineClass::Quote;
    }

    if let Some(caps) = bullet_re.captures(line) {
        let marker = caps[2].chars().next().unwrap_or('-');
        return LineClass::Bullet {
            indent: caps[1].len(),
            marker,
        };
    }

    if let Some(caps) = ordered_re.captures(line) {
        return LineClass::Ordered {
            indent: caps[1].len(),
        };
    }

    if trimmed.starts_with('|') {
        if is_table_rule(trimmed) {
            return LineClass::TableRule;
        }
        return LineClass::TableRow;
    }

    LineClass::Prose
}

/// Classify every line of a document, resolving fence interiors
///
/// Fence delimiters toggle an in-fence state; lines between an opening and a
/// closing delimiter are classified as [`LineClass::Code`] so that no other
/// structural pattern can fire inside a fenced block.
pub fn classify_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LineClass> {
    let mut classes = Vec::with_capacity(lines.len());
    let mut in_fence = false;

    for line in lines {
        let class = scan(line.as_ref());
        match class {
            LineClass::Fence { .. } => {
                in_fence = !in_fence;
                classes.push(class);
            }
            _ if in_fence => classes.push(LineClass::Code),
            _ => classes.push(class),
        }
    }

    classes
}

/// Check if a trimmed table line is an alignment rule
///
/// A rule consists only of pipes, dashes, colons, and spaces, with at least
/// one dash (e.g. `|---|:--:|`).
fn is_table_rule(trimmed: &str) -> bool {
    trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(scan(""), LineClass::Blank);
        assert_eq!(scan("   "), LineClass::Blank);
        assert_eq!(scan("\t"), LineClass::Blank);
    }

    #[test]
    fn test_headings() {
        assert_eq!(scan("# Title"), LineClass::Heading(1));
        assert_eq!(scan("### Sub"), LineClass::Heading(3));
        assert_eq!(scan("###### Deep"), LineClass::Heading(6));
        // Seven hashes is not a heading
        assert_eq!(scan("####### Nope"), LineClass::Prose);
        // No space after hashes
        assert_eq!(scan("#hashtag"), LineClass::Prose);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(
            scan("- item"),
            LineClass::Bullet {
                indent: 0,
                marker: '-'
            }
        );
        assert_eq!(
            scan("  * item"),
            LineClass::Bullet {
                indent: 2,
                marker: '*'
            }
        );
        assert_eq!(
            scan("+ item"),
            LineClass::Bullet {
                indent: 0,
                marker: '+'
            }
        );
        // Emphasis is not a bullet
        assert_eq!(scan("*emphasis*"), LineClass::Prose);
        // A bare dash is not a list item
        assert_eq!(scan("-"), LineClass::Prose);
    }

    #[test]
    fn test_ordered() {
        assert_eq!(scan("1. first"), LineClass::Ordered { indent: 0 });
        assert_eq!(scan("  12. later"), LineClass::Ordered { indent: 2 });
        assert_eq!(scan("1.5 is a number"), LineClass::Prose);
    }

    #[test]
    fn test_table_lines() {
        assert_eq!(scan("|a|b|"), LineClass::TableRow);
        assert_eq!(scan("| a | b |"), LineClass::TableRow);
        assert_eq!(scan("|-|-|"), LineClass::TableRule);
        assert_eq!(scan("|:--|--:|"), LineClass::TableRule);
        assert_eq!(scan("| --- | :-: |"), LineClass::TableRule);
    }

    #[test]
    fn test_quotes_and_fences() {
        assert_eq!(scan("> quoted"), LineClass::Quote);
        assert_eq!(scan("```"), LineClass::Fence { lang: None });
        assert_eq!(
            scan("```rust"),
            LineClass::Fence {
                lang: Some("rust".to_string())
            }
        );
    }

    #[test]
    fn test_classify_lines_marks_fence_interior() {
        let lines = ["```", "- not a list", "# not a heading", "```", "- list"];
        let classes = classify_lines(&lines);
        assert_eq!(classes[0], LineClass::Fence { lang: None });
        assert_eq!(classes[1], LineClass::Code);
        assert_eq!(classes[2], LineClass::Code);
        assert_eq!(classes[3], LineClass::Fence { lang: None });
        assert!(classes[4].is_list_item());
    }

    #[test]
    fn test_unclosed_fence_runs_to_end() {
        let lines = ["```", "code", "more code"];
        let classes = classify_lines(&lines);
        assert_eq!(classes[1], LineClass::Code);
        assert_eq!(classes[2], LineClass::Code);
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(indent_width("no indent"), 0);
        assert_eq!(indent_width("  two"), 2);
        assert_eq!(indent_width("    four"), 4);
    }
}
