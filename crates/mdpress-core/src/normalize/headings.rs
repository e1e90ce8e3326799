//! Heading spacing pass
//!
//! Every ATX heading gets exactly one blank line immediately before and
//! after it.

use crate::scanner::{classify_lines, LineClass};

use super::{close_block, push_separator};

pub fn isolate_headings(lines: Vec<String>) -> Vec<String> {
    let classes = classify_lines(&lines);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if matches!(classes[i], LineClass::Heading(_)) {
            push_separator(&mut out);
            out.push(lines[i].clone());
            i = close_block(&lines, i + 1, &mut out);
            continue;
        }

        out.push(lines[i].clone());
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_heading_isolated() {
        let out = isolate_headings(lines("intro\n## Section\nbody"));
        assert_eq!(out, vec!["intro", "", "## Section", "", "body"]);
    }

    #[test]
    fn test_consecutive_headings() {
        let out = isolate_headings(lines("# Title\n## Sub\nbody"));
        assert_eq!(out, vec!["# Title", "", "## Sub", "", "body"]);
    }

    #[test]
    fn test_extra_blanks_collapsed_around_heading() {
        let out = isolate_headings(lines("intro\n\n\n# Title\n\n\nbody"));
        assert_eq!(out, vec!["intro", "", "# Title", "", "body"]);
    }

    #[test]
    fn test_heading_at_edges() {
        let out = isolate_headings(lines("# Title"));
        assert_eq!(out, vec!["# Title"]);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let once = isolate_headings(lines("intro\n## Section\nbody"));
        let twice = isolate_headings(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_heading_inside_fence_untouched() {
        let out = isolate_headings(lines("```\n# comment\n```"));
        assert_eq!(out, vec!["```", "# comment", "```"]);
    }
}
