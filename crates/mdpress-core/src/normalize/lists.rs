//! List normalization pass
//!
//! For every list block (contiguous list items plus their indented
//! continuation lines):
//!
//! - bullet markers `*` and `+` are standardized to `-`,
//! - a bolded `**term**:` at the start of an item gets exactly one space
//!   before its definition,
//! - continuation lines are indented at least two spaces past their parent
//!   item,
//! - the block is isolated by exactly one blank line before and after.
//!
//! Isolation also covers the common pattern of a bold `**Label:**` line
//! directly above a list, which would otherwise be absorbed into the
//! preceding paragraph.

use regex::Regex;
use std::sync::OnceLock;

use crate::scanner::{classify_lines, indent_width, LineClass};

use super::{close_block, push_separator};

pub fn normalize_lists(lines: Vec<String>) -> Vec<String> {
    let classes = classify_lines(&lines);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if classes[i].is_list_item() {
            let end = block_end(&lines, &classes, i);
            push_separator(&mut out);
            emit_block(&lines, &classes, i, end, &mut out);
            i = close_block(&lines, end, &mut out);
            continue;
        }

        out.push(lines[i].clone());
        i += 1;
    }

    out
}

/// End index (exclusive) of the list block starting at `i`
///
/// The block extends over list items at any indent and over indented prose
/// continuation lines. Blanks, headings, tables, quotes, and fences end it.
fn block_end(lines: &[String], classes: &[LineClass], i: usize) -> usize {
    let mut end = i + 1;
    while end < lines.len() {
        let class = &classes[end];
        let continuation = *class == LineClass::Prose && indent_width(&lines[end]) > 0;
        if class.is_list_item() || continuation {
            end += 1;
        } else {
            break;
        }
    }
    end
}

fn emit_block(lines: &[String], classes: &[LineClass], start: usize, end: usize, out: &mut Vec<String>) {
    let mut parent_indent = 0usize;

    for idx in start..end {
        let line = &lines[idx];
        match &classes[idx] {
            LineClass::Bullet { indent, .. } => {
                parent_indent = *indent;
                out.push(fix_item(line));
            }
            LineClass::Ordered { indent } => {
                parent_indent = *indent;
                out.push(line.clone());
            }
            _ => out.push(reindent_continuation(line, parent_indent)),
        }
    }
}

/// Standardize the bullet marker and the spacing after a bolded term
fn fix_item(line: &str) -> String {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    static TERM_RE: OnceLock<Regex> = OnceLock::new();

    let marker_re = MARKER_RE.get_or_init(|| Regex::new(r"^(\s*)[*+](\s+)").unwrap());
    let term_re =
        TERM_RE.get_or_init(|| Regex::new(r"^(?P<head>\s*- \*\*[^*]+\*\*:)[ \t]*(?P<rest>\S.*)$").unwrap());

    let standardized = marker_re.replace(line, "$1-$2");
    term_re.replace(&standardized, "$head $rest").into_owned()
}

/// Indent a continuation line to at least two spaces past its parent item
fn reindent_continuation(line: &str, parent_indent: usize) -> String {
    let min_indent = parent_indent + 2;
    let current = indent_width(line);
    if current >= min_indent {
        line.to_string()
    } else {
        format!("{}{}", " ".repeat(min_indent), line.trim_start())
    }
}
