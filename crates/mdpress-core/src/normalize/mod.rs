//! Markdown normalization pipeline
//!
//! Applies an ordered sequence of independent, idempotent rewrite passes over
//! a Markdown document: tables, blockquotes, lists, description lists,
//! headings, code fences, and a final blank-line collapse. Each pass is a
//! pure function over the document's lines; fenced code interiors are opaque
//! to every structural pass.
//!
//! Re-running the pipeline on its own output is a no-op.

mod code;
mod definitions;
mod headings;
mod lists;
mod quotes;
mod tables;

pub use code::tag_fences;
pub use definitions::expand_definitions;
pub use headings::isolate_headings;
pub use lists::normalize_lists;
pub use quotes::isolate_quotes;
pub use tables::isolate_tables;

/// Normalize Markdown source text for downstream rendering
///
/// Headings, list items, table cells, and code content are preserved
/// verbatim; only surrounding whitespace and minor syntactic variants are
/// rewritten. The passes run in a fixed order, and the blank-line collapse
/// runs last because earlier passes may introduce blank-line runs.
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut lines = to_lines(input);
    lines = isolate_tables(lines);
    lines = isolate_quotes(lines);
    lines = normalize_lists(lines);
    lines = expand_definitions(lines);
    lines = isolate_headings(lines);
    lines = tag_fences(lines);
    lines = collapse_blanks(lines);

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Split text into owned lines (without terminators)
pub(crate) fn to_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Check if a line is blank (empty or whitespace-only)
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Ensure exactly one blank line separates `out` from the block about to be
/// emitted
///
/// Trailing blanks already emitted are popped; nothing is inserted at the
/// start of the document.
pub(crate) fn push_separator(out: &mut Vec<String>) {
    while out.last().is_some_and(|l| is_blank(l)) {
        out.pop();
    }
    if !out.is_empty() {
        out.push(String::new());
    }
}

/// Skip blank input lines starting at `i`, then push exactly one blank line
/// if more content follows
///
/// Returns the index of the next non-blank line. Used after emitting a block
/// so that exactly one blank line follows it.
pub(crate) fn close_block(lines: &[String], mut i: usize, out: &mut Vec<String>) -> usize {
    while i < lines.len() && is_blank(&lines[i]) {
        i += 1;
    }
    if i < lines.len() {
        out.push(String::new());
    }
    i
}

/// Collapse runs of 3+ blank lines to exactly 2 and trim blank lines at the
/// document edges
///
/// This pass runs last and applies everywhere, including inside fenced code,
/// so the blank-line ceiling holds unconditionally.
pub fn collapse_blanks(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut run = 0usize;

    for line in lines {
        if is_blank(&line) {
            run += 1;
            if run <= 2 {
                out.push(line);
            }
        } else {
            run = 0;
            out.push(line);
        }
    }

    while out.first().is_some_and(|l| is_blank(l)) {
        out.remove(0);
    }
    while out.last().is_some_and(|l| is_blank(l)) {
        out.pop();
    }

    out
}
