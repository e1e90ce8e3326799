//! Table isolation pass
//!
//! Pipe-table blocks (header row, alignment rule, at least one data row) get
//! exactly one blank line before and after. A `Table: ...` caption line found
//! ahead of a table is re-emitted after the block as a `: ...` caption
//! paragraph, which keeps the pass idempotent: the trigger line no longer
//! precedes the table on later runs.

use crate::scanner::{classify_lines, LineClass};

use super::{close_block, is_blank, push_separator};

pub fn isolate_tables(lines: Vec<String>) -> Vec<String> {
    let classes = classify_lines(&lines);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        // Caption line ahead of a table block, possibly blank-separated
        if caption_text(&lines[i], &classes[i]).is_some() {
            let mut start = i + 1;
            while start < lines.len() && classes[start] == LineClass::Blank {
                start += 1;
            }
            if let Some(end) = table_block_at(&classes, start) {
                let caption = caption_text(&lines[i], &classes[i]).unwrap_or_default();
                push_separator(&mut out);
                out.extend_from_slice(&lines[start..end]);
                out.push(String::new());
                out.push(format!(": {caption}"));
                i = close_block(&lines, end, &mut out);
                continue;
            }
        }

        if let Some(end) = table_block_at(&classes, i) {
            push_separator(&mut out);
            out.extend_from_slice(&lines[i..end]);
            i = close_block(&lines, end, &mut out);
            continue;
        }

        out.push(lines[i].clone());
        i += 1;
    }

    out
}

/// Caption text of a `Table: ...` prose line, if it is one
fn caption_text(line: &str, class: &LineClass) -> Option<String> {
    if *class != LineClass::Prose {
        return None;
    }
    let rest = line.trim().strip_prefix("Table:")?.trim();
    if rest.is_empty() || is_blank(rest) {
        return None;
    }
    Some(rest.to_string())
}

/// End index (exclusive) of a table block starting at `i`, if one starts
/// there
///
/// A block requires a header row, an alignment rule directly below it, and at
/// least one data row; it extends over all contiguous table lines.
fn table_block_at(classes: &[LineClass], i: usize) -> Option<usize> {
    if classes.get(i) != Some(&LineClass::TableRow)
        || classes.get(i + 1) != Some(&LineClass::TableRule)
        || classes.get(i + 2) != Some(&LineClass::TableRow)
    {
        return None;
    }
    let mut end = i + 3;
    while end < classes.len() && classes[end].is_table() {
        end += 1;
    }
    Some(end)
}
