//! Description list pass
//!
//! Contiguous runs of non-indented `term: definition` prose lines are
//! rewritten to the two-line definition form:
//!
//! ```text
//! term
//! : definition
//! ```
//!
//! Entries are blank-line separated and the run is isolated from surrounding
//! content. The first colon of the line must be the separator; lines whose
//! term would contain a colon are left alone.

use regex::Regex;
use std::sync::OnceLock;

use crate::scanner::{classify_lines, LineClass};

use super::{close_block, push_separator};

pub fn expand_definitions(lines: Vec<String>) -> Vec<String> {
    let classes = classify_lines(&lines);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if let Some((term, def)) = split_entry(&lines[i], &classes[i]) {
            let mut entries = vec![(term, def)];
            let mut end = i + 1;
            while end < lines.len() {
                match split_entry(&lines[end], &classes[end]) {
                    Some(entry) => {
                        entries.push(entry);
                        end += 1;
                    }
                    None => break,
                }
            }

            push_separator(&mut out);
            for (n, (term, def)) in entries.into_iter().enumerate() {
                if n > 0 {
                    out.push(String::new());
                }
                out.push(term);
                out.push(format!(": {def}"));
            }
            i = close_block(&lines, end, &mut out);
            continue;
        }

        out.push(lines[i].clone());
        i += 1;
    }

    out
}

/// Split a `term: definition` prose line into its parts
///
/// The term must start in column zero, contain no colon, and be followed by
/// a colon, whitespace, and a definition. Already-expanded `: definition`
/// lines do not match because the term cannot be empty.
fn split_entry(line: &str, class: &LineClass) -> Option<(String, String)> {
    static ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    let entry_re =
        ENTRY_RE.get_or_init(|| Regex::new(r"^([^:\s][^:]*):[ \t]+(\S.*)$").unwrap());

    if *class != LineClass::Prose {
        return None;
    }
    let caps = entry_re.captures(line)?;
    Some((caps[1].trim_end().to_string(), caps[2].to_string()))
}
