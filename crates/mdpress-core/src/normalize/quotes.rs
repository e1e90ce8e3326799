//! Blockquote isolation pass
//!
//! Contiguous `>` runs containing `**` emphasis get one blank line before and
//! after. Plain blockquotes are deliberately left untouched; the rule is
//! defined for the emphasized-quote pattern only.

use crate::scanner::{classify_lines, LineClass};

use super::{close_block, push_separator};

pub fn isolate_quotes(lines: Vec<String>) -> Vec<String> {
    let classes = classify_lines(&lines);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if classes[i] == LineClass::Quote {
            let mut end = i + 1;
            while end < lines.len() && classes[end] == LineClass::Quote {
                end += 1;
            }

            if lines[i..end].iter().any(|l| l.contains("**")) {
                push_separator(&mut out);
                out.extend_from_slice(&lines[i..end]);
                i = close_block(&lines, end, &mut out);
            } else {
                out.extend_from_slice(&lines[i..end]);
                i = end;
            }
            continue;
        }

        out.push(lines[i].clone());
        i += 1;
    }

    out
}
