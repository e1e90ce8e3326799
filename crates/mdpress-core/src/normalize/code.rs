//! Code fence pass
//!
//! Opening fences without a language tag default to `text` so that the
//! downstream highlighter never guesses. Fence interiors and closing fences
//! pass through unmodified.

use crate::scanner::{scan, LineClass};

pub fn tag_fences(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut in_fence = false;

    for line in lines {
        if let LineClass::Fence { lang } = scan(&line) {
            let opening = !in_fence;
            in_fence = !in_fence;
            if opening && lang.is_none() {
                let indent = &line[..line.len() - line.trim_start().len()];
                out.push(format!("{indent}```text"));
                continue;
            }
        }
        out.push(line);
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
    fn test_untagged_fence_gets_text() {
        let out = tag_fences(lines("```\ncode\n```"));
        assert_eq!(out, vec!["```text", "code", "```"]);
    }

    #[test]
    fn test_tagged_fence_unchanged() {
        let out = tag_fences(lines("```rust\nfn main() {}\n```"));
        assert_eq!(out, vec!["```rust", "fn main() {}", "```"]);
    }

    #[test]
    fn test_closing_fence_never_tagged() {
        let out = tag_fences(lines("```rust\ncode\n```\ntext\n```\nmore\n```"));
        assert_eq!(
            out,
            vec!["```rust", "code", "```", "text", "```text", "more", "```"]
        );
    }

    #[test]
    fn test_indented_fence_keeps_indent() {
        let out = tag_fences(lines("  ```\n  code\n  ```"));
        assert_eq!(out, vec!["  ```text", "  code", "  ```"]);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let once = tag_fences(lines("```\ncode\n```"));
        let twice = tag_fences(once.clone());
        assert_eq!(once, twice);
    }
}
