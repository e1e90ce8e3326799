//! YAML front-matter splitting
//!
//! Partitions a Markdown document into its `---` delimited front-matter
//! header and its body, without interpreting the header. The normalization
//! pipeline only ever sees the body; metadata is never rewritten by a
//! structural pass.

/// Split a leading front-matter header from the body
///
/// The header must start on the first line with `---` and is closed by a
/// `---` or `...` line. The returned header excludes both delimiter lines
/// but keeps its own trailing newline. Without a closing delimiter the whole
/// input is the body.
///
/// # Example
///
/// ```
/// use mdpress_core::frontmatter::split;
///
/// let (header, body) = split("---\ntitle: Report\n---\n# Hello\n");
/// assert_eq!(header, Some("title: Report\n"));
/// assert_eq!(body, "# Hello\n");
/// ```
pub fn split(text: &str) -> (Option<&str>, &str) {
    let rest = match text.strip_prefix("---\n") {
        Some(rest) => rest,
        None => return (None, text),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(header), body);
        }
        offset += line.len();
    }

    (None, text)
}
