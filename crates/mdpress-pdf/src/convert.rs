//! Markdown to PDF conversion
//!
//! The conversion stages the input through a temporary file: front matter is
//! merged with settings-derived defaults, the body is normalized, and the
//! combined document is handed to pandoc.

use std::path::{Path, PathBuf};

use mdpress_core::frontmatter;
use mdpress_core::normalize;

use crate::config::Settings;
use crate::error::{ConvertError, Result};
use crate::frontmatter::format_front_matter;
use crate::pandoc::{build_args, run_pandoc};

/// Prepare markdown content for pandoc
///
/// Splits off the front matter, merges it with the settings, normalizes the
/// body when preprocessing is enabled, and returns the recombined document.
pub fn stage_markdown(content: &str, settings: &Settings) -> Result<String> {
    let (header, body) = frontmatter::split(content);

    let formatted = format_front_matter(header, settings)?;
    let body = if settings.markdown.preprocess {
        normalize(body)
    } else {
        body.to_string()
    };

    Ok(format!("{formatted}{body}"))
}

/// Convert a markdown file to PDF
///
/// Returns the output path on success.
pub fn convert_file(
    input: &Path,
    output: &Path,
    settings: &Settings,
    verbose: bool,
) -> Result<PathBuf> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = std::fs::read_to_string(input)?;
    let staged = stage_markdown(&content, settings)?;

    let temp = tempfile::Builder::new()
        .prefix("mdpress-")
        .suffix(".md")
        .tempfile()?;
    std::fs::write(temp.path(), &staged)?;

    let args = build_args(settings, temp.path(), output);
    run_pandoc(&settings.pandoc, &args, verbose)?;

    Ok(output.to_path_buf())
}
