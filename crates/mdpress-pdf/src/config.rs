//! Conversion settings
//!
//! Settings are layered: the defaults below, then an optional TOML file
//! (partial files deserialize over the defaults), then individual
//! command-line overrides applied by the caller. The resulting `Settings`
//! value is immutable and passed by reference through the whole conversion.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Top-level conversion settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Document metadata fallbacks
    pub document: DocumentSettings,
    /// Pandoc invocation settings
    pub pandoc: PandocSettings,
    /// Typography settings
    pub typography: TypographySettings,
    /// PDF output settings
    pub output: OutputSettings,
    /// Markdown handling options
    pub markdown: MarkdownSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configured template name to a file path
    ///
    /// A template name resolves to `<templates_dir>/<name>.tex` when that
    /// file exists, otherwise the name itself is tried as a literal path.
    /// `None` means pandoc's built-in template.
    pub fn resolve_template(&self) -> Option<PathBuf> {
        let name = self.output.template.as_deref()?;

        if let Some(ref dir) = self.output.templates_dir {
            let built_in = dir.join(format!("{name}.tex"));
            if built_in.exists() {
                return Some(built_in);
            }
        }

        let literal = PathBuf::from(name);
        if literal.exists() {
            return Some(literal);
        }

        None
    }
}

/// Title and author fallbacks for documents without front matter
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocumentSettings {
    /// Default document title
    pub title: Option<String>,
    /// Default document author
    pub author: Option<String>,
}

/// Pandoc invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PandocSettings {
    /// Path to the pandoc executable
    pub bin_path: String,
    /// PDF engine: xelatex, pdflatex, lualatex
    pub pdf_engine: String,
    /// Extra arguments appended verbatim
    pub extra_args: Vec<String>,
}

impl Default for PandocSettings {
    fn default() -> Self {
        Self {
            bin_path: "pandoc".to_string(),
            pdf_engine: "xelatex".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Typography settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographySettings {
    /// Main font for body text
    pub mainfont: Option<String>,
    /// Sans-serif font for headings
    pub sansfont: Option<String>,
    /// Monospace font for code blocks
    pub monofont: Option<String>,
    /// Base font size
    pub fontsize: String,
    /// Line height (passed to pandoc as linestretch)
    pub lineheight: String,
    /// Document language
    pub lang: Option<String>,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            mainfont: Some("Cambria".to_string()),
            sansfont: Some("Calibri".to_string()),
            monofont: Some("Consolas".to_string()),
            fontsize: "11pt".to_string(),
            lineheight: "1.15".to_string(),
            lang: None,
        }
    }
}

/// PDF output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Paper size: a4, letter, ...
    pub papersize: String,
    /// Include a table of contents
    pub toc: bool,
    /// Depth of the table of contents
    pub toc_depth: u8,
    /// Number sections automatically
    pub numbered: bool,
    /// LaTeX page style
    pub pagestyle: String,
    /// Template name or path
    pub template: Option<String>,
    /// Directory holding .tex templates
    pub templates_dir: Option<PathBuf>,
    /// LaTeX geometry specification
    pub geometry: Option<String>,
    /// LaTeX document class
    pub documentclass: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            papersize: "a4".to_string(),
            toc: false,
            toc_depth: 3,
            numbered: true,
            pagestyle: "headings".to_string(),
            template: None,
            templates_dir: None,
            geometry: Some("margin=2.5cm".to_string()),
            documentclass: None,
        }
    }
}

/// Markdown handling options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownSettings {
    /// Code highlighting style
    pub highlight_style: String,
    /// Enable citation rendering
    pub citations: bool,
    /// Enable math support
    pub math: bool,
    /// Enable booktabs table styling
    pub table_styling: bool,
    /// Run the normalization pipeline before conversion
    pub preprocess: bool,
}

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            highlight_style: "zenburn".to_string(),
            citations: true,
            math: true,
            table_styling: true,
            preprocess: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pandoc.bin_path, "pandoc");
        assert_eq!(settings.pandoc.pdf_engine, "xelatex");
        assert_eq!(settings.output.papersize, "a4");
        assert_eq!(settings.output.toc_depth, 3);
        assert!(settings.output.numbered);
        assert!(settings.markdown.preprocess);
        assert_eq!(settings.output.geometry.as_deref(), Some("margin=2.5cm"));
    }

    #[test]
    fn test_partial_toml_merges_over_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [pandoc]
            pdf_engine = "lualatex"

            [output]
            toc = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.pandoc.pdf_engine, "lualatex");
        assert!(settings.output.toc);
        // Untouched sections keep their defaults
        assert_eq!(settings.pandoc.bin_path, "pandoc");
        assert_eq!(settings.markdown.highlight_style, "zenburn");
    }

    #[test]
    fn test_empty_toml_is_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.typography.fontsize, "11pt");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(Settings::from_toml_str("[pandoc\nbroken").is_err());
    }

    #[test]
    fn test_unknown_template_resolves_to_none() {
        let mut settings = Settings::default();
        settings.output.template = Some("no-such-template".to_string());
        assert_eq!(settings.resolve_template(), None);
    }

    #[test]
    fn test_no_template_resolves_to_none() {
        assert_eq!(Settings::default().resolve_template(), None);
    }
}
