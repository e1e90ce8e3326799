//! mdpress-pdf - PDF conversion via pandoc
//!
//! This crate turns markdown documents into PDFs by staging them through
//! the mdpress normalization pipeline and handing the result to an external
//! pandoc process.
//!
//! # Architecture
//!
//! A conversion runs in three stages:
//!
//! 1. **Staging** - Front matter is split off, merged with settings-derived
//!    defaults, and the body is normalized
//! 2. **Arguments** - The settings are translated into a pandoc argument
//!    vector
//! 3. **Invocation** - Pandoc is run against a temporary staged file
//!
//! # Example
//!
//! ```ignore
//! use mdpress_pdf::{convert_file, Settings};
//!
//! let settings = Settings::default();
//! let pdf = convert_file("report.md".as_ref(), "report.pdf".as_ref(), &settings, false)?;
//! ```

mod config;
mod convert;
mod error;
mod frontmatter;
mod pandoc;

pub use config::{
    DocumentSettings, MarkdownSettings, OutputSettings, PandocSettings, Settings,
    TypographySettings,
};
pub use convert::{convert_file, stage_markdown};
pub use error::{ConvertError, Result};
pub use frontmatter::format_front_matter;
pub use pandoc::{build_args, run_pandoc};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
