//! mdpress-core - line-oriented Markdown normalization
//!
//! Core library for mdpress, providing the text normalization pipeline that
//! prepares technical Markdown documents for PDF rendering.
//!
//! The pipeline classifies each line once (heading, list item, table row,
//! blockquote, fence boundary, blank, prose) and applies an ordered sequence
//! of idempotent rewrite passes over the classified block runs: tables,
//! blockquotes, lists, description lists, headings, code fences, and a final
//! blank-line collapse.
//!
//! # Example
//!
//! ```
//! use mdpress_core::normalize;
//!
//! let input = "**Notes:**\n* item one\n+ item two\n";
//! let output = normalize(input);
//! assert_eq!(output, "**Notes:**\n\n- item one\n- item two\n");
//!
//! // The pipeline is a fixed point
//! assert_eq!(normalize(&output), output);
//! ```

pub mod diagnostics;
pub mod frontmatter;
pub mod normalize;
pub mod scanner;

// Re-export main types and functions
pub use normalize::normalize;
pub use scanner::{classify_lines, scan, LineClass};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
