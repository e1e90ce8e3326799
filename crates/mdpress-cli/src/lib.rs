//! mdpress CLI - Command-line interface library
//!
//! This library provides the CLI functionality for mdpress, including:
//! - Convert: Markdown to PDF via pandoc
//! - Check: Validate Markdown formatting
//! - Normalize: Clean up Markdown structure
//!
//! # Library Usage
//!
//! ```ignore
//! use mdpress_cli::{run_cli, OutputFormat};
//!
//! // Run the full CLI
//! run_cli();
//!
//! // Or use individual commands programmatically
//! check_command(&inputs, OutputFormat::Json, false)?;
//! normalize_command(&input, None)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Convert Markdown to PDF
//! mdpress convert report.md --toc
//!
//! # Check Markdown for issues
//! mdpress check docs/ --format json
//!
//! # Normalize a Markdown file in place
//! mdpress normalize report.md -o report.md
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{check_command, convert_command, normalize_command};
pub use app::{run_cli, ConvertOverrides, OutputFormat};
