//! Blockquote and table spacing rules
//!
//! Blockquotes and pipe tables must be separated from surrounding content by
//! blank lines, or pandoc renders them as part of the adjacent paragraph.

use mdpress_core::diagnostics::Diagnostic;
use mdpress_core::scanner::LineClass;

use crate::{SourceFile, Validator};

/// Validates blank-line separation around blockquotes
///
/// A quote opening directly below a line that ends with a colon is accepted;
/// that is the common lead-in style for styled notes.
///
/// # Diagnostic Codes
///
/// - `MD105`: blockquote not blank-line separated
pub struct QuoteSpacingValidator;

impl Validator for QuoteSpacingValidator {
    fn code(&self) -> &'static str {
        "MD105"
    }

    fn name(&self) -> &'static str {
        "quote-spacing"
    }

    fn validate(&self, source: &SourceFile) -> Vec<Diagnostic> {
        let lines = source.lines();
        let classes = source.classes();
        let mut diagnostics = Vec::new();

        for i in 1..lines.len() {
            let prev = &classes[i - 1];
            let current = &classes[i];

            if *current == LineClass::Quote
                && *prev != LineClass::Quote
                && *prev != LineClass::Blank
                && !lines[i - 1].trim_end().ends_with(':')
            {
                diagnostics.push(
                    Diagnostic::warning("Blockquote is not preceded by a blank line")
                        .with_code("MD105")
                        .with_line(i + 1)
                        .with_help("Add a blank line before the blockquote"),
                );
            }

            if *prev == LineClass::Quote
                && *current != LineClass::Quote
                && *current != LineClass::Blank
            {
                diagnostics.push(
                    Diagnostic::warning("Blockquote is not followed by a blank line")
                        .with_code("MD105")
                        .with_line(i + 1)
                        .with_help("Add a blank line after the blockquote"),
                );
            }
        }

        diagnostics
    }
}

/// Validates blank-line separation around pipe tables
///
/// # Diagnostic Codes
///
/// - `MD106`: table not blank-line separated
pub struct TableSpacingValidator;

impl Validator for TableSpacingValidator {
    fn code(&self) -> &'static str {
        "MD106"
    }

    fn name(&self) -> &'static str {
        "table-spacing"
    }

    fn validate(&self, source: &SourceFile) -> Vec<Diagnostic> {
        let lines = source.lines();
        let classes = source.classes();
        let mut diagnostics = Vec::new();

        for i in 1..lines.len() {
            let prev = &classes[i - 1];
            let current = &classes[i];

            if current.is_table()
                && !prev.is_table()
                && *prev != LineClass::Blank
                && !lines[i - 1].trim_end().ends_with(':')
            {
                diagnostics.push(
                    Diagnostic::warning("Table is not preceded by a blank line")
                        .with_code("MD106")
                        .with_line(i + 1)
                        .with_help("Add a blank line before the table"),
                );
            }

            if prev.is_table() && !current.is_table() && *current != LineClass::Blank {
                diagnostics.push(
                    Diagnostic::warning("Table is not followed by a blank line")
                        .with_code("MD106")
                        .with_line(i + 1)
                        .with_help("Add a blank line after the table"),
                );
            }
        }

        diagnostics
    }
}
