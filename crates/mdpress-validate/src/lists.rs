//! List spacing and indentation rules
//!
//! Lists need a blank line before their first item and after their last, or
//! pandoc absorbs them into the surrounding paragraph. Nested items must
//! step their indentation by exactly two spaces.

use mdpress_core::diagnostics::Diagnostic;
use mdpress_core::scanner::{indent_width, LineClass};

use crate::{SourceFile, Validator};

/// Validates blank-line separation around list blocks
///
/// # Diagnostic Codes
///
/// - `MD102`: list item not preceded by a blank line
/// - `MD104`: list not followed by a blank line
pub struct ListSpacingValidator;

impl Validator for ListSpacingValidator {
    fn code(&self) -> &'static str {
        "MD102"
    }

    fn name(&self) -> &'static str {
        "list-spacing"
    }

    fn validate(&self, source: &SourceFile) -> Vec<Diagnostic> {
        let lines = source.lines();
        let classes = source.classes();
        let mut diagnostics = Vec::new();

        for i in 1..lines.len() {
            let prev = &classes[i - 1];
            let current = &classes[i];

            // Top-level item starting a list directly below other content
            if current.list_indent() == Some(0)
                && !prev.is_list_item()
                && *prev != LineClass::Blank
            {
                diagnostics.push(
                    Diagnostic::warning(format!(
                        "List is not preceded by a blank line: {:?}",
                        lines[i].trim()
                    ))
                    .with_code("MD102")
                    .with_line(i + 1)
                    .with_help("Add a blank line before the first list item"),
                );
            }

            // Content directly below a list item that is neither another
            // item, a continuation, nor a block that may follow a list
            if prev.is_list_item()
                && *current == LineClass::Prose
                && indent_width(&lines[i]) == 0
            {
                diagnostics.push(
                    Diagnostic::warning(format!(
                        "List is not followed by a blank line: {:?}",
                        lines[i].trim()
                    ))
                    .with_code("MD104")
                    .with_line(i + 1)
                    .with_help("Add a blank line after the last list item"),
                );
            }
        }

        diagnostics
    }
}

/// Validates nested list indentation steps
///
/// # Diagnostic Codes
///
/// - `MD103`: nested item indented by a step other than two spaces
pub struct ListIndentValidator;

impl Validator for ListIndentValidator {
    fn code(&self) -> &'static str {
        "MD103"
    }

    fn name(&self) -> &'static str {
        "list-indent"
    }

    fn validate(&self, source: &SourceFile) -> Vec<Diagnostic> {
        let lines = source.lines();
        let classes = source.classes();
        let mut diagnostics = Vec::new();
        let mut prev_indent: Option<usize> = None;

        for (i, class) in classes.iter().enumerate() {
            match class {
                LineClass::Blank => prev_indent = None,
                _ if class.is_list_item() => {
                    let indent = class.list_indent().unwrap_or(0);
                    if let Some(prev) = prev_indent {
                        if indent > prev && indent - prev != 2 {
                            diagnostics.push(
                                Diagnostic::warning(format!(
                                    "Nested list indentation should be exactly 2 spaces (found {})",
                                    indent - prev
                                ))
                                .with_code("MD103")
                                .with_line(i + 1)
                                .with_help("Indent nested items by 2 spaces per level"),
                            );
                        }
                    }
                    prev_indent = Some(indent);
                }
                _ => {}
            }
        }

        diagnostics
    }
}
