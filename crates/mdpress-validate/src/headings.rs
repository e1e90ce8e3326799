//! Heading numbering rule
//!
//! Section numbers belong to the renderer. Manually numbered headings clash
//! with pandoc's automatic numbering and produce doubled numbers in the PDF.

use regex::Regex;
use std::sync::OnceLock;

use mdpress_core::diagnostics::Diagnostic;
use mdpress_core::scanner::LineClass;

use crate::{SourceFile, Validator};

/// Validates that headings carry no manual section numbers
///
/// # Diagnostic Codes
///
/// - `MD101`: manual section number in a heading
pub struct ManualNumberingValidator;

impl Validator for ManualNumberingValidator {
    fn code(&self) -> &'static str {
        "MD101"
    }

    fn name(&self) -> &'static str {
        "manual-numbering"
    }

    fn validate(&self, source: &SourceFile) -> Vec<Diagnostic> {
        static NUMBERED_RE: OnceLock<Regex> = OnceLock::new();
        let numbered_re =
            NUMBERED_RE.get_or_init(|| Regex::new(r"^#{1,6}\s+\d+(\.\d+)*\.?\s+").unwrap());

        let mut diagnostics = Vec::new();

        for (i, class) in source.classes().iter().enumerate() {
            if !matches!(class, LineClass::Heading(_)) {
                continue;
            }
            let line = &source.lines()[i];
            if numbered_re.is_match(line) {
                diagnostics.push(
                    Diagnostic::warning(format!(
                        "Manual section number in heading: {:?}",
                        line.trim()
                    ))
                    .with_code("MD101")
                    .with_line(i + 1)
                    .with_help("Remove the number; sections are numbered automatically"),
                );
            }
        }

        diagnostics
    }
}
