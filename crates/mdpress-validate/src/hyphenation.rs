//! Hyphenation rule
//!
//! A lowercase word ending in a hyphen at a line break usually means a word
//! was split by hand while wrapping. The typesetter re-wraps everything, so
//! the hyphen survives into the middle of a line in the PDF.

use mdpress_core::diagnostics::Diagnostic;
use mdpress_core::scanner::LineClass;

use crate::{SourceFile, Validator};

/// Validates that no word is hyphenated across a line break
///
/// # Diagnostic Codes
///
/// - `MD107`: hyphenated word at a line break
pub struct HyphenationValidator;

impl Validator for HyphenationValidator {
    fn code(&self) -> &'static str {
        "MD107"
    }

    fn name(&self) -> &'static str {
        "hyphenation"
    }

    fn validate(&self, source: &SourceFile) -> Vec<Diagnostic> {
        let lines = source.lines();
        let classes = source.classes();
        let mut diagnostics = Vec::new();

        for i in 0..lines.len().saturating_sub(1) {
            if classes[i] != LineClass::Prose || classes[i + 1] != LineClass::Prose {
                continue;
            }
            if ends_with_broken_word(&lines[i]) && starts_lowercase(&lines[i + 1]) {
                diagnostics.push(
                    Diagnostic::warning(format!(
                        "Hyphenated word at line break: {:?}",
                        lines[i].trim()
                    ))
                    .with_code("MD107")
                    .with_line(i + 1)
                    .with_help("Join the word; let the typesetter handle wrapping"),
                );
            }
        }

        diagnostics
    }
}

/// Line ends with a lowercase letter followed by a hyphen
fn ends_with_broken_word(line: &str) -> bool {
    let mut chars = line.trim_end().chars().rev();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Line starts with a lowercase letter
fn starts_lowercase(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}
