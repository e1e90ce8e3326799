//! mdpress-validate - Markdown style validation engine
//!
//! This crate checks Markdown sources for formatting issues that are known
//! to break or degrade the PDF conversion: missing blank lines around lists,
//! tables, and blockquotes, manual section numbers, irregular nesting, and
//! hyphenated words at line breaks.
//!
//! # Architecture
//!
//! Individual rules implement the `Validator` trait over a [`SourceFile`],
//! which pairs the source text with its structural line classification so
//! every rule shares one scan. The `ValidationEngine` runs all registered
//! validators and collects diagnostics.
//!
//! # Example
//!
//! ```
//! use mdpress_validate::{SourceFile, ValidationEngine};
//!
//! let engine = ValidationEngine::with_defaults();
//! let source = SourceFile::new("intro\n- item without blank line above\n");
//! let diagnostics = engine.validate(&source);
//! assert!(!diagnostics.is_empty());
//! ```

pub mod blocks;
pub mod headings;
pub mod hyphenation;
pub mod lists;

use mdpress_core::diagnostics::Diagnostic;
use mdpress_core::scanner::{classify_lines, LineClass};

// Re-export validators
pub use blocks::{QuoteSpacingValidator, TableSpacingValidator};
pub use headings::ManualNumberingValidator;
pub use hyphenation::HyphenationValidator;
pub use lists::{ListIndentValidator, ListSpacingValidator};

/// A Markdown source with its structural line classification
///
/// Rules work on classified lines rather than re-matching raw text, so the
/// classification happens once per file.
pub struct SourceFile {
    name: Option<String>,
    lines: Vec<String>,
    classes: Vec<LineClass>,
}

impl SourceFile {
    /// Classify a source text
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let classes = classify_lines(&lines);
        Self {
            name: None,
            lines,
            classes,
        }
    }

    /// Classify a source text and remember its file name for diagnostics
    pub fn with_name(text: &str, name: impl Into<String>) -> Self {
        let mut source = Self::new(text);
        source.name = Some(name.into());
        source
    }

    /// File name, if known
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Source lines (without terminators)
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Structural class of each line
    pub fn classes(&self) -> &[LineClass] {
        &self.classes
    }
}

/// Trait for Markdown style validators
///
/// Validators inspect a source file and return a list of diagnostics for any
/// issues found. Each validator has a unique rule code.
pub trait Validator: Send + Sync {
    /// Get the validator's rule code (e.g. "MD102")
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this validator
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the source and return any diagnostics
    fn validate(&self, source: &SourceFile) -> Vec<Diagnostic>;
}

/// Validation engine that orchestrates multiple validators
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create a new empty validation engine
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with all default rules registered
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(ManualNumberingValidator));
        engine.add_validator(Box::new(ListSpacingValidator));
        engine.add_validator(Box::new(ListIndentValidator));
        engine.add_validator(Box::new(QuoteSpacingValidator));
        engine.add_validator(Box::new(TableSpacingValidator));
        engine.add_validator(Box::new(HyphenationValidator));
        engine
    }

    /// Add a validator to the engine
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Get the number of registered validators
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Get the names of all registered validators
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Validate a source file using all registered validators
    ///
    /// Returns a vector of all diagnostics from all validators, tagged with
    /// the file name when the source has one.
    pub fn validate(&self, source: &SourceFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for validator in &self.validators {
            diagnostics.extend(validator.validate(source));
        }

        if let Some(name) = source.name() {
            for diag in &mut diagnostics {
                if diag.file.is_none() {
                    diag.file = Some(name.to_string());
                }
            }
        }

        diagnostics
    }

    /// Check if a source has any error-level issues
    pub fn has_errors(&self, source: &SourceFile) -> bool {
        self.validate(source).iter().any(|d| d.is_error())
    }

    /// Check if a source has any issues at all
    pub fn has_issues(&self, source: &SourceFile) -> bool {
        !self.validate(source).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_engine_new() {
        let engine = ValidationEngine::new();
        assert_eq!(engine.validator_count(), 0);
    }

    #[test]
    fn test_engine_with_defaults() {
        let engine = ValidationEngine::with_defaults();
        assert_eq!(engine.validator_count(), 6);
        assert!(engine.validator_names().contains(&"list-spacing"));
        assert!(engine.validator_names().contains(&"table-spacing"));
    }

    #[test]
    fn test_validate_empty_source() {
        let engine = ValidationEngine::with_defaults();
        let source = SourceFile::new("");
        assert!(engine.validate(&source).is_empty());
    }

    #[test]
    fn test_validate_clean_document() {
        let engine = ValidationEngine::with_defaults();
        let source = SourceFile::new(
            "# Title\n\nparagraph\n\n- item one\n- item two\n\n> quote\n\n|a|b|\n|-|-|\n|1|2|\n",
        );
        let diagnostics = engine.validate(&source);
        assert!(
            diagnostics.is_empty(),
            "clean document should pass: {diagnostics:?}"
        );
    }

    #[test]
    fn test_validate_tags_file_name() {
        let engine = ValidationEngine::with_defaults();
        let source = SourceFile::with_name("intro\n- item\n", "report.md");
        let diagnostics = engine.validate(&source);
        assert!(!diagnostics.is_empty());
        assert!(diagnostics
            .iter()
            .all(|d| d.file.as_deref() == Some("report.md")));
    }

    #[test]
    fn test_has_issues() {
        let engine = ValidationEngine::with_defaults();
        let dirty = SourceFile::new("intro\n- item\n");
        assert!(engine.has_issues(&dirty));

        let clean = SourceFile::new("intro\n\n- item\n");
        assert!(!engine.has_issues(&clean));
    }

    #[test]
    fn test_has_errors_is_false_for_warnings() {
        let engine = ValidationEngine::with_defaults();
        let source = SourceFile::new("intro\n- item\n");
        assert!(!engine.has_errors(&source));
    }
}
