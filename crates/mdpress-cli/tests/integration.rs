//! Integration tests for the mdpress CLI
//!
//! These tests exercise the command implementations through the filesystem,
//! stopping just short of invoking pandoc.

use std::fs;

use tempfile::TempDir;

use mdpress_cli::{normalize_command, ConvertOverrides};
use mdpress_pdf::{build_args, stage_markdown, Settings};
use mdpress_validate::{SourceFile, ValidationEngine};

const MESSY: &str = "\
# Report
Intro right after the heading.
- first item
- second item
Trailing prose glued to the list.
";

#[test]
fn test_normalize_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("clean.md");
    fs::write(&input, MESSY).unwrap();

    normalize_command(&input, Some(&output)).unwrap();

    let cleaned = fs::read_to_string(&output).unwrap();
    assert!(cleaned.contains("# Report\n\nIntro"));
    assert!(cleaned.contains("- second item\n\nTrailing"));
}

#[test]
fn test_normalize_in_place_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, MESSY).unwrap();

    normalize_command(&input, Some(&input)).unwrap();
    let first = fs::read_to_string(&input).unwrap();

    normalize_command(&input, Some(&input)).unwrap();
    let second = fs::read_to_string(&input).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_normalize_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.md");
    assert!(normalize_command(&missing, None).is_err());
}

#[test]
fn test_normalized_output_passes_check() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, MESSY).unwrap();
    normalize_command(&input, Some(&input)).unwrap();

    let content = fs::read_to_string(&input).unwrap();
    let engine = ValidationEngine::with_defaults();
    let diagnostics = engine.validate(&SourceFile::new(&content));
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
}

#[test]
fn test_messy_input_fails_check() {
    let engine = ValidationEngine::with_defaults();
    let diagnostics = engine.validate(&SourceFile::new(MESSY));
    assert!(!diagnostics.is_empty());
}

// Everything convert does except running pandoc: stage the document and
// build the argument vector.
#[test]
fn test_conversion_staging() {
    let mut settings = Settings::default();
    let overrides = ConvertOverrides {
        toc: true,
        ..ConvertOverrides::default()
    };
    // Mirror what convert_command does before calling into mdpress-pdf
    if overrides.toc {
        settings.output.toc = true;
    }

    let content = "---\ntitle: Staged\n---\n# Heading\nBody.\n";
    let staged = stage_markdown(content, &settings).unwrap();
    assert!(staged.starts_with("---\n"));
    assert!(staged.contains("title: Staged"));
    assert!(staged.contains("# Heading\n\nBody.\n"));

    let args = build_args(
        &settings,
        "staged.md".as_ref(),
        "out.pdf".as_ref(),
    );
    assert_eq!(args[0], "staged.md");
    assert!(args.contains(&"--toc".to_string()));
    assert!(args.contains(&"--standalone".to_string()));
}

#[test]
fn test_config_file_drives_staging() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("mdpress.toml");
    fs::write(
        &config,
        "[typography]\nmainfont = \"Georgia\"\n\n[markdown]\npreprocess = false\n",
    )
    .unwrap();

    let settings = Settings::load(&config).unwrap();
    let staged = stage_markdown("# Heading\nGlued.\n", &settings).unwrap();

    assert!(staged.contains("mainfont: Georgia"));
    // Preprocessing disabled, body untouched
    assert!(staged.contains("# Heading\nGlued.\n"));
}
