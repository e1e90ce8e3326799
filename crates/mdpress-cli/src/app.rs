//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use mdpress_core::diagnostics::Diagnostic;
use mdpress_core::normalize;
use mdpress_pdf::{convert_file, Settings};
use mdpress_validate::{SourceFile, ValidationEngine};

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(author, version, about = "Markdown to PDF, the readable way", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file to PDF
    Convert {
        /// Input Markdown file
        input: PathBuf,

        /// Output PDF file (defaults to the input name with .pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// PDF template name or path
        #[arg(short, long)]
        template: Option<String>,

        /// Include a table of contents
        #[arg(long)]
        toc: bool,

        /// Table of contents depth
        #[arg(long)]
        toc_depth: Option<u8>,

        /// PDF engine (xelatex, pdflatex, lualatex)
        #[arg(long)]
        pdf_engine: Option<String>,

        /// Code highlighting style
        #[arg(long)]
        highlight_style: Option<String>,

        /// Skip Markdown normalization before conversion
        #[arg(long)]
        no_preprocess: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check Markdown files for formatting issues
    Check {
        /// Input Markdown files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Strict mode: exit with error code on any issue
        #[arg(long)]
        strict: bool,
    },

    /// Normalize a Markdown file and print the result
    Normalize {
        /// Input Markdown file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            template,
            toc,
            toc_depth,
            pdf_engine,
            highlight_style,
            no_preprocess,
            verbose,
        } => {
            let overrides = ConvertOverrides {
                template,
                toc,
                toc_depth,
                pdf_engine,
                highlight_style,
                no_preprocess,
            };
            convert_command(&input, output.as_deref(), config.as_deref(), overrides, verbose)?;
        }
        Commands::Check {
            inputs,
            format,
            strict,
        } => {
            check_command(&inputs, format, strict)?;
        }
        Commands::Normalize { input, output } => {
            normalize_command(&input, output.as_deref())?;
        }
    }

    Ok(())
}

/// Command-line overrides applied on top of the configuration file
#[derive(Debug, Default)]
pub struct ConvertOverrides {
    pub template: Option<String>,
    pub toc: bool,
    pub toc_depth: Option<u8>,
    pub pdf_engine: Option<String>,
    pub highlight_style: Option<String>,
    pub no_preprocess: bool,
}

impl ConvertOverrides {
    fn apply(self, settings: &mut Settings) {
        if let Some(template) = self.template {
            settings.output.template = Some(template);
        }
        if self.toc {
            settings.output.toc = true;
        }
        if let Some(depth) = self.toc_depth {
            settings.output.toc_depth = depth;
        }
        if let Some(engine) = self.pdf_engine {
            settings.pandoc.pdf_engine = engine;
        }
        if let Some(style) = self.highlight_style {
            settings.markdown.highlight_style = style;
        }
        if self.no_preprocess {
            settings.markdown.preprocess = false;
        }
    }
}

/// Execute the convert command
pub fn convert_command(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    overrides: ConvertOverrides,
    verbose: bool,
) -> Result<()> {
    let mut settings = load_settings(config)?;
    overrides.apply(&mut settings);

    // Default: same name next to the input
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("pdf"),
    };

    if verbose {
        println!("mdpress v{}", mdpress_pdf::VERSION);
        println!("Converting: {}", input.display());
    }

    let pdf = convert_file(input, &output_path, &settings, verbose)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("✓ PDF created: {}", pdf.display());
    Ok(())
}

/// Execute the check command
pub fn check_command(inputs: &[PathBuf], format: OutputFormat, strict: bool) -> Result<()> {
    let files = collect_markdown_files(inputs)?;
    if files.is_empty() {
        anyhow::bail!("No Markdown files found");
    }

    let engine = ValidationEngine::with_defaults();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for file in &files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read input file: {}", file.display()))?;
        let source = SourceFile::with_name(&content, file.display().to_string());
        diagnostics.extend(engine.validate(&source));
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&diagnostics)
                .context("Failed to serialize diagnostics to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                println!("✓ No issues found in {} file(s)", files.len());
            } else {
                for diag in &diagnostics {
                    println!("{}", diag);
                    println!();
                }
                let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
                let warning_count = diagnostics.iter().filter(|d| d.is_warning()).count();
                println!(
                    "Found {} error(s) and {} warning(s) in {} file(s)",
                    error_count,
                    warning_count,
                    files.len()
                );
                println!();
                println!("Most issues can be fixed automatically:");
                println!("  mdpress normalize <file> -o <file>");
            }
        }
    }

    let has_errors = diagnostics.iter().any(|d| d.is_error());
    if has_errors || (strict && !diagnostics.is_empty()) {
        std::process::exit(1);
    }

    Ok(())
}

/// Execute the normalize command
pub fn normalize_command(input: &Path, output: Option<&Path>) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let normalized = normalize(&content);

    match output {
        Some(path) => {
            fs::write(path, &normalized)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("✓ Normalized: {}", path.display());
        }
        None => {
            print!("{}", normalized);
        }
    }

    Ok(())
}

/// Load settings from a config file or use defaults
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Settings::load(path)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        }
        None => {
            // Try common locations
            let candidates = ["mdpress.toml", ".mdpress.toml"];
            for candidate in candidates {
                let path = Path::new(candidate);
                if path.exists() {
                    if let Ok(settings) = Settings::load(path) {
                        return Ok(settings);
                    }
                }
            }
            Ok(Settings::default())
        }
    }
}

/// Expand files and directories into a sorted list of Markdown files
fn collect_markdown_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input)
                .with_context(|| format!("Failed to read directory: {}", input.display()))?;
            for entry in entries {
                let path = entry?.path();
                if path.extension().is_some_and(|ext| ext == "md") {
                    files.push(path);
                }
            }
        } else {
            if !input.exists() {
                anyhow::bail!("Input file not found: {}", input.display());
            }
            files.push(input.clone());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_parse_convert() {
        let args = vec!["mdpress", "convert", "doc.md", "--output", "out.pdf"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Convert {
                input,
                output,
                toc,
                verbose,
                ..
            } => {
                assert_eq!(input, PathBuf::from("doc.md"));
                assert_eq!(output, Some(PathBuf::from("out.pdf")));
                assert!(!toc);
                assert!(!verbose);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_cli_parse_convert_defaults() {
        let args = vec!["mdpress", "convert", "doc.md"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Convert {
                input,
                output,
                config,
                template,
                toc_depth,
                ..
            } => {
                assert_eq!(input, PathBuf::from("doc.md"));
                assert!(output.is_none());
                assert!(config.is_none());
                assert!(template.is_none());
                assert!(toc_depth.is_none());
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_cli_parse_convert_overrides() {
        let args = vec![
            "mdpress",
            "convert",
            "doc.md",
            "--toc",
            "--toc-depth",
            "2",
            "--pdf-engine",
            "lualatex",
            "--no-preprocess",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Convert {
                toc,
                toc_depth,
                pdf_engine,
                no_preprocess,
                ..
            } => {
                assert!(toc);
                assert_eq!(toc_depth, Some(2));
                assert_eq!(pdf_engine, Some("lualatex".to_string()));
                assert!(no_preprocess);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let args = vec!["mdpress", "check", "doc.md"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Check {
                inputs,
                format,
                strict,
            } => {
                assert_eq!(inputs, vec![PathBuf::from("doc.md")]);
                assert!(matches!(format, OutputFormat::Text));
                assert!(!strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_json_strict() {
        let args = vec![
            "mdpress", "check", "a.md", "b.md", "--format", "json", "--strict",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Check {
                inputs,
                format,
                strict,
            } => {
                assert_eq!(inputs.len(), 2);
                assert!(matches!(format, OutputFormat::Json));
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_requires_input() {
        let args = vec!["mdpress", "check"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parse_normalize() {
        let args = vec!["mdpress", "normalize", "doc.md", "-o", "clean.md"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Normalize { input, output } => {
                assert_eq!(input, PathBuf::from("doc.md"));
                assert_eq!(output, Some(PathBuf::from("clean.md")));
            }
            _ => panic!("Expected Normalize command"),
        }
    }

    #[test]
    fn test_overrides_apply() {
        let mut settings = Settings::default();
        let overrides = ConvertOverrides {
            template: Some("report".to_string()),
            toc: true,
            toc_depth: Some(4),
            pdf_engine: Some("pdflatex".to_string()),
            highlight_style: Some("tango".to_string()),
            no_preprocess: true,
        };
        overrides.apply(&mut settings);

        assert_eq!(settings.output.template.as_deref(), Some("report"));
        assert!(settings.output.toc);
        assert_eq!(settings.output.toc_depth, 4);
        assert_eq!(settings.pandoc.pdf_engine, "pdflatex");
        assert_eq!(settings.markdown.highlight_style, "tango");
        assert!(!settings.markdown.preprocess);
    }

    #[test]
    fn test_overrides_default_is_noop() {
        let mut settings = Settings::default();
        ConvertOverrides::default().apply(&mut settings);

        assert_eq!(settings.pandoc.pdf_engine, "xelatex");
        assert!(!settings.output.toc);
        assert!(settings.markdown.preprocess);
    }

    #[test]
    fn test_collect_markdown_files_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.md", "notes.txt"] {
            let mut f = fs::File::create(dir.path().join(name)).unwrap();
            writeln!(f, "content").unwrap();
        }

        let files = collect_markdown_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.md"));
        assert!(files[1].ends_with("b.md"));
    }

    #[test]
    fn test_collect_markdown_files_missing() {
        let result = collect_markdown_files(&[PathBuf::from("no-such-file.md")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_settings_missing_config_is_error() {
        let result = load_settings(Some(Path::new("no-such-config.toml")));
        assert!(result.is_err());
    }
}
