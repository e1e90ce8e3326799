//! Pandoc invocation
//!
//! Builds the argument vector from the settings and runs the external
//! pandoc process. Arguments the document already controls through front
//! matter (fonts, margins, colors) are passed as `--variable` fallbacks so
//! templates without front-matter plumbing still pick them up.

use std::path::Path;
use std::process::Command;

use crate::config::{PandocSettings, Settings};
use crate::error::{ConvertError, Result};

/// Build the pandoc argument vector for one conversion
pub fn build_args(settings: &Settings, input: &Path, output: &Path) -> Vec<String> {
    let mut args = Vec::new();

    args.push(input.display().to_string());
    args.push("-o".to_string());
    args.push(output.display().to_string());

    let template = settings.resolve_template();
    if let Some(ref path) = template {
        args.push("--template".to_string());
        args.push(path.display().to_string());
    }

    if settings.output.toc {
        args.push("--toc".to_string());
        args.push("--toc-depth".to_string());
        args.push(settings.output.toc_depth.to_string());
    }

    // Technical templates carry manual section numbers in the source, so
    // automatic numbering would double up
    let technical = template
        .as_deref()
        .and_then(Path::to_str)
        .is_some_and(|p| p.contains("technical"));
    if technical {
        push_variable(&mut args, "numbersections", "false");
    } else if settings.output.numbered {
        args.push("-N".to_string());
    }

    args.push("--pdf-engine".to_string());
    args.push(settings.pandoc.pdf_engine.clone());

    args.push("--highlight-style".to_string());
    args.push(settings.markdown.highlight_style.clone());

    let typography = &settings.typography;
    if let Some(ref font) = typography.mainfont {
        push_variable(&mut args, "mainfont", font);
    }
    if let Some(ref font) = typography.sansfont {
        push_variable(&mut args, "sansfont", font);
    }
    if let Some(ref font) = typography.monofont {
        push_variable(&mut args, "monofont", font);
    }
    push_variable(&mut args, "fontsize", &typography.fontsize);
    push_variable(&mut args, "papersize", &settings.output.papersize);
    push_variable(&mut args, "linestretch", &typography.lineheight);

    if settings.markdown.citations {
        args.push("--citeproc".to_string());
    }
    if settings.markdown.math {
        args.push("--mathjax".to_string());
    }

    if settings.markdown.table_styling {
        push_variable(&mut args, "booktabs", "true");
        push_variable(&mut args, "tables", "true");
    }

    if let Some(ref lang) = typography.lang {
        push_variable(&mut args, "lang", lang);
    }

    push_variable(&mut args, "graphics", "yes");
    push_variable(&mut args, "linkcolor", "blue");
    push_variable(&mut args, "urlcolor", "blue");
    push_variable(&mut args, "toccolor", "black");
    push_variable(&mut args, "colorlinks", "true");

    match settings.output.geometry {
        Some(ref geometry) => push_variable(&mut args, "geometry", geometry),
        None => {
            push_variable(&mut args, "margin-left", "2.5cm");
            push_variable(&mut args, "margin-right", "2.5cm");
            push_variable(&mut args, "margin-top", "3cm");
            push_variable(&mut args, "margin-bottom", "3cm");
        }
    }

    push_variable(&mut args, "pagestyle", &settings.output.pagestyle);

    args.push("--standalone".to_string());

    args.extend(settings.pandoc.extra_args.iter().cloned());

    args
}

fn push_variable(args: &mut Vec<String>, key: &str, value: &str) {
    args.push("--variable".to_string());
    args.push(format!("{key}={value}"));
}

/// Run pandoc with the given arguments, waiting for it to finish
pub fn run_pandoc(pandoc: &PandocSettings, args: &[String], verbose: bool) -> Result<()> {
    if verbose {
        println!("Executing: {} {}", pandoc.bin_path, args.join(" "));
    }

    let output = Command::new(&pandoc.bin_path)
        .args(args)
        .output()
        .map_err(|source| ConvertError::PandocLaunch {
            bin: pandoc.bin_path.clone(),
            source,
        })?;

    if verbose && !output.stdout.is_empty() {
        println!("{}", String::from_utf8_lossy(&output.stdout));
    }

    if !output.status.success() {
        return Err(ConvertError::PandocFailed {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}
