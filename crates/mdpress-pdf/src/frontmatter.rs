//! Front-matter merging
//!
//! Combines the document's own YAML front matter with fallbacks derived from
//! the settings. Keys present in the document always win; the settings only
//! fill gaps. The merged mapping is re-emitted as a `---` delimited header
//! for pandoc.

use serde_yaml::{Mapping, Value};

use crate::config::Settings;
use crate::error::Result;

/// Merge settings-derived defaults into the document front matter and
/// serialize the result as a YAML header
///
/// `header` is the raw YAML between the document's `---` delimiters, if any.
pub fn format_front_matter(header: Option<&str>, settings: &Settings) -> Result<String> {
    let mut meta = parse_header(header)?;
    apply_defaults(&mut meta, settings);

    let yaml = serde_yaml::to_string(&Value::Mapping(meta))?;
    Ok(format!("---\n{yaml}---\n\n"))
}

fn parse_header(header: Option<&str>) -> Result<Mapping> {
    match header {
        Some(text) if !text.trim().is_empty() => {
            let value: Value = serde_yaml::from_str(text)?;
            match value {
                Value::Mapping(map) => Ok(map),
                // Scalar or sequence front matter carries no usable keys
                _ => Ok(Mapping::new()),
            }
        }
        _ => Ok(Mapping::new()),
    }
}

fn apply_defaults(meta: &mut Mapping, settings: &Settings) {
    if let Some(ref title) = settings.document.title {
        set_default(meta, "title", Value::from(title.clone()));
    }
    if let Some(ref author) = settings.document.author {
        set_default(meta, "author", Value::from(author.clone()));
    }
    set_default(meta, "date", Value::from(today()));

    let typography = &settings.typography;
    if let Some(ref font) = typography.mainfont {
        set_default(meta, "mainfont", Value::from(font.clone()));
    }
    if let Some(ref font) = typography.sansfont {
        set_default(meta, "sansfont", Value::from(font.clone()));
    }
    if let Some(ref font) = typography.monofont {
        set_default(meta, "monofont", Value::from(font.clone()));
    }
    set_default(meta, "fontsize", Value::from(typography.fontsize.clone()));
    set_default(meta, "lineheight", Value::from(typography.lineheight.clone()));
    if let Some(ref lang) = typography.lang {
        set_default(meta, "lang", Value::from(lang.clone()));
    }

    let output = &settings.output;
    set_default(meta, "papersize", Value::from(output.papersize.clone()));

    if !meta.contains_key(&Value::from("geometry")) {
        match output.geometry {
            Some(ref geometry) => {
                meta.insert(Value::from("geometry"), Value::from(geometry.clone()));
            }
            None => {
                set_default(meta, "margin-left", Value::from("2.5cm"));
                set_default(meta, "margin-right", Value::from("2.5cm"));
                set_default(meta, "margin-top", Value::from("3cm"));
                set_default(meta, "margin-bottom", Value::from("3cm"));
            }
        }
    }

    set_default(meta, "linkcolor", Value::from("blue"));
    set_default(meta, "colorlinks", Value::from(true));

    let toc_requested =
        output.toc || meta.get(&Value::from("toc")) == Some(&Value::from(true));
    if toc_requested {
        set_default(meta, "toc-depth", Value::from(output.toc_depth as u64));
    }

    if output.numbered {
        set_default(meta, "numbersections", Value::from(true));
    }
    if let Some(ref class) = output.documentclass {
        set_default(meta, "documentclass", Value::from(class.clone()));
    }

    if settings.markdown.table_styling {
        set_default(meta, "tables", Value::from(true));
        set_default(meta, "booktabs", Value::from(true));
    }
}

/// Insert a key only when the document did not set it
fn set_default(meta: &mut Mapping, key: &str, value: Value) {
    let key = Value::from(key);
    if !meta.contains_key(&key) {
        meta.insert(key, value);
    }
}

/// Today's date as YYYY-MM-DD
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
