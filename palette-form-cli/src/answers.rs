//! Questionnaire answers read from a TOML or JSON file
//!
//! The file is a flat table of form field names. Strings and numbers become
//! single values, arrays become repeated values (checkbox groups), and
//! booleans are checkboxes: `true` checks the box, `false` leaves the field
//! out of the form entirely.

use anyhow::{bail, Context, Result};
use palette_form::FormData;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Value a checked checkbox submits
const CHECKED: &str = "on";

pub fn load(path: &Path) -> Result<FormData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file '{}'", path.display()))?;

    let value = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in '{}'", path.display()))?,
        _ => {
            let table: toml::Table = toml::from_str(&content)
                .with_context(|| format!("Invalid TOML in '{}'", path.display()))?;
            serde_json::to_value(table)?
        }
    };

    to_form(&value)
}

fn to_form(value: &Value) -> Result<FormData> {
    let Some(fields) = value.as_object() else {
        bail!("answers must be a table of field names");
    };

    let mut form = FormData::new();
    for (name, value) in fields {
        match value {
            Value::Bool(true) => form.append(name, CHECKED),
            Value::Bool(false) | Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    form.append(name, &scalar(name, item)?);
                }
            }
            other => form.append(name, &scalar(name, other)?),
        }
    }
    Ok(form)
}

fn scalar(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => bail!("field '{}' must hold text, numbers or a list of them", name),
    }
}
