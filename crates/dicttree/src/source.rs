//! Loading nested values from JSON and TOML.
//!
//! Key order of objects and tables is preserved, so mapping children appear
//! in the order they were written.
//!
//! # Example
//!
//! ```ignore
//! use dicttree::source::{parse_json, read_path};
//!
//! let value = parse_json(r#"{"a": [1, 2], "b": "x"}"#)?;
//! let config = read_path("settings.toml")?;
//! ```

use std::path::Path;

use crate::error::{Error, Result};
use crate::value::Value;

/// Parses JSON text into a value.
pub fn parse_json(s: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(s).map_err(|e| Error::json(None, e))?;
    Ok(Value::from(json))
}

/// Reads and parses a JSON file.
pub fn read_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = read_text(path)?;
    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| Error::json(Some(path.to_path_buf()), e))?;
    Ok(Value::from(json))
}

/// Parses a TOML document into a mapping value.
pub fn parse_toml(s: &str) -> Result<Value> {
    let table: toml::Table = toml::from_str(s).map_err(|e| Error::toml(None, e))?;
    Ok(Value::from(toml::Value::Table(table)))
}

/// Reads and parses a TOML file.
pub fn read_toml(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = read_text(path)?;
    let table: toml::Table =
        toml::from_str(&content).map_err(|e| Error::toml(Some(path.to_path_buf()), e))?;
    Ok(Value::from(toml::Value::Table(table)))
}

/// Reads a file as TOML if its extension is `toml`, otherwise as JSON.
pub fn read_path(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        read_toml(path)
    } else {
        read_json(path)
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
