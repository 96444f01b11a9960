//! Declarative form definitions
//!
//! A definition lists fields with their serialized rules and optional initial
//! values. Definitions and value maps load from JSON, YAML, or TOML, chosen by
//! file extension.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use super::FormOptions;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A form as written by its author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub options: FormOptions,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One field of a definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Serialized rule list, e.g. `required|minLength:5`
    #[serde(default)]
    pub rules: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ScalarValue>,
}

/// Scalar accepted wherever a field value is expected
///
/// Numbers and booleans are converted to their textual form before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
    Toml,
}

impl DefinitionFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(self, content: &str) -> Result<T> {
        let parsed = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        };
        Ok(parsed)
    }
}

fn read_with_format<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let format = DefinitionFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?format, bytes = content.len(), "Read definition file");
    format.parse(&content)
}

impl FormDefinition {
    /// Load a definition, picking the parser from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let definition: Self = read_with_format(path)?;
        definition.check()?;
        Ok(definition)
    }

    /// Parse a definition from a string in a known format
    pub fn parse(content: &str, format: DefinitionFormat) -> Result<Self> {
        let definition: Self = format.parse(content)?;
        definition.check()?;
        Ok(definition)
    }

    /// Structural checks: non-empty, unique field names
    pub fn check(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(Error::definition("field with an empty name"));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(Error::definition(format!("duplicate field '{}'", field.name)));
            }
        }
        Ok(())
    }
}

/// Load a `field name -> value` map; `null` entries mark absent values
pub fn load_values(path: &Path) -> Result<BTreeMap<String, Option<String>>> {
    let raw: BTreeMap<String, Option<ScalarValue>> = read_with_format(path)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| (name, value.map(|v| v.to_string())))
        .collect())
}
