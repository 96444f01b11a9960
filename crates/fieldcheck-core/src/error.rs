//! Error types for the Fieldcheck core library
//!
//! Validation failures are never errors: they are returned as
//! [`ValidationResult`](crate::ValidationResult) values. The types here cover
//! the surrounding plumbing, such as strict rule compilation and loading form
//! definitions from disk.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

use crate::rules::RuleError;

/// Main error type for Fieldcheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// A rule list was rejected during strict compilation
    #[error("Rule error in field '{field}': {source}")]
    Rule {
        field: String,
        #[source]
        source: RuleError,
    },

    /// A form definition is structurally invalid
    #[error("Invalid form definition: {message}")]
    Definition { message: String },

    /// A definition file has an extension we cannot parse
    #[error("Unsupported definition format for {}: expected .json, .yaml, .yml or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// JSON parsing and serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO errors
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a definition error
    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition {
            message: message.into(),
        }
    }

    /// Wrap a rule error with the name of the field it belongs to
    pub fn rule(field: impl Into<String>, source: RuleError) -> Self {
        Self::Rule {
            field: field.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display_includes_field() {
        let err = Error::rule("email", RuleError::UnknownRule { name: "emial".to_string() });
        assert_eq!(err.to_string(), "Rule error in field 'email': unknown rule 'emial'");
    }

    #[test]
    fn test_definition_error_display() {
        let err = Error::definition("duplicate field 'name'");
        assert_eq!(err.to_string(), "Invalid form definition: duplicate field 'name'");
    }
}
