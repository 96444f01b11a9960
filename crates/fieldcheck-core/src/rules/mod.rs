//! Rule model, parsing, and compilation
//!
//! Rules arrive in a compact serialized form, `name:param1:param2|name2|...`,
//! usually taken verbatim from a field's declarative attribute. Parsing keeps
//! names and parameters as untyped strings; compilation resolves the name
//! against the closed [`RuleKind`] catalogue and converts parameters into a
//! typed [`Check`].
//!
//! The module is organized into:
//! - `kind`: the rule catalogue and name resolution
//! - `check`: typed checks, parameter conversion, and evaluation
//! - `set`: compiled, ordered rule lists
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

pub mod check;
pub mod kind;
pub mod set;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use check::Check;
pub use kind::RuleKind;
pub use set::RuleSet;

/// Separator between rules in the serialized form
pub const RULE_SEPARATOR: char = '|';

/// Separator between a rule name and its parameters
pub const PARAM_SEPARATOR: char = ':';

/// A named, parameterized validation check as written by the form author
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl Rule {
    /// Create a rule from a name and positional parameters
    pub fn new<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve the rule name against the catalogue
    pub fn kind(&self) -> Option<RuleKind> {
        RuleKind::from_name(&self.name)
    }

    /// Convert this rule into a typed check
    pub fn compile(&self) -> Result<Check, RuleError> {
        let kind = self.kind().ok_or_else(|| RuleError::UnknownRule {
            name: self.name.clone(),
        })?;
        Check::from_params(kind, &self.params)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.params {
            write!(f, "{}{}", PARAM_SEPARATOR, param)?;
        }
        Ok(())
    }
}

/// Errors produced when a rule cannot be turned into a check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule name is not part of the catalogue
    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    /// A positional parameter the rule needs was not given
    #[error("rule '{rule}' is missing parameter '{param}'")]
    MissingParam {
        rule: &'static str,
        param: &'static str,
    },

    /// A parameter could not be converted to the type the rule needs
    #[error("rule '{rule}' parameter '{param}' must be {expected}, got '{value}'")]
    InvalidParam {
        rule: &'static str,
        param: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Parse a serialized rule list into ordered rules
///
/// An empty or whitespace-only string yields no rules. Empty segments
/// (`required||email`) are dropped; names and parameters are trimmed.
/// Names are not resolved here, so unknown rules survive parsing.
pub fn parse_rules(serialized: &str) -> Vec<Rule> {
    serialized
        .split(RULE_SEPARATOR)
        .filter_map(parse_rule)
        .collect()
}

fn parse_rule(segment: &str) -> Option<Rule> {
    let mut parts = segment.split(PARAM_SEPARATOR).map(str::trim);
    let name = parts.next().filter(|name| !name.is_empty())?;

    Some(Rule {
        name: name.to_string(),
        params: parts.map(str::to_string).collect(),
    })
}

/// Serialize rules back into the compact form
pub fn format_rules(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(Rule::to_string)
        .collect::<Vec<_>>()
        .join(&RULE_SEPARATOR.to_string())
}
