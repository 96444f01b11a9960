//! The closed catalogue of rule kinds
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every rule the validator knows how to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    Email,
    MinLength,
    MaxLength,
    Phone,
    TaxId,
    Number,
    Integer,
    Positive,
    Negative,
    Between,
    Url,
}

impl RuleKind {
    /// All rule kinds, in catalogue order
    pub const ALL: [RuleKind; 12] = [
        RuleKind::Required,
        RuleKind::Email,
        RuleKind::MinLength,
        RuleKind::MaxLength,
        RuleKind::Phone,
        RuleKind::TaxId,
        RuleKind::Number,
        RuleKind::Integer,
        RuleKind::Positive,
        RuleKind::Negative,
        RuleKind::Between,
        RuleKind::Url,
    ];

    /// Resolve a serialized rule name
    ///
    /// Names are case-sensitive. `cpf` is accepted as an alias of `taxId`.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "required" => Self::Required,
            "email" => Self::Email,
            "minLength" => Self::MinLength,
            "maxLength" => Self::MaxLength,
            "phone" => Self::Phone,
            "taxId" | "cpf" => Self::TaxId,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "between" => Self::Between,
            "url" => Self::Url,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical serialized name
    pub fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Phone => "phone",
            Self::TaxId => "taxId",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Between => "between",
            Self::Url => "url",
        }
    }

    /// Names of the positional parameters, in order
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::MinLength => &["min"],
            Self::MaxLength => &["max"],
            Self::Between => &["min", "max"],
            _ => &[],
        }
    }

    /// One-line description for rule listings
    pub fn description(self) -> &'static str {
        match self {
            Self::Required => "value is present and non-empty",
            Self::Email => "simple local@domain.tld address",
            Self::MinLength => "at least `min` characters",
            Self::MaxLength => "at most `max` characters",
            Self::Phone => "1-16 digits, optional leading '+', first digit non-zero",
            Self::TaxId => "Brazilian CPF with valid check digits (alias: cpf)",
            Self::Number => "finite decimal number",
            Self::Integer => "number without a fractional part",
            Self::Positive => "number greater than zero",
            Self::Negative => "number less than zero",
            Self::Between => "number within [min, max]",
            Self::Url => "absolute URL",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
