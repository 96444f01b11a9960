//! Typed checks and their evaluation
//!
//! A [`Check`] is a rule whose parameters have already been converted. Every
//! check is a pure function of the value it is given.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use super::{RuleError, RuleKind};
use crate::predicates;
use crate::tax_id;
use crate::validator::ValidationResult;

/// A rule with converted parameters, ready to evaluate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
    Phone,
    TaxId,
    Number,
    Integer,
    Positive,
    Negative,
    Between { min: f64, max: f64 },
    Url,
}

impl Check {
    /// Convert positional string parameters for `kind`
    ///
    /// Extra parameters beyond what the rule declares are ignored.
    pub fn from_params(kind: RuleKind, params: &[String]) -> Result<Self, RuleError> {
        let check = match kind {
            RuleKind::Required => Self::Required,
            RuleKind::Email => Self::Email,
            RuleKind::MinLength => Self::MinLength(length_param(kind, params, 0)?),
            RuleKind::MaxLength => Self::MaxLength(length_param(kind, params, 0)?),
            RuleKind::Phone => Self::Phone,
            RuleKind::TaxId => Self::TaxId,
            RuleKind::Number => Self::Number,
            RuleKind::Integer => Self::Integer,
            RuleKind::Positive => Self::Positive,
            RuleKind::Negative => Self::Negative,
            RuleKind::Between => {
                let min = number_param(kind, params, 0)?;
                let max = number_param(kind, params, 1)?;
                if min > max {
                    return Err(RuleError::InvalidParam {
                        rule: kind.name(),
                        param: "max",
                        value: params[1].clone(),
                        expected: "greater than or equal to min",
                    });
                }
                Self::Between { min, max }
            }
            RuleKind::Url => Self::Url,
        };
        Ok(check)
    }

    /// The catalogue entry this check was built from
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Required => RuleKind::Required,
            Self::Email => RuleKind::Email,
            Self::MinLength(_) => RuleKind::MinLength,
            Self::MaxLength(_) => RuleKind::MaxLength,
            Self::Phone => RuleKind::Phone,
            Self::TaxId => RuleKind::TaxId,
            Self::Number => RuleKind::Number,
            Self::Integer => RuleKind::Integer,
            Self::Positive => RuleKind::Positive,
            Self::Negative => RuleKind::Negative,
            Self::Between { .. } => RuleKind::Between,
            Self::Url => RuleKind::Url,
        }
    }

    /// Evaluate the check against a field value
    ///
    /// `None` is an absent value. Only `required` distinguishes absent from
    /// empty; every other check sees an absent value as `""`.
    pub fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        let text = value.unwrap_or_default();
        match *self {
            Self::Required => verdict(predicates::is_required(value), || {
                "this field is required".to_string()
            }),
            Self::Email => verdict(predicates::is_email(text), || "invalid email".to_string()),
            Self::MinLength(min) => verdict(predicates::min_length(text, min), || {
                format!("minimum of {} characters", min)
            }),
            Self::MaxLength(max) => verdict(predicates::max_length(text, max), || {
                format!("maximum of {} characters", max)
            }),
            Self::Phone => verdict(predicates::is_phone(text), || {
                "invalid phone number".to_string()
            }),
            Self::TaxId => verdict(tax_id::is_cpf(text), || "invalid tax ID".to_string()),
            Self::Number => verdict(predicates::is_number(text), || {
                "must be a number".to_string()
            }),
            Self::Integer => verdict(predicates::is_integer(text), || {
                "must be an integer".to_string()
            }),
            Self::Positive => verdict(predicates::is_positive(text), || {
                "must be a positive number".to_string()
            }),
            Self::Negative => verdict(predicates::is_negative(text), || {
                "must be a negative number".to_string()
            }),
            Self::Between { min, max } => verdict(predicates::is_between(text, min, max), || {
                format!("must be between {} and {}", min, max)
            }),
            Self::Url => verdict(predicates::is_url(text), || "invalid URL".to_string()),
        }
    }
}

fn verdict(valid: bool, message: impl FnOnce() -> String) -> ValidationResult {
    if valid {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(message())
    }
}

fn raw_param<'a>(kind: RuleKind, params: &'a [String], index: usize) -> Result<&'a str, RuleError> {
    let name = kind.params()[index];
    params
        .get(index)
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .ok_or(RuleError::MissingParam {
            rule: kind.name(),
            param: name,
        })
}

fn length_param(kind: RuleKind, params: &[String], index: usize) -> Result<usize, RuleError> {
    let raw = raw_param(kind, params, index)?;
    raw.parse::<usize>().map_err(|_| RuleError::InvalidParam {
        rule: kind.name(),
        param: kind.params()[index],
        value: raw.to_string(),
        expected: "a non-negative integer",
    })
}

fn number_param(kind: RuleKind, params: &[String], index: usize) -> Result<f64, RuleError> {
    let raw = raw_param(kind, params, index)?;
    predicates::parse_number(raw).ok_or_else(|| RuleError::InvalidParam {
        rule: kind.name(),
        param: kind.params()[index],
        value: raw.to_string(),
        expected: "a finite number",
    })
}
