//! Field validation orchestration
//!
//! [`validate`] is the entry point the binding layer calls on every input,
//! blur, or submit: it walks a field's rules in declaration order and returns
//! the first failure, or a passing result when every rule passes.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::rules::set::Entry;
use crate::rules::{Rule, RuleError, RuleSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Outcome of validating one value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Failure message; empty when `valid` is true
    pub message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result with the message to show the user
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        (!self.valid).then_some(self.message.as_str())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            f.write_str("valid")
        } else {
            write!(f, "invalid: {}", self.message)
        }
    }
}

/// How rule lists with unknown names or bad parameters are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Skip unknown rules; rules with bad parameters fail closed
    #[default]
    Lenient,
    /// Reject the rule list with a `RuleError`
    Strict,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Validate `value` against `rules`, stopping at the first failing rule
///
/// Unknown rule names are skipped. A known rule whose parameters cannot be
/// converted (for example `minLength:abc`) reports the value as invalid.
/// An empty rule list always passes.
pub fn validate(value: &str, rules: &[Rule]) -> ValidationResult {
    for rule in rules {
        let Some(entry) = Entry::lenient(rule) else {
            continue;
        };

        let result = entry.evaluate(Some(value));
        if !result.valid {
            debug!(rule = %rule, message = %result.message, "Validation failed");
            return result;
        }
    }

    ValidationResult::valid()
}

/// Validator bound to a [`ValidationMode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient)
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Parse and compile a serialized rule list under this validator's mode
    pub fn compile(&self, serialized: &str) -> Result<RuleSet, RuleError> {
        RuleSet::parse(serialized, self.mode)
    }

    /// Validate a value; in strict mode the rule list is checked first
    pub fn validate(&self, value: &str, rules: &[Rule]) -> Result<ValidationResult, RuleError> {
        match self.mode {
            ValidationMode::Lenient => Ok(validate(value, rules)),
            ValidationMode::Strict => Ok(RuleSet::compile(rules, self.mode)?.check(Some(value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::parse_rules;

    #[test]
    fn test_empty_rule_list_passes() {
        assert_eq!(validate("anything", &[]), ValidationResult::valid());
        assert_eq!(validate("", &[]), ValidationResult::valid());
    }

    #[test]
    fn test_short_circuit_surfaces_first_failure() {
        let rules = parse_rules("required|minLength:5");
        let result = validate("", &rules);
        assert!(!result.valid);
        assert_eq!(result.message, "this field is required");
    }

    #[test]
    fn test_later_rule_reports_when_earlier_pass() {
        let rules = parse_rules("required|minLength:5|email");
        let result = validate("abc", &rules);
        assert_eq!(result.message, "minimum of 5 characters");

        let result = validate("abcdef", &rules);
        assert_eq!(result.message, "invalid email");

        assert!(validate("ab@cd.ef", &rules).valid);
    }

    #[test]
    fn test_unknown_rules_are_skipped() {
        let rules = parse_rules("shout|required|zipCode:5");
        assert!(validate("x", &rules).valid);
        assert_eq!(validate("", &rules).message, "this field is required");
    }

    #[test]
    fn test_bad_parameter_fails_closed() {
        let rules = parse_rules("minLength:abc");
        let result = validate("long enough value", &rules);
        assert!(!result.valid);
        assert_eq!(result.message, "invalid minLength rule configuration");
    }

    #[test]
    fn test_strict_validator_rejects_unknown_rule() {
        let rules = parse_rules("required|shout");
        let err = Validator::strict().validate("x", &rules).unwrap_err();
        assert_eq!(err, RuleError::UnknownRule { name: "shout".to_string() });

        let result = Validator::lenient().validate("x", &rules).unwrap();
        assert!(result.valid);
    }

    #[test]
    fn test_strict_validator_rejects_bad_parameter() {
        let err = Validator::strict().compile("maxLength:ten").unwrap_err();
        assert!(matches!(err, RuleError::InvalidParam { rule: "maxLength", param: "max", .. }));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let rules = parse_rules("required|taxId");
        let first = validate("111.444.777-35", &rules);
        let second = validate("111.444.777-35", &rules);
        assert_eq!(first, second);
        assert!(first.valid);
    }

    #[test]
    fn test_result_error_accessor() {
        assert_eq!(ValidationResult::valid().error(), None);
        assert_eq!(ValidationResult::invalid("nope").error(), Some("nope"));
        assert_eq!(ValidationResult::invalid("nope").to_string(), "invalid: nope");
    }
}
