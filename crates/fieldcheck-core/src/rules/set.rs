//! Compiled, ordered rule lists
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use super::{parse_rules, Check, Rule, RuleError, RuleKind};
use crate::validator::{ValidationMode, ValidationResult};
use tracing::{trace, warn};

/// One position in a compiled rule list
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Entry {
    Check(Check),
    /// A known rule whose parameters could not be converted; always fails
    Misconfigured { kind: RuleKind, error: RuleError },
}

impl Entry {
    /// Resolve a rule leniently: unknown names yield `None`
    pub(crate) fn lenient(rule: &Rule) -> Option<Self> {
        let Some(kind) = rule.kind() else {
            trace!(rule = %rule.name, "Skipping unknown rule");
            return None;
        };

        match Check::from_params(kind, &rule.params) {
            Ok(check) => Some(Entry::Check(check)),
            Err(error) => {
                warn!(rule = %rule, error = %error, "Rule parameters rejected, rule will fail closed");
                Some(Entry::Misconfigured { kind, error })
            }
        }
    }

    pub(crate) fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        match self {
            Entry::Check(check) => check.evaluate(value),
            Entry::Misconfigured { kind, .. } => {
                ValidationResult::invalid(format!("invalid {} rule configuration", kind))
            }
        }
    }
}

/// A rule list compiled once, typically when a field is bound
///
/// Evaluation order is declaration order and stops at the first failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    entries: Vec<Entry>,
    source: Vec<Rule>,
}

impl RuleSet {
    /// Compile parsed rules under the given mode
    ///
    /// `Lenient` never fails: unknown rules are dropped and rules with bad
    /// parameters fail closed at evaluation time. `Strict` returns the first
    /// [`RuleError`] instead.
    pub fn compile(rules: &[Rule], mode: ValidationMode) -> Result<Self, RuleError> {
        let entries = match mode {
            ValidationMode::Lenient => rules.iter().filter_map(Entry::lenient).collect(),
            ValidationMode::Strict => rules
                .iter()
                .map(|rule| rule.compile().map(Entry::Check))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            entries,
            source: rules.to_vec(),
        })
    }

    /// Parse and compile a serialized rule list
    pub fn parse(serialized: &str, mode: ValidationMode) -> Result<Self, RuleError> {
        Self::compile(&parse_rules(serialized), mode)
    }

    /// Compile leniently; cannot fail
    pub fn lenient(rules: &[Rule]) -> Self {
        Self {
            entries: rules.iter().filter_map(Entry::lenient).collect(),
            source: rules.to_vec(),
        }
    }

    /// Run the rule list against a value, stopping at the first failure
    pub fn check(&self, value: Option<&str>) -> ValidationResult {
        self.entries
            .iter()
            .map(|entry| entry.evaluate(value))
            .find(|result| !result.valid)
            .unwrap_or_default()
    }

    /// The rules this set was compiled from, including skipped ones
    pub fn rules(&self) -> &[Rule] {
        &self.source
    }

    /// Typed checks that will run, in order
    pub fn checks(&self) -> impl Iterator<Item = &Check> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Check(check) => Some(check),
            Entry::Misconfigured { .. } => None,
        })
    }

    /// Errors recorded for rules that will fail closed
    pub fn misconfigured(&self) -> impl Iterator<Item = &RuleError> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Misconfigured { error, .. } => Some(error),
            Entry::Check(_) => None,
        })
    }

    /// Number of rules that will be evaluated
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
