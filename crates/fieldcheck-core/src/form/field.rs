//! Field state and single-field validation
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::rules::RuleSet;
use crate::validator::ValidationResult;
use serde::{Deserialize, Serialize};

/// Current value of a field and the outcome of its last validation
///
/// No history is kept: each validation replaces `outcome`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// `None` means the value is absent, which only `required` treats differently from `""`
    pub value: Option<String>,
    pub outcome: Option<ValidationResult>,
}

/// A named field bound to a compiled rule list
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    name: String,
    rules: RuleSet,
    initial: Option<String>,
    state: FieldState,
}

impl FormField {
    pub fn new(name: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            name: name.into(),
            rules,
            initial: None,
            state: FieldState::default(),
        }
    }

    /// Set the value the field returns to on reset, and the current value
    pub fn with_initial(mut self, value: Option<String>) -> Self {
        self.set_initial(value);
        self
    }

    pub fn set_initial(&mut self, value: Option<String>) {
        self.initial = value.clone();
        self.state.value = value;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn value(&self) -> Option<&str> {
        self.state.value.as_deref()
    }

    /// Replace the value; the previous outcome is left untouched until the next validation
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.value = Some(value.into());
    }

    pub fn clear_value(&mut self) {
        self.state.value = None;
    }

    /// Run the rules against the current value and record the outcome
    pub fn validate(&mut self) -> bool {
        let result = self.rules.check(self.state.value.as_deref());
        let valid = result.valid;
        self.state.outcome = Some(result);
        valid
    }

    /// Last outcome, if the field has been validated since binding or reset
    pub fn outcome(&self) -> Option<&ValidationResult> {
        self.state.outcome.as_ref()
    }

    /// Message of the last failing validation
    pub fn error(&self) -> Option<&str> {
        self.state.outcome.as_ref().and_then(ValidationResult::error)
    }

    pub fn clear_error(&mut self) {
        self.state.outcome = None;
    }

    /// Restore the initial value and forget the last outcome
    pub fn reset(&mut self) {
        self.state.value = self.initial.clone();
        self.state.outcome = None;
    }
}
