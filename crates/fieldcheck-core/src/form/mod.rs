//! Form and field state
//!
//! A [`Form`] owns an ordered set of [`FormField`]s, each bound once to a
//! compiled rule list. The binding layer forwards events as [`Trigger`]s;
//! input and blur validate a single field when enabled in [`FormOptions`],
//! and submit validates every field without stopping at the first failure.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

pub mod definition;
pub mod field;
pub mod report;

pub use definition::{load_values, DefinitionFormat, FieldDefinition, FormDefinition, ScalarValue};
pub use field::{FieldState, FormField};
pub use report::{FieldReport, FormReport};

use crate::error::{Error, Result};
use crate::rules::RuleSet;
use crate::validator::ValidationMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Which events trigger per-field validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    pub validate_on_input: bool,
    pub validate_on_blur: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_on_input: true,
            validate_on_blur: true,
        }
    }
}

/// Event that caused a validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// The value changed
    Input,
    /// The field lost focus
    Blur,
    /// Explicit submit-time check
    Submit,
}

/// Values of a form that passed submit-time validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub values: BTreeMap<String, String>,
}

/// A set of fields validated together
#[derive(Debug, Clone, Default)]
pub struct Form {
    options: FormOptions,
    mode: ValidationMode,
    fields: Vec<FormField>,
}

impl Form {
    pub fn new(options: FormOptions, mode: ValidationMode) -> Self {
        Self {
            options,
            mode,
            fields: Vec::new(),
        }
    }

    /// Build a form from a definition, binding every field in order
    pub fn from_definition(definition: &FormDefinition, mode: ValidationMode) -> Result<Self> {
        definition.check()?;

        let mut form = Self::new(definition.options, mode);
        for field in &definition.fields {
            let initial = field.value.as_ref().map(ToString::to_string);
            form.bind(&field.name, &field.rules)?.set_initial(initial);
        }

        info!(
            form = definition.name.as_deref().unwrap_or("unnamed"),
            fields = form.fields.len(),
            %mode,
            "Form bound"
        );
        Ok(form)
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Bind a field to a serialized rule list
    ///
    /// Rules are parsed once here. Binding a name that already exists replaces
    /// the earlier field in place.
    pub fn bind(&mut self, name: &str, rules: &str) -> Result<&mut FormField> {
        let rule_set = RuleSet::parse(rules, self.mode).map_err(|e| Error::rule(name, e))?;
        let field = FormField::new(name, rule_set);

        let index = match self.position(name) {
            Some(index) => {
                self.fields[index] = field;
                index
            }
            None => {
                self.fields.push(field);
                self.fields.len() - 1
            }
        };
        debug!(field = name, rules, "Field bound");
        Ok(&mut self.fields[index])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Handle an event for one field
    ///
    /// Returns the field's validity, or `None` when the field is unknown or
    /// the trigger is disabled by the form options.
    pub fn handle(&mut self, trigger: Trigger, name: &str) -> Option<bool> {
        let enabled = match trigger {
            Trigger::Input => self.options.validate_on_input,
            Trigger::Blur => self.options.validate_on_blur,
            Trigger::Submit => true,
        };
        if !enabled {
            return None;
        }
        self.field_mut(name).map(FormField::validate)
    }

    /// Set a field's value and fire an input trigger
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> Option<bool> {
        self.field_mut(name)?.set_value(value);
        self.handle(Trigger::Input, name)
    }

    /// Set a field's value without validating; false when the field is unknown
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Apply a value map, returning names that match no field
    ///
    /// `None` entries make the field's value absent.
    pub fn apply_values(&mut self, values: &BTreeMap<String, Option<String>>) -> Vec<String> {
        let mut unknown = Vec::new();
        for (name, value) in values {
            match (self.field_mut(name), value) {
                (Some(field), Some(value)) => field.set_value(value.clone()),
                (Some(field), None) => field.clear_value(),
                (None, _) => unknown.push(name.clone()),
            }
        }
        unknown
    }

    /// Validate every field; true only when all pass
    pub fn validate(&mut self) -> bool {
        // Every field must record an outcome, so no short-circuit here.
        self.fields
            .iter_mut()
            .fold(true, |all, field| field.validate() && all)
    }

    /// Submit-time check: the values when valid, otherwise the failure report
    pub fn submit(&mut self) -> std::result::Result<Submission, FormReport> {
        if self.validate() {
            Ok(Submission {
                values: self.values(),
            })
        } else {
            let report = self.report();
            debug!(failures = report.failure_count(), "Submission rejected");
            Err(report)
        }
    }

    /// Current values; absent values read as empty strings
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.value().unwrap_or_default().to_string()))
            .collect()
    }

    /// Summary of the last outcome of every field
    pub fn report(&self) -> FormReport {
        FormReport::from_fields(&self.fields)
    }

    /// Restore initial values and clear every outcome
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(FormField::reset);
    }
}
