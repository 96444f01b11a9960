//! Serializable summaries of form validation
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use super::FormField;
use serde::{Deserialize, Serialize};

/// Outcome for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldReport {
    /// Summarize a field's last outcome; unvalidated fields count as passing
    pub fn from_field(field: &FormField) -> Self {
        Self {
            name: field.name().to_string(),
            valid: field.outcome().map_or(true, |o| o.valid),
            message: field.error().map(str::to_string),
        }
    }
}

/// Outcome for a whole form, fields in binding order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    pub valid: bool,
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a FormField>) -> Self {
        let fields: Vec<FieldReport> = fields.into_iter().map(FieldReport::from_field).collect();
        Self {
            valid: fields.iter().all(|f| f.valid),
            fields,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.valid)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}
