//! Fieldcheck Core - Rule-based form field validation
//!
//! This crate provides the validation engine used by form front ends: a compact
//! rule serialization format, a closed catalogue of validators, a short-circuit
//! field validator, the CPF tax-ID checksum, and a small form/field state layer.
//!
//! # Main Components
//!
//! - **Rules**: `Rule` parsing (`required|minLength:5|email`) and compilation into typed checks
//! - **Validator**: ordered, short-circuit evaluation producing a `ValidationResult`
//! - **Tax ID**: two-pass CPF check digit verification
//! - **Predicates**: standalone checks reusable outside of rule lists
//! - **Form**: field state, triggers, and submit-time validation of every field
//!
//! # Example
//!
//! ```
//! use fieldcheck_core::{parse_rules, validate};
//!
//! let rules = parse_rules("required|minLength:5");
//! let result = validate("", &rules);
//! assert!(!result.valid);
//! assert_eq!(result.message, "this field is required");
//! ```
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod form;
pub mod predicates;
pub mod rules;
pub mod tax_id;
pub mod validator;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use form::{
    FieldDefinition, FieldReport, FieldState, Form, FormDefinition, FormField, FormOptions,
    FormReport, Submission, Trigger,
};
pub use rules::{format_rules, parse_rules, Check, Rule, RuleError, RuleKind, RuleSet};
pub use tax_id::{is_cpf, validate_tax_id, TaxId, TaxIdError};
pub use validator::{validate, ValidationMode, ValidationResult, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
