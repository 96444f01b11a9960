//! Loading form definitions and value files from disk

use fieldcheck_core::form::{load_values, DefinitionFormat};
use fieldcheck_core::{Error, Form, FormDefinition, ValidationMode};
use std::fs;
use tempfile::TempDir;

const SIGNUP_YAML: &str = r#"
name: signup
fields:
  - name: name
    rules: required|minLength:3
  - name: email
    rules: required|email
  - name: cpf
    rules: required|cpf
    value: "111.444.777-35"
  - name: age
    rules: integer|between:18:130
"#;

fn write(dir: &TempDir, file: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn yaml_definition_with_json_values_submits() {
    let dir = TempDir::new().unwrap();
    let def_path = write(&dir, "signup.yaml", SIGNUP_YAML);
    let values_path = write(
        &dir,
        "values.json",
        r#"{"name": "Ana", "email": "ana@example.com", "age": 30}"#,
    );

    let definition = FormDefinition::from_path(&def_path).unwrap();
    let mut form = Form::from_definition(&definition, ValidationMode::Lenient).unwrap();
    let unknown = form.apply_values(&load_values(&values_path).unwrap());
    assert!(unknown.is_empty());

    let submission = form.submit().unwrap();
    assert_eq!(submission.values["age"], "30");
    assert_eq!(submission.values["cpf"], "111.444.777-35");
}

#[test]
fn failing_submission_lists_every_failure() {
    let dir = TempDir::new().unwrap();
    let def_path = write(&dir, "signup.yml", SIGNUP_YAML);
    let values_path = write(&dir, "values.toml", "name = \"Al\"\nage = 12\ncpf = \"12345678900\"\n");

    let definition = FormDefinition::from_path(&def_path).unwrap();
    let mut form = Form::from_definition(&definition, ValidationMode::Lenient).unwrap();
    form.apply_values(&load_values(&values_path).unwrap());

    let report = form.submit().unwrap_err();
    let failed: Vec<(&str, Option<&str>)> = report
        .failures()
        .map(|f| (f.name.as_str(), f.message.as_deref()))
        .collect();
    assert_eq!(
        failed,
        vec![
            ("name", Some("minimum of 3 characters")),
            ("email", Some("this field is required")),
            ("cpf", Some("invalid tax ID")),
            ("age", Some("must be between 18 and 130")),
        ]
    );
}

#[test]
fn null_value_marks_field_absent() {
    let dir = TempDir::new().unwrap();
    let values_path = write(&dir, "values.json", r#"{"cpf": null}"#);
    let definition = FormDefinition::parse(SIGNUP_YAML, DefinitionFormat::Yaml).unwrap();
    let mut form = Form::from_definition(&definition, ValidationMode::Lenient).unwrap();

    form.apply_values(&load_values(&values_path).unwrap());
    assert_eq!(form.field("cpf").unwrap().value(), None);

    form.reset();
    assert_eq!(form.field("cpf").unwrap().value(), Some("111.444.777-35"));
}

#[test]
fn strict_mode_rejects_definition_with_unknown_rule() {
    let definition = FormDefinition::parse(
        r#"{"fields": [{"name": "zip", "rules": "required|postalCode"}]}"#,
        DefinitionFormat::Json,
    )
    .unwrap();

    assert!(Form::from_definition(&definition, ValidationMode::Lenient).is_ok());
    let err = Form::from_definition(&definition, ValidationMode::Strict).unwrap_err();
    assert!(matches!(err, Error::Rule { .. }));
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "signup.txt", SIGNUP_YAML);
    assert!(matches!(
        FormDefinition::from_path(&path),
        Err(Error::UnsupportedFormat { .. })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(FormDefinition::from_path(&path), Err(Error::Io { .. })));
}
