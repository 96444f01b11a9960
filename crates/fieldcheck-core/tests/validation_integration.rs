//! End-to-end validation behaviour through the public API

use fieldcheck_core::{
    is_cpf, parse_rules, validate, validate_tax_id, RuleSet, TaxIdError, ValidationMode,
    ValidationResult, Validator,
};

#[test]
fn required_rejects_empty_and_accepts_non_empty() {
    let rules = parse_rules("required");
    assert!(!validate("", &rules).valid);
    assert!(validate("a", &rules).valid);
    assert!(!RuleSet::lenient(&rules).check(None).valid);
}

#[test]
fn length_bounds_are_inclusive() {
    assert!(!validate("ab", &parse_rules("minLength:3")).valid);
    assert!(validate("abc", &parse_rules("minLength:3")).valid);
    assert!(validate("abc", &parse_rules("maxLength:3")).valid);
    assert!(!validate("abcd", &parse_rules("maxLength:3")).valid);
}

#[test]
fn tax_id_known_vectors() {
    assert!(is_cpf("11144477735"));
    assert!(!is_cpf("11111111111"));
    assert!(!is_cpf("12345678900"));
    assert!(!is_cpf("1114447773"));
    assert_eq!(validate_tax_id("111.444"), Err(TaxIdError::WrongLength { found: 6 }));
}

#[test]
fn tax_id_rule_and_alias_agree() {
    for value in ["11144477735", "11111111111", "123.456.789-09", "abc"] {
        assert_eq!(
            validate(value, &parse_rules("taxId")),
            validate(value, &parse_rules("cpf"))
        );
    }
    assert_eq!(
        validate("12345678900", &parse_rules("taxId")),
        ValidationResult::invalid("invalid tax ID")
    );
}

#[test]
fn first_failing_rule_wins() {
    let rules = parse_rules("required|minLength:5");
    assert_eq!(validate("", &rules), ValidationResult::invalid("this field is required"));
}

#[test]
fn parse_rules_yields_names_and_params() {
    let rules = parse_rules("required|minLength:5|email");
    let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["required", "minLength", "email"]);
    assert_eq!(rules[1].params, ["5"]);
}

#[test]
fn strict_and_lenient_agree_on_well_formed_rules() {
    let rules = parse_rules("required|email|maxLength:40");
    for value in ["", "someone@example.com", "not an email"] {
        let lenient = Validator::new(ValidationMode::Lenient).validate(value, &rules).unwrap();
        let strict = Validator::new(ValidationMode::Strict).validate(value, &rules).unwrap();
        assert_eq!(lenient, strict);
    }
}

#[test]
fn numeric_rules_compose() {
    let rules = parse_rules("required|integer|between:18:130");
    assert!(validate("42", &rules).valid);
    assert_eq!(validate("17", &rules).message, "must be between 18 and 130");
    assert_eq!(validate("42.5", &rules).message, "must be an integer");
}
