//! Brazilian CPF tax-ID validation
//!
//! A CPF is eleven digits where the last two are check digits computed from
//! the preceding ones with descending weights, modulo 11. Punctuation such as
//! `111.444.777-35` is ignored.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a CPF
pub const TAX_ID_LEN: usize = 11;

/// Why an identifier was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdError {
    #[error("expected {TAX_ID_LEN} digits, found {found}")]
    WrongLength { found: usize },

    #[error("all digits are identical")]
    RepeatedDigits,

    #[error("check digit {position} should be {expected}, found {found}")]
    CheckDigitMismatch { position: u8, expected: u8, found: u8 },
}

/// A CPF whose check digits have been verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxId {
    digits: [u8; TAX_ID_LEN],
}

impl TaxId {
    pub fn digits(&self) -> &[u8; TAX_ID_LEN] {
        &self.digits
    }

    /// The eleven digits without punctuation
    pub fn to_digit_string(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for TaxId {
    /// Formats as `XXX.XXX.XXX-XX`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_digit_string();
        write!(f, "{}.{}.{}-{}", &s[0..3], &s[3..6], &s[6..9], &s[9..11])
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_tax_id(s)
    }
}

/// Check digit for a prefix of 9 or 10 digits
///
/// Weights run from `prefix.len() + 1` down to 2. A remainder of 10 maps to 0.
pub fn check_digit(prefix: &[u8]) -> u8 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

/// Validate a CPF, reporting the reason for rejection
pub fn validate_tax_id(value: &str) -> Result<TaxId, TaxIdError> {
    let digits: Vec<u8> = value
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    let digits: [u8; TAX_ID_LEN] = digits
        .as_slice()
        .try_into()
        .map_err(|_| TaxIdError::WrongLength { found: digits.len() })?;

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(TaxIdError::RepeatedDigits);
    }

    for position in [1u8, 2] {
        let end = 8 + position as usize;
        let expected = check_digit(&digits[..end]);
        if expected != digits[end] {
            return Err(TaxIdError::CheckDigitMismatch {
                position,
                expected,
                found: digits[end],
            });
        }
    }

    Ok(TaxId { digits })
}

/// True when `value` is a CPF with valid check digits
pub fn is_cpf(value: &str) -> bool {
    validate_tax_id(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_good_tax_id() {
        assert!(is_cpf("11144477735"));
        assert!(is_cpf("111.444.777-35"));
        assert!(is_cpf("123.456.789-09"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        assert_eq!(validate_tax_id("11111111111"), Err(TaxIdError::RepeatedDigits));
        assert_eq!(validate_tax_id("000.000.000-00"), Err(TaxIdError::RepeatedDigits));
    }

    #[test]
    fn test_checksum_failure_reports_position() {
        assert_eq!(
            validate_tax_id("12345678900"),
            Err(TaxIdError::CheckDigitMismatch { position: 2, expected: 9, found: 0 })
        );
        assert_eq!(
            validate_tax_id("11144477745"),
            Err(TaxIdError::CheckDigitMismatch { position: 1, expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(validate_tax_id("1114447773"), Err(TaxIdError::WrongLength { found: 10 }));
        assert_eq!(validate_tax_id("111444777350"), Err(TaxIdError::WrongLength { found: 12 }));
        assert_eq!(validate_tax_id(""), Err(TaxIdError::WrongLength { found: 0 }));
        assert!(!is_cpf("abc"));
    }

    #[test]
    fn test_check_digit_weights() {
        assert_eq!(check_digit(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), 3);
        assert_eq!(check_digit(&[1, 1, 1, 4, 4, 4, 7, 7, 7, 3]), 5);
    }

    #[test]
    fn test_display_and_parse() {
        let id: TaxId = "11144477735".parse().unwrap();
        assert_eq!(id.to_string(), "111.444.777-35");
        assert_eq!(id.to_digit_string(), "11144477735");
        assert_eq!(id.digits()[10], 5);
    }
}
