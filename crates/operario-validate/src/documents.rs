//! Brazilian taxpayer document validation (CPF and CNPJ).
//!
//! Both document types end in two check digits computed from the preceding
//! digits with weighted modulo-11 sums. Validation is a pure function of the
//! input: no I/O, no logging, no state between calls.

use crate::error::DocumentError;
use std::fmt;

/// Digits in a CPF.
const CPF_LEN: usize = 11;
/// Digits in a CNPJ.
const CNPJ_LEN: usize = 14;

/// Weights for the first CNPJ check digit (over digits 1..=12).
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights for the second CNPJ check digit (over digits 1..=13).
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A validated CPF (individual taxpayer ID, 11 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf {
    digits: String,
}

impl Cpf {
    /// Validate `raw` as a CPF, stripping any punctuation first.
    ///
    /// # Errors
    /// - [`DocumentError::NonNumericInput`] if the input has no digits at all
    /// - [`DocumentError::InvalidLength`] unless exactly 11 digits remain
    /// - [`DocumentError::RepeatedDigitSequence`] if all digits are identical
    /// - [`DocumentError::CheckDigitMismatch`] if either check digit is wrong
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let digits = normalized_digits(raw, CPF_LEN)?;

        let first = cpf_check_digit(&digits[..9]);
        if first != digits[9] {
            return Err(DocumentError::CheckDigitMismatch);
        }
        let second = cpf_check_digit(&digits[..10]);
        if second != digits[10] {
            return Err(DocumentError::CheckDigitMismatch);
        }

        Ok(Self {
            digits: digits.iter().map(|d| char::from(b'0' + *d as u8)).collect(),
        })
    }

    /// The 11 digits without punctuation.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.digits
    }

    /// Canonical display form: `XXX.XXX.XXX-XX`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.digits[..3],
            &self.digits[3..6],
            &self.digits[6..9],
            &self.digits[9..]
        )
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// A validated CNPJ (company taxpayer ID, 14 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj {
    digits: String,
}

impl Cnpj {
    /// Validate `raw` as a CNPJ, stripping any punctuation first.
    ///
    /// # Errors
    /// Same taxonomy as [`Cpf::parse`], for 14 digits.
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let digits = normalized_digits(raw, CNPJ_LEN)?;

        let first = cnpj_check_digit(&digits[..12], &CNPJ_WEIGHTS_FIRST);
        if first != digits[12] {
            return Err(DocumentError::CheckDigitMismatch);
        }
        let second = cnpj_check_digit(&digits[..13], &CNPJ_WEIGHTS_SECOND);
        if second != digits[13] {
            return Err(DocumentError::CheckDigitMismatch);
        }

        Ok(Self {
            digits: digits.iter().map(|d| char::from(b'0' + *d as u8)).collect(),
        })
    }

    /// The 14 digits without punctuation.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.digits
    }

    /// Canonical display form: `XX.XXX.XXX/XXXX-XX`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.digits[..2],
            &self.digits[2..5],
            &self.digits[5..8],
            &self.digits[8..12],
            &self.digits[12..]
        )
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Strip non-digits and enforce length and the repeated-digit rejection.
fn normalized_digits(raw: &str, expected: usize) -> Result<Vec<u32>, DocumentError> {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.is_empty() {
        return Err(DocumentError::NonNumericInput);
    }
    if digits.len() != expected {
        return Err(DocumentError::InvalidLength {
            expected,
            actual: digits.len(),
        });
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return Err(DocumentError::RepeatedDigitSequence);
    }
    Ok(digits)
}

/// CPF check digit over `digits` with weights descending from
/// `digits.len() + 1` to 2: `r = (sum * 10) % 11`, 10 maps to 0.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = (digits.len() + 1) as u32;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder == 10 {
        0
    } else {
        remainder
    }
}

/// CNPJ check digit over `digits` with the fixed `weights` sequence:
/// `r = sum % 11`, digit is 0 for r < 2, else 11 - r.
fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
