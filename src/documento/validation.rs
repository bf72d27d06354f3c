//! Document validation - Brazilian CPF/CNPJ check-digit verification

use std::fmt;

use tracing::trace;

use super::entity::{DocumentoKind, DocumentoReport};

/// Digit count of a CPF
pub const CPF_LENGTH: usize = 11;

/// Digit count of a CNPJ
pub const CNPJ_LENGTH: usize = 14;

/// Weights for the first CNPJ check digit (over digits 0..12)
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CNPJ check digit (over digits 0..13)
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Document validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentoValidationError {
    /// Cleaned digit count does not match the expected document length
    WrongLength { length: usize, expected: usize },
    /// Every digit is identical; such sequences satisfy the checksum
    /// vacuously and are rejected outright
    RepeatedDigits,
    /// One of the two trailing check digits does not match its weighted sum
    CheckDigitMismatch,
    /// Cleaned digit count matches neither document kind
    UnknownLength { length: usize },
}

impl fmt::Display for DocumentoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { length, expected } => {
                write!(f, "Wrong digit count: {} (expected {})", length, expected)
            }
            Self::RepeatedDigits => write!(f, "All digits are identical"),
            Self::CheckDigitMismatch => write!(f, "Check digits do not match"),
            Self::UnknownLength { length } => {
                write!(
                    f,
                    "Digit count {} matches neither a CPF ({}) nor a CNPJ ({})",
                    length, CPF_LENGTH, CNPJ_LENGTH
                )
            }
        }
    }
}

impl std::error::Error for DocumentoValidationError {}

/// Strip every non-digit character, preserving order
///
/// Total over any input; a string with no digits cleans to the empty
/// string, which every later validation stage rejects.
pub fn clean_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn digit_values(cleaned: &str) -> Vec<u32> {
    cleaned.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_digits_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Expected check digit for a weighted mod-11 sum
fn mod11_check_digit(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

/// Check an already-cleaned CPF digit sequence
pub(crate) fn check_cpf(cleaned: &str) -> Result<(), DocumentoValidationError> {
    if cleaned.len() != CPF_LENGTH {
        return Err(DocumentoValidationError::WrongLength {
            length: cleaned.len(),
            expected: CPF_LENGTH,
        });
    }

    let digits = digit_values(cleaned);
    if all_digits_equal(&digits) {
        return Err(DocumentoValidationError::RepeatedDigits);
    }

    // First check digit: weights 10 down to 2 over the leading 9 digits.
    let first: u32 = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    if digits[9] != mod11_check_digit(first) {
        return Err(DocumentoValidationError::CheckDigitMismatch);
    }

    // Second check digit: weights 11 down to 2 over the leading 10 digits.
    let second: u32 = digits[..10]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (11 - i as u32))
        .sum();
    if digits[10] != mod11_check_digit(second) {
        return Err(DocumentoValidationError::CheckDigitMismatch);
    }

    Ok(())
}

/// Check an already-cleaned CNPJ digit sequence
pub(crate) fn check_cnpj(cleaned: &str) -> Result<(), DocumentoValidationError> {
    if cleaned.len() != CNPJ_LENGTH {
        return Err(DocumentoValidationError::WrongLength {
            length: cleaned.len(),
            expected: CNPJ_LENGTH,
        });
    }

    let digits = digit_values(cleaned);
    if all_digits_equal(&digits) {
        return Err(DocumentoValidationError::RepeatedDigits);
    }

    let first: u32 = digits[..12]
        .iter()
        .zip(CNPJ_WEIGHTS_FIRST)
        .map(|(d, w)| d * w)
        .sum();
    if digits[12] != mod11_check_digit(first) {
        return Err(DocumentoValidationError::CheckDigitMismatch);
    }

    let second: u32 = digits[..13]
        .iter()
        .zip(CNPJ_WEIGHTS_SECOND)
        .map(|(d, w)| d * w)
        .sum();
    if digits[13] != mod11_check_digit(second) {
        return Err(DocumentoValidationError::CheckDigitMismatch);
    }

    Ok(())
}

/// Validate a CPF (individual taxpayer ID)
///
/// Accepts punctuated or bare input; non-digit characters are stripped
/// before the check. Never panics.
pub fn validate_cpf(raw: &str) -> bool {
    check_cpf(&clean_digits(raw)).is_ok()
}

/// Validate a CNPJ (company taxpayer ID)
///
/// Accepts punctuated or bare input; non-digit characters are stripped
/// before the check. Never panics.
pub fn validate_cnpj(raw: &str) -> bool {
    check_cnpj(&clean_digits(raw)).is_ok()
}

/// Classify and validate a document in one pass
///
/// Kind is decided by cleaned digit count alone: 11 digits are checked as
/// a CPF and 14 as a CNPJ, regardless of content; anything else reports
/// [`DocumentoKind::Unknown`] and is never valid. An 11 or 14 digit
/// sequence with a bad checksum keeps its detected kind with
/// `is_valid = false`.
pub fn validate_documento(raw: &str) -> DocumentoReport {
    let cleaned = clean_digits(raw);
    let report = match cleaned.len() {
        CPF_LENGTH => DocumentoReport::new(check_cpf(&cleaned).is_ok(), DocumentoKind::Cpf),
        CNPJ_LENGTH => DocumentoReport::new(check_cnpj(&cleaned).is_ok(), DocumentoKind::Cnpj),
        _ => DocumentoReport::unknown(),
    };

    if !report.is_valid {
        trace!(kind = ?report.kind, digits = cleaned.len(), "document rejected");
    }

    report
}
