//! Cliente validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::documento::{Documento, DocumentoValidationError, clean_digits};

/// Maximum length for client names
pub const MAX_NOME_LENGTH: usize = 120;

/// Accepted digit counts for Brazilian phone numbers (area code + number)
const TELEFONE_DIGIT_COUNTS: [usize; 2] = [10, 11];

/// Loose address check: one `@`, non-empty local part, dotted domain
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Validation errors for client records
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClienteValidationError {
    #[error("Client name is required")]
    NomeRequired,

    #[error("Client name too long: {length} characters (max {max})")]
    NomeTooLong { length: usize, max: usize },

    #[error("Client email is required")]
    EmailRequired,

    #[error("Invalid email address '{0}'")]
    EmailInvalid(String),

    #[error("Invalid phone number: expected 10 or 11 digits, got {0}")]
    TelefoneInvalid(usize),

    #[error("Invalid client document: {0}")]
    DocumentoInvalid(#[from] DocumentoValidationError),
}

/// Validate a client name
pub fn validate_nome(nome: &str) -> Result<(), ClienteValidationError> {
    let trimmed = nome.trim();
    if trimmed.is_empty() {
        return Err(ClienteValidationError::NomeRequired);
    }

    if trimmed.chars().count() > MAX_NOME_LENGTH {
        return Err(ClienteValidationError::NomeTooLong {
            length: trimmed.chars().count(),
            max: MAX_NOME_LENGTH,
        });
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), ClienteValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ClienteValidationError::EmailRequired);
    }

    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ClienteValidationError::EmailInvalid(trimmed.to_string()));
    }

    Ok(())
}

/// Validate a phone number
///
/// Punctuation is stripped before counting; landlines carry 10 digits and
/// mobile numbers 11.
pub fn validate_telefone(telefone: &str) -> Result<(), ClienteValidationError> {
    let digits = clean_digits(telefone);
    if !TELEFONE_DIGIT_COUNTS.contains(&digits.len()) {
        return Err(ClienteValidationError::TelefoneInvalid(digits.len()));
    }

    Ok(())
}

/// Validate the raw field values of a client record
///
/// This is the contract request-validation code calls before a record is
/// created or updated; the document may be a CPF or a CNPJ.
pub fn validate_cliente(
    nome: &str,
    email: &str,
    telefone: Option<&str>,
    documento: &str,
) -> Result<(), ClienteValidationError> {
    validate_nome(nome)?;
    validate_email(email)?;

    if let Some(telefone) = telefone {
        validate_telefone(telefone)?;
    }

    Documento::parse(documento)?;

    Ok(())
}
