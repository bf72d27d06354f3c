//! Canonical display formatting for documents
//!
//! Formatting is best effort: input that does not clean to the expected
//! digit count is returned unchanged, so callers can render whatever the
//! user typed without a separate length check.

use super::validation::{CNPJ_LENGTH, CPF_LENGTH, clean_digits};

/// Format a CPF as `XXX.XXX.XXX-XX`
pub fn format_cpf(raw: &str) -> String {
    let cleaned = clean_digits(raw);
    if cleaned.len() != CPF_LENGTH {
        return raw.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &cleaned[..3],
        &cleaned[3..6],
        &cleaned[6..9],
        &cleaned[9..]
    )
}

/// Format a CNPJ as `XX.XXX.XXX/XXXX-XX`
pub fn format_cnpj(raw: &str) -> String {
    let cleaned = clean_digits(raw);
    if cleaned.len() != CNPJ_LENGTH {
        return raw.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &cleaned[..2],
        &cleaned[2..5],
        &cleaned[5..8],
        &cleaned[8..12],
        &cleaned[12..]
    )
}
