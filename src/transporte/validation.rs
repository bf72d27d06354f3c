//! Transporte validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::documento::validate_cpf;

/// Vehicle plate formats: legacy `ABC1234` (hyphen optional) and
/// Mercosul `ABC1D23`
static PLACA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-z]{3}-?\d{4}|[a-z]{3}\d[a-z]\d{2})$").unwrap());

/// Validation errors for freight transport records
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransporteValidationError {
    #[error("Origin is required")]
    OrigemRequired,

    #[error("Destination is required")]
    DestinoRequired,

    #[error("Driver name is required")]
    MotoristaRequired,

    #[error("Invalid driver CPF")]
    MotoristaCpfInvalid,

    #[error("Invalid vehicle plate '{0}': expected ABC1234 or ABC1D23")]
    PlacaInvalid(String),

    #[error("Freight value must be greater than zero, got {0}")]
    ValorFreteInvalid(f64),
}

/// Validate a vehicle plate in either the legacy or the Mercosul format
pub fn validate_placa(placa: &str) -> Result<(), TransporteValidationError> {
    let trimmed = placa.trim();
    if !PLACA_PATTERN.is_match(trimmed) {
        return Err(TransporteValidationError::PlacaInvalid(trimmed.to_string()));
    }

    Ok(())
}

/// Validate a freight value
pub fn validate_valor_frete(valor: f64) -> Result<(), TransporteValidationError> {
    if !valor.is_finite() || valor <= 0.0 {
        return Err(TransporteValidationError::ValorFreteInvalid(valor));
    }

    Ok(())
}

/// Validate the raw field values of a freight transport record
pub fn validate_transporte(
    origem: &str,
    destino: &str,
    motorista: &str,
    motorista_cpf: &str,
    placa: &str,
    valor_frete: f64,
) -> Result<(), TransporteValidationError> {
    if origem.trim().is_empty() {
        return Err(TransporteValidationError::OrigemRequired);
    }

    if destino.trim().is_empty() {
        return Err(TransporteValidationError::DestinoRequired);
    }

    if motorista.trim().is_empty() {
        return Err(TransporteValidationError::MotoristaRequired);
    }

    if !validate_cpf(motorista_cpf) {
        return Err(TransporteValidationError::MotoristaCpfInvalid);
    }

    validate_placa(placa)?;
    validate_valor_frete(valor_frete)?;

    Ok(())
}
