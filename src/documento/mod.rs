//! Document domain - Brazilian tax ID validation, classification and formatting

mod entity;
mod format;
mod validation;

pub use entity::{Cnpj, Cpf, Documento, DocumentoKind, DocumentoReport};
pub use format::{format_cnpj, format_cpf};
pub use validation::{
    CNPJ_LENGTH, CPF_LENGTH, DocumentoValidationError, clean_digits, validate_cnpj, validate_cpf,
    validate_documento,
};
