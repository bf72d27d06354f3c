//! Fretes CRM domain core
//!
//! Validation and entity layer for a Brazilian freight-transport CRM:
//! - Brazilian tax ID (CPF/CNPJ) checksum validation, classification and
//!   canonical formatting
//! - Client records with field validation
//! - Freight transport records with driver and vehicle validation
//!
//! Everything here is synchronous and free of I/O; the surrounding
//! backend calls the validators from its request handling and persists
//! the entities through its own storage layer.

pub mod cliente;
pub mod documento;
pub mod transporte;

pub use cliente::{Cliente, ClienteValidationError, validate_cliente};
pub use documento::{
    Cnpj, Cpf, Documento, DocumentoKind, DocumentoReport, DocumentoValidationError, clean_digits,
    format_cnpj, format_cpf, validate_cnpj, validate_cpf, validate_documento,
};
pub use transporte::{Transporte, TransporteValidationError, validate_transporte};
