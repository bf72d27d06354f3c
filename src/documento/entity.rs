//! Document value types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::{format_cnpj, format_cpf};
use super::validation::{
    CNPJ_LENGTH, CPF_LENGTH, DocumentoValidationError, check_cnpj, check_cpf, clean_digits,
};

/// Document kind detected from the cleaned digit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentoKind {
    Cpf,
    Cnpj,
    Unknown,
}

impl fmt::Display for DocumentoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => write!(f, "CPF"),
            Self::Cnpj => write!(f, "CNPJ"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Verdict of the document classifier
///
/// `kind` comes from the digit count alone; `is_valid` reports the
/// checksum outcome. `Unknown` kind always carries `is_valid = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentoReport {
    pub is_valid: bool,
    pub kind: DocumentoKind,
}

impl DocumentoReport {
    pub fn new(is_valid: bool, kind: DocumentoKind) -> Self {
        Self { is_valid, kind }
    }

    /// Report for input whose digit count matches no document kind
    pub fn unknown() -> Self {
        Self {
            is_valid: false,
            kind: DocumentoKind::Unknown,
        }
    }
}

/// A validated CPF, held as its bare 11-digit form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse and validate a CPF from punctuated or bare input
    pub fn parse(raw: impl Into<String>) -> Result<Self, DocumentoValidationError> {
        let cleaned = clean_digits(&raw.into());
        check_cpf(&cleaned)?;
        Ok(Self(cleaned))
    }

    /// Bare digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical punctuated form (`XXX.XXX.XXX-XX`)
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// A validated CNPJ, held as its bare 14-digit form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse and validate a CNPJ from punctuated or bare input
    pub fn parse(raw: impl Into<String>) -> Result<Self, DocumentoValidationError> {
        let cleaned = clean_digits(&raw.into());
        check_cnpj(&cleaned)?;
        Ok(Self(cleaned))
    }

    /// Bare digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical punctuated form (`XX.XXX.XXX/XXXX-XX`)
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// A validated document of either kind
///
/// The typed counterpart of the classifier: 11 cleaned digits parse as a
/// CPF, 14 as a CNPJ, anything else is an error rather than a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Documento {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Documento {
    /// Parse a CPF or CNPJ, dispatched by cleaned digit count
    pub fn parse(raw: impl Into<String>) -> Result<Self, DocumentoValidationError> {
        let cleaned = clean_digits(&raw.into());
        match cleaned.len() {
            CPF_LENGTH => {
                check_cpf(&cleaned)?;
                Ok(Self::Cpf(Cpf(cleaned)))
            }
            CNPJ_LENGTH => {
                check_cnpj(&cleaned)?;
                Ok(Self::Cnpj(Cnpj(cleaned)))
            }
            length => Err(DocumentoValidationError::UnknownLength { length }),
        }
    }

    pub fn kind(&self) -> DocumentoKind {
        match self {
            Self::Cpf(_) => DocumentoKind::Cpf,
            Self::Cnpj(_) => DocumentoKind::Cnpj,
        }
    }

    /// Bare digits
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Canonical punctuated form for the detected kind
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl TryFrom<String> for Documento {
    type Error = DocumentoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Documento> for String {
    fn from(documento: Documento) -> Self {
        match documento {
            Documento::Cpf(cpf) => cpf.0,
            Documento::Cnpj(cnpj) => cnpj.0,
        }
    }
}

impl fmt::Display for Documento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
