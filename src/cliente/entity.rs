//! Cliente entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::documento::Documento;

/// Client record of the freight CRM
///
/// Holds an already-validated document; raw request fields go through
/// [`validate_cliente`](super::validate_cliente) before construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    /// Unique identifier
    id: Uuid,

    /// Client display name
    nome: String,

    /// Contact email
    email: String,

    /// Contact phone, digits plus optional punctuation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    telefone: Option<String>,

    /// CPF or CNPJ, stored as validated digits
    documento: Documento,

    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    endereco: Option<String>,

    /// Creation timestamp
    created_at: DateTime<Utc>,

    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Cliente {
    /// Create a new client with required fields
    pub fn new(nome: impl Into<String>, email: impl Into<String>, documento: Documento) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nome: nome.into(),
            email: email.into(),
            telefone: None,
            documento,
            endereco: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style method to set the phone number
    pub fn with_telefone(mut self, telefone: impl Into<String>) -> Self {
        self.telefone = Some(telefone.into());
        self
    }

    /// Builder-style method to set the address
    pub fn with_endereco(mut self, endereco: impl Into<String>) -> Self {
        self.endereco = Some(endereco.into());
        self
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn telefone(&self) -> Option<&str> {
        self.telefone.as_deref()
    }

    pub fn documento(&self) -> &Documento {
        &self.documento
    }

    pub fn endereco(&self) -> Option<&str> {
        self.endereco.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators (for service layer updates)

    /// Update the client name
    pub fn set_nome(&mut self, nome: impl Into<String>) {
        self.nome = nome.into();
        self.touch();
    }

    /// Update the contact email
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.touch();
    }

    /// Update the phone number
    pub fn set_telefone(&mut self, telefone: Option<String>) {
        self.telefone = telefone;
        self.touch();
    }

    /// Update the address
    pub fn set_endereco(&mut self, endereco: Option<String>) {
        self.endereco = endereco;
        self.touch();
    }

    /// Replace the document
    pub fn set_documento(&mut self, documento: Documento) {
        self.documento = documento;
        self.touch();
    }

    /// Update the updated_at timestamp
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
