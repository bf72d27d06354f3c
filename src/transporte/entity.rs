//! Transporte entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::documento::Cpf;

/// Freight transport record of the CRM
///
/// The driver document is a typed [`Cpf`]; the remaining raw fields go
/// through [`validate_transporte`](super::validate_transporte) before a
/// record is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transporte {
    /// Unique identifier
    id: Uuid,

    /// Pickup city/state
    origem: String,

    /// Delivery city/state
    destino: String,

    /// Driver name
    motorista: String,

    /// Driver CPF, stored as validated digits
    motorista_cpf: Cpf,

    /// Vehicle plate, legacy or Mercosul format
    placa: String,

    /// Freight value in BRL
    valor_frete: f64,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    observacao: Option<String>,

    /// Creation timestamp
    created_at: DateTime<Utc>,

    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Transporte {
    /// Create a new transport record with required fields
    pub fn new(
        origem: impl Into<String>,
        destino: impl Into<String>,
        motorista: impl Into<String>,
        motorista_cpf: Cpf,
        placa: impl Into<String>,
        valor_frete: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            origem: origem.into(),
            destino: destino.into(),
            motorista: motorista.into(),
            motorista_cpf,
            placa: placa.into(),
            valor_frete,
            observacao: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style method to attach a note
    pub fn with_observacao(mut self, observacao: impl Into<String>) -> Self {
        self.observacao = Some(observacao.into());
        self
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn origem(&self) -> &str {
        &self.origem
    }

    pub fn destino(&self) -> &str {
        &self.destino
    }

    pub fn motorista(&self) -> &str {
        &self.motorista
    }

    pub fn motorista_cpf(&self) -> &Cpf {
        &self.motorista_cpf
    }

    pub fn placa(&self) -> &str {
        &self.placa
    }

    pub fn valor_frete(&self) -> f64 {
        self.valor_frete
    }

    pub fn observacao(&self) -> Option<&str> {
        self.observacao.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators (for service layer updates)

    /// Update the freight value
    pub fn set_valor_frete(&mut self, valor_frete: f64) {
        self.valor_frete = valor_frete;
        self.touch();
    }

    /// Update the vehicle plate
    pub fn set_placa(&mut self, placa: impl Into<String>) {
        self.placa = placa.into();
        self.touch();
    }

    /// Replace the driver
    pub fn set_motorista(&mut self, motorista: impl Into<String>, motorista_cpf: Cpf) {
        self.motorista = motorista.into();
        self.motorista_cpf = motorista_cpf;
        self.touch();
    }

    /// Update the note
    pub fn set_observacao(&mut self, observacao: Option<String>) {
        self.observacao = observacao;
        self.touch();
    }

    /// Update the updated_at timestamp
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
