//! Transporte domain - freight transport records and field validation

mod entity;
mod validation;

pub use entity::Transporte;
pub use validation::{
    TransporteValidationError, validate_placa, validate_transporte, validate_valor_frete,
};
