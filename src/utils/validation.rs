//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y normalización de placas.

use chrono::NaiveDate;
use serde::Serialize;
use validator::ValidationError;

/// Normalizar una placa: trim + mayúsculas
pub fn normalize_plate(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que el costo sea un número finito y no negativo
pub fn validate_cost(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut error = ValidationError::new("cost");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    validate_non_negative(value)
}
