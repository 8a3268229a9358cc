//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y
//! validación de datos.

pub mod errors;
pub mod validation;
