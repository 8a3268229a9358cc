//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio de la garagem:
//! vehículos, registros de manutenção y la colección.

pub mod garage;
pub mod maintenance;
pub mod vehicle;
