//! Controllers del sistema
//!
//! Orquestan validación, mutación del estado compartido y persistencia.
//! La lógica de transición de estados vive en los modelos.

pub mod maintenance_controller;
pub mod vehicle_controller;
