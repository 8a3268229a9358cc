//! Servicios del sistema
//!
//! Integraciones con las dos fuentes externas: el recurso estático de
//! detalles de vehículos y la API de clima.

pub mod vehicle_detail_service;
pub mod weather_service;
