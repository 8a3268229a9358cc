//! DTOs del sistema
//!
//! Requests y responses de la API. Las responses son la capa de rendering:
//! dominio → JSON listo para mostrar en la SPA.

pub mod api_detail_dto;
pub mod maintenance_dto;
pub mod vehicle_dto;
pub mod weather_dto;
