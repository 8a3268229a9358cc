//! Garagem Inteligente - backend de la SPA de garagem personal
//!
//! Colección de vehículos en memoria con espejo a disco, interacciones de
//! panel, agendamiento de manutenção y proxies a las dos fuentes externas
//! (detalles de vehículos y clima).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
