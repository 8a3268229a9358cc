//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: la garagem en memoria (cargada una sola vez
//! al arranque) y el repositorio que la espeja a disco.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::garage::Garage;
use crate::repositories::garage_repository::GarageRepository;

#[derive(Clone)]
pub struct AppState {
    pub garage: Arc<RwLock<Garage>>,
    pub config: EnvironmentConfig,
    pub repository: Arc<GarageRepository>,
}

impl AppState {
    pub fn new(garage: Garage, config: EnvironmentConfig) -> Self {
        let repository = Arc::new(GarageRepository::new(&config.storage_path));
        Self {
            garage: Arc::new(RwLock::new(garage)),
            config,
            repository,
        }
    }
}
