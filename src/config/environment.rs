//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// URL por defecto del recurso estático de detalles de vehículos
/// (el mismo `dados_veiculos_api.json` que la SPA servía localmente)
const DEFAULT_VEHICLE_API_URL: &str = "data/dados_veiculos_api.json";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Ruta del archivo JSON donde se persiste la garagem completa
    pub storage_path: String,
    /// Credencial de OpenWeatherMap; sin ella el lookup de clima falla
    /// antes de tocar la red
    pub openweather_api_key: Option<String>,
    /// URL http(s) o ruta local del recurso estático de detalles
    pub vehicle_api_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins.split(',').map(|s| s.trim().to_string()).collect()
                })
                .unwrap_or_default(),
            storage_path: env::var("GARAGE_STORAGE_PATH")
                .unwrap_or_else(|_| "data/garagem.json".to_string()),
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            vehicle_api_url: env::var("VEHICLE_API_URL")
                .unwrap_or_else(|_| DEFAULT_VEHICLE_API_URL.to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
