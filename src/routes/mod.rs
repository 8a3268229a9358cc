//! Rutas de la API
//!
//! Un router por dominio, ensamblados en `create_app` (usado por el binario
//! y por los tests de integración con el mismo pipeline de middleware).

pub mod garage_routes;
pub mod maintenance_routes;
pub mod vehicle_routes;
pub mod weather_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/garage", garage_routes::create_garage_router())
        .nest("/api/manutencao", maintenance_routes::create_maintenance_router())
        .nest("/api/clima", weather_routes::create_weather_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "🚗 Garagem Inteligente API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
