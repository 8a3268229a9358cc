use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::dto::vehicle_dto::ApiResponse;
use crate::dto::weather_dto::WeatherReportResponse;
use crate::services::weather_service::WeatherService;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_weather_router() -> Router<AppState> {
    Router::new().route("/", get(get_current_weather))
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    #[serde(default)]
    cidade: String,
}

async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<ApiResponse<WeatherReportResponse>>, AppError> {
    let cidade = query.cidade.trim().to_string();
    if cidade.is_empty() {
        return Err(bad_request_error(
            "Por favor, digite o nome da cidade de destino.",
        ));
    }

    let service = WeatherService::new(state.config.openweather_api_key.clone());
    let previsao = service.buscar_clima_atual(&cidade).await?;
    Ok(Json(ApiResponse::success(WeatherReportResponse::from_snapshot(
        &previsao, &cidade,
    ))))
}
