use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{GarageListResponse, InteractionRequest, InteractionResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_garage_router() -> Router<AppState> {
    Router::new()
        .route("/interagir", post(interact))
        .route("/voltar", post(back_to_list))
}

// Acción sobre el vehículo actualmente seleccionado
async fn interact(
    State(state): State<AppState>,
    Json(request): Json<InteractionRequest>,
) -> Result<Json<InteractionResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.interact(request).await?;
    Ok(Json(response))
}

async fn back_to_list(State(state): State<AppState>) -> Json<GarageListResponse> {
    let controller = VehicleController::new(&state);
    Json(controller.back().await)
}
