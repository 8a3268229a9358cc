use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_detail_dto::ApiDetailResponse;
use crate::dto::maintenance_dto::ScheduleMaintenanceRequest;
use crate::dto::vehicle_dto::{
    ApiResponse, CreateVehicleRequest, GarageListResponse, VehicleDetailResponse,
    VehicleListItemResponse,
};
use crate::services::vehicle_detail_service::VehicleDetailService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_plate;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:placa", get(get_vehicle))
        .route("/:placa/detalhes-extra", get(get_vehicle_api_details))
        .route("/:placa/manutencao", post(schedule_maintenance))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleListItemResponse>>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<GarageListResponse> {
    let controller = VehicleController::new(&state);
    Json(controller.list().await)
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(placa): Path<String>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.select(&placa).await?;
    Ok(Json(response))
}

// Consulta al recurso externo de detalles; "no encontrado" es una response
// 200 con mensaje, no un error
async fn get_vehicle_api_details(
    State(state): State<AppState>,
    Path(placa): Path<String>,
) -> Json<ApiDetailResponse> {
    let placa = normalize_plate(&placa);
    let service = VehicleDetailService::new(state.config.vehicle_api_url.clone());
    let response = match service.buscar_detalhes(&placa).await {
        Some(detalhes) => ApiDetailResponse::found(&placa, &detalhes),
        None => ApiDetailResponse::not_found(&placa),
    };
    Json(response)
}

async fn schedule_maintenance(
    State(state): State<AppState>,
    Path(placa): Path<String>,
    Json(request): Json<ScheduleMaintenanceRequest>,
) -> Result<Json<ApiResponse<VehicleDetailResponse>>, AppError> {
    let controller = MaintenanceController::new(&state);
    let response = controller.schedule(&placa, request).await?;
    Ok(Json(response))
}
