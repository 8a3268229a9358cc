use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::ReminderResponse;
use crate::state::AppState;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new().route("/lembretes", get(list_reminders))
}

// Barrido de agendamientos: los que vencen hoy o mañana
async fn list_reminders(State(state): State<AppState>) -> Json<Vec<ReminderResponse>> {
    let controller = MaintenanceController::new(&state);
    Json(controller.reminders().await)
}
