//! DTOs de manutenção
//!
//! Request del formulario de agendamiento y response de los recordatorios
//! del barrido de vencimientos.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::vehicle_dto::NotificationResponse;
use crate::models::vehicle::Severity;

/// Duración de los recordatorios de manutenção (notificación larga)
pub const DURACAO_LEMBRETE_MS: u64 = 10_000;

// Request para agendar una manutenção
#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleMaintenanceRequest {
    /// Fecha en formato YYYY-MM-DD (input date de la SPA)
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub data: String,
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub tipo_servico: String,
    /// Validado en el controller con `validate_cost`
    pub custo: f64,
    pub descricao: Option<String>,
}

/// Recordatorio emitido por el barrido de agendamientos:
/// hoy ⇒ warning, mañana ⇒ info, ambos de larga duración
#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub placa: String,
    #[serde(flatten)]
    pub notificacao: NotificationResponse,
}

impl ReminderResponse {
    pub fn hoje(placa: &str, registro: &str) -> Self {
        Self {
            placa: placa.to_string(),
            notificacao: NotificationResponse::with_duration(
                format!("Lembrete HOJE: {} p/ {}", registro, placa),
                Severity::Warning,
                DURACAO_LEMBRETE_MS,
            ),
        }
    }

    pub fn amanha(placa: &str, registro: &str) -> Self {
        Self {
            placa: placa.to_string(),
            notificacao: NotificationResponse::with_duration(
                format!("Lembrete AMANHÃ: {} p/ {}", registro, placa),
                Severity::Info,
                DURACAO_LEMBRETE_MS,
            ),
        }
    }
}
