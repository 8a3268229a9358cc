//! Controller de manutenção
//!
//! Agendamiento de servicios sobre un vehículo y barrido de vencimientos
//! (registros con fecha hoy o mañana) para los recordatorios de la UI.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::maintenance_dto::{ReminderResponse, ScheduleMaintenanceRequest};
use crate::dto::vehicle_dto::{ApiResponse, VehicleDetailResponse};
use crate::models::garage::Garage;
use crate::models::maintenance::Maintenance;
use crate::repositories::garage_repository::GarageRepository;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::validation::{normalize_plate, validate_cost, validate_date};

pub struct MaintenanceController {
    garage: Arc<RwLock<Garage>>,
    repository: Arc<GarageRepository>,
}

impl MaintenanceController {
    pub fn new(state: &AppState) -> Self {
        Self {
            garage: state.garage.clone(),
            repository: state.repository.clone(),
        }
    }

    /// Agendar (o registrar) una manutenção para la placa dada. Devuelve el
    /// panel de detalle ya actualizado para que la UI no tenga que re-fetch.
    pub async fn schedule(
        &self,
        placa: &str,
        request: ScheduleMaintenanceRequest,
    ) -> AppResult<ApiResponse<VehicleDetailResponse>> {
        request.validate()?;

        let data = validate_date(request.data.trim())
            .map_err(|_| bad_request_error("Data de agendamento inválida."))?;
        validate_cost(request.custo)
            .map_err(|_| bad_request_error("O Custo informado é inválido ou negativo."))?;

        let placa = normalize_plate(placa);
        let mut garage = self.garage.write().await;
        let vehicle = garage
            .find_mut(&placa)
            .ok_or_else(|| not_found_error("Veículo", &placa))?;

        let registro = Maintenance::new(
            data,
            request.tipo_servico,
            request.custo,
            request.descricao.unwrap_or_default(),
        );
        if !vehicle.adicionar_manutencao(registro) {
            return Err(bad_request_error(
                "Dados fornecidos para a manutenção são inválidos.",
            ));
        }

        let detalhe = VehicleDetailResponse::build(vehicle, Local::now().date_naive());
        self.repository.save_best_effort(&garage).await;

        tracing::info!("🔧 Manutenção agendada para {}", placa);
        Ok(ApiResponse::success_notified(
            detalhe,
            format!("Manutenção para {} agendada com sucesso!", placa),
        ))
    }

    /// Recordatorios vigentes: agendamientos que vencen hoy o mañana
    pub async fn reminders(&self) -> Vec<ReminderResponse> {
        let garage = self.garage.read().await;
        reminders_for(&garage, Local::now().date_naive())
    }

    /// Volcar los recordatorios al log del servidor (arranque del proceso,
    /// espejo del barrido que la UI hacía al cargar la página)
    pub async fn log_startup_reminders(&self) {
        for lembrete in self.reminders().await {
            match lembrete.notificacao.nivel {
                crate::models::vehicle::Severity::Warning => {
                    tracing::warn!("⏰ {}", lembrete.notificacao.mensagem)
                }
                _ => tracing::info!("⏰ {}", lembrete.notificacao.mensagem),
            }
        }
    }
}

/// Barrido puro sobre la colección: compara solo la fecha de calendario
/// (sin componente horario) contra hoy y mañana.
pub fn reminders_for(garage: &Garage, hoje: NaiveDate) -> Vec<ReminderResponse> {
    let amanha = hoje.succ_opt();
    let mut lembretes = Vec::new();

    for veiculo in &garage.veiculos {
        for registro in &veiculo.historico_manutencao {
            if registro.data == hoje {
                lembretes.push(ReminderResponse::hoje(&veiculo.placa, &registro.formatar()));
            } else if Some(registro.data) == amanha {
                lembretes.push(ReminderResponse::amanha(&veiculo.placa, &registro.formatar()));
            }
        }
    }

    lembretes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::EnvironmentConfig;
    use crate::dto::maintenance_dto::DURACAO_LEMBRETE_MS;
    use crate::models::vehicle::{Severity, Vehicle, VehicleKind};

    fn data(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn garagem_com_agendamentos() -> Garage {
        let mut vehicle = Vehicle::new(
            "ABC1234".to_string(),
            "Fusca".to_string(),
            "azul".to_string(),
            VehicleKind::Carro { portas: 2 },
        );
        for (dia, tipo) in [
            ("2024-06-10", "Revisão"),
            ("2024-06-11", "Freios"),
            ("2024-06-12", "Pneus"),
            ("2024-06-01", "Troca de óleo"),
        ] {
            vehicle.adicionar_manutencao(Maintenance::new(
                data(dia),
                tipo.to_string(),
                100.0,
                String::new(),
            ));
        }

        let mut garage = Garage::default();
        garage.add(vehicle).unwrap();
        garage
    }

    #[test]
    fn test_barrido_hoje_e_amanha() {
        let garage = garagem_com_agendamentos();
        let lembretes = reminders_for(&garage, data("2024-06-10"));
        assert_eq!(lembretes.len(), 2);

        assert_eq!(lembretes[0].notificacao.nivel, Severity::Warning);
        assert!(lembretes[0].notificacao.mensagem.starts_with("Lembrete HOJE: Revisão"));

        assert_eq!(lembretes[1].notificacao.nivel, Severity::Info);
        assert!(lembretes[1].notificacao.mensagem.starts_with("Lembrete AMANHÃ: Freios"));

        // Ambos recordatorios usan la duración larga de 10s
        assert_eq!(lembretes[0].notificacao.duracao_ms, DURACAO_LEMBRETE_MS);
        assert_eq!(lembretes[1].notificacao.duracao_ms, DURACAO_LEMBRETE_MS);
    }

    #[test]
    fn test_barrido_ignora_passado_e_futuro_distante() {
        let garage = garagem_com_agendamentos();
        let lembretes = reminders_for(&garage, data("2024-06-20"));
        assert!(lembretes.is_empty());
    }

    #[tokio::test]
    async fn test_falha_de_disco_nao_bloqueia_agendamento() {
        let config = EnvironmentConfig {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            cors_origins: Vec::new(),
            // Ruta imposible de escribir: el save siempre falla
            storage_path: "/dev/null/inacessivel/garagem.json".to_string(),
            openweather_api_key: None,
            vehicle_api_url: String::new(),
        };
        let state = AppState::new(garagem_com_agendamentos(), config);
        let controller = MaintenanceController::new(&state);

        let response = controller
            .schedule(
                "ABC1234",
                ScheduleMaintenanceRequest {
                    data: "2030-01-01".to_string(),
                    tipo_servico: "Suspensão".to_string(),
                    custo: 420.0,
                    descricao: None,
                },
            )
            .await
            .unwrap();

        // El save falla pero el registro queda en memoria y responde éxito
        assert!(response.message.unwrap().contains("agendada com sucesso"));
        let garage = state.garage.read().await;
        let veiculo = garage.find("ABC1234").unwrap();
        assert!(veiculo
            .historico_manutencao
            .iter()
            .any(|m| m.tipo_servico == "Suspensão"));
    }

    #[test]
    fn test_lembrete_nomeia_a_placa() {
        let garage = garagem_com_agendamentos();
        let lembretes = reminders_for(&garage, data("2024-06-12"));
        assert_eq!(lembretes.len(), 1);
        assert!(lembretes[0].notificacao.mensagem.contains("p/ ABC1234"));
        assert_eq!(lembretes[0].placa, "ABC1234");
    }
}
