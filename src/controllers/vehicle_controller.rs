//! Controller de vehículos
//!
//! Alta, lista, selección para detalle e interacciones del panel.
//! Valida la entrada, muta la colección en memoria, persiste la garagem
//! completa y arma la response de rendering que corresponda.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::vehicle_dto::{
    ApiResponse, CreateVehicleRequest, GarageListResponse, InteractionRequest,
    InteractionResponse, VehicleDetailResponse, VehicleListItemResponse,
};
use crate::models::garage::Garage;
use crate::models::vehicle::{Vehicle, VehicleKind};
use crate::repositories::garage_repository::GarageRepository;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppError, AppResult};
use crate::utils::validation::normalize_plate;

const EIXOS_PADRAO: u8 = 2;
const PORTAS_PADRAO: u8 = 4;

pub struct VehicleController {
    garage: Arc<RwLock<Garage>>,
    repository: Arc<GarageRepository>,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            garage: state.garage.clone(),
            repository: state.repository.clone(),
        }
    }

    /// Alta de vehículo. Errores de validación o placa duplicada no mutan
    /// la colección.
    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleListItemResponse>> {
        request.validate()?;

        // Sin regla de formato: cualquier placa no vacía normalizada vale
        let placa = normalize_plate(&request.placa);
        let modelo = request.modelo.trim().to_string();
        let cor = request.cor.trim().to_string();

        let kind = match request.tipo.as_str() {
            "Carro" => VehicleKind::Carro {
                portas: request.portas.unwrap_or(PORTAS_PADRAO),
            },
            "CarroEsportivo" => VehicleKind::CarroEsportivo {
                portas: request.portas.unwrap_or(PORTAS_PADRAO),
                turbo_ativado: false,
            },
            "Caminhao" => {
                let capacidade_kg = request.capacidade_kg.ok_or_else(|| {
                    bad_request_error("Informe a capacidade de carga do caminhão.")
                })?;
                VehicleKind::Caminhao {
                    eixos: request.eixos.unwrap_or(EIXOS_PADRAO),
                    capacidade_kg,
                    carga_kg: 0,
                }
            }
            _ => return Err(bad_request_error("Tipo de veículo selecionado inválido.")),
        };

        let tipo = kind.label();
        let vehicle = Vehicle::new(placa.clone(), modelo, cor, kind);
        let item = VehicleListItemResponse::from(&vehicle);

        let mut garage = self.garage.write().await;
        garage.add(vehicle)?;
        // Persistencia best-effort: un fallo de disco no deshace el alta
        self.repository.save_best_effort(&garage).await;

        tracing::info!("🚗 Veículo {} adicionado à garagem", placa);
        Ok(ApiResponse::success_notified(
            item,
            format!("{} {} adicionado com sucesso!", tipo, placa),
        ))
    }

    /// Lista de la garagem
    pub async fn list(&self) -> GarageListResponse {
        let garage = self.garage.read().await;
        GarageListResponse::from_vehicles(&garage.veiculos)
    }

    /// Seleccionar un vehículo para el panel de detalle. Placa inexistente
    /// limpia la selección y devuelve not found.
    pub async fn select(&self, placa: &str) -> AppResult<VehicleDetailResponse> {
        let placa = normalize_plate(placa);
        let mut garage = self.garage.write().await;
        match garage.find(&placa) {
            Some(vehicle) => {
                let detalhe = VehicleDetailResponse::build(vehicle, Local::now().date_naive());
                garage.select(&placa);
                Ok(detalhe)
            }
            None => {
                garage.clear_selection();
                Err(not_found_error("Veículo", &placa))
            }
        }
    }

    /// Volver a la vista de lista, limpiando la selección
    pub async fn back(&self) -> GarageListResponse {
        let mut garage = self.garage.write().await;
        garage.clear_selection();
        GarageListResponse::from_vehicles(&garage.veiculos)
    }

    /// Ejecutar una interacción sobre el vehículo seleccionado. La legalidad
    /// de la transición es del modelo; acá solo se resuelve la selección y se
    /// persiste incondicionalmente después de cada acción, cambie o no el
    /// estado, para mantener el storage autoritativo.
    pub async fn interact(&self, request: InteractionRequest) -> AppResult<InteractionResponse> {
        let mut garage = self.garage.write().await;

        let placa = garage.placa_selecionada.clone().ok_or_else(|| {
            bad_request_error("Nenhum veículo selecionado para interação.")
        })?;

        let response = match garage.find_mut(&placa) {
            Some(vehicle) => {
                let outcome = vehicle.executar(request.acao);
                tracing::debug!(
                    "🔧 Interação {:?} em {}: {}",
                    request.acao,
                    placa,
                    outcome.message
                );
                InteractionResponse::build(outcome, vehicle)
            }
            None => {
                // El vehículo seleccionado desapareció: volver a la lista
                garage.clear_selection();
                return Err(AppError::NotFound(
                    "Erro interno: Veículo selecionado não encontrado.".to_string(),
                ));
            }
        };

        self.repository.save_best_effort(&garage).await;
        Ok(response)
    }
}
