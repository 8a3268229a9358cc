//! DTOs de vehículos
//!
//! Requests del formulario de alta y responses de lista/detalle/interacción.
//! Las responses son el equivalente de la capa de rendering de la SPA:
//! funciones puras de dominio → JSON listo para mostrar, idempotentes para
//! la misma entrada.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{
    ActionEvent, ActionOutcome, Severity, Vehicle, VehicleAction, VehicleKind,
    CARGA_PADRAO_KG, DESCARGA_PADRAO_KG,
};

/// Texto mostrado cuando la garagem no tiene vehículos
pub const GARAGEM_VAZIA: &str = "Nenhum veículo na garagem.";
/// Texto mostrado cuando no hay histórico pasado
pub const SEM_HISTORICO: &str = "Nenhum histórico registrado.";
/// Texto mostrado cuando no hay agendamientos futuros
pub const SEM_AGENDAMENTOS: &str = "Nenhum agendamento futuro.";

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub tipo: String,
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub placa: String,
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub modelo: String,
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub cor: String,
    // Campos condicionales por tipo (el formulario solo muestra los del
    // tipo seleccionado)
    pub portas: Option<u8>,
    pub eixos: Option<u8>,
    pub capacidade_kg: Option<u32>,
}

// Request de interacción del panel de detalle
#[derive(Debug, Deserialize)]
pub struct InteractionRequest {
    pub acao: VehicleAction,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    /// Toast que la SPA muestra tal cual, cuando la operación lo amerita
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notificacao: Option<NotificationResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            notificacao: None,
        }
    }

    /// Éxito con toast de nivel success (altas y agendamientos)
    pub fn success_notified(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message.clone()),
            data: Some(data),
            notificacao: Some(NotificationResponse::new(message, Severity::Success)),
        }
    }
}

/// Notificación transitoria para la pila de la SPA.
/// `duracao_ms` 0 significa persistente.
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub mensagem: String,
    pub nivel: Severity,
    pub duracao_ms: u64,
}

impl NotificationResponse {
    pub fn new(mensagem: impl Into<String>, nivel: Severity) -> Self {
        Self {
            mensagem: mensagem.into(),
            nivel,
            duracao_ms: 4000,
        }
    }

    pub fn with_duration(mensagem: impl Into<String>, nivel: Severity, duracao_ms: u64) -> Self {
        Self {
            mensagem: mensagem.into(),
            nivel,
            duracao_ms,
        }
    }
}

// Fila de la lista de la garagem
#[derive(Debug, Serialize)]
pub struct VehicleListItemResponse {
    pub placa: String,
    pub modelo: String,
    pub cor: String,
    pub tipo: String,
    pub status: String,
}

impl From<&Vehicle> for VehicleListItemResponse {
    fn from(v: &Vehicle) -> Self {
        Self {
            placa: v.placa.clone(),
            modelo: v.modelo.clone(),
            cor: v.cor.clone(),
            tipo: v.kind.label().to_string(),
            status: v.status_curto(),
        }
    }
}

// Lista completa, con placeholder cuando está vacía
#[derive(Debug, Serialize)]
pub struct GarageListResponse {
    pub veiculos: Vec<VehicleListItemResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem_vazia: Option<String>,
}

impl GarageListResponse {
    pub fn from_vehicles(veiculos: &[Vehicle]) -> Self {
        let itens: Vec<VehicleListItemResponse> =
            veiculos.iter().map(VehicleListItemResponse::from).collect();
        let mensagem_vazia = itens.is_empty().then(|| GARAGEM_VAZIA.to_string());
        Self {
            veiculos: itens,
            mensagem_vazia,
        }
    }
}

/// Estado de un botón del panel de interacción
#[derive(Debug, Serialize)]
pub struct AcaoDisponivel {
    pub acao: VehicleAction,
    pub rotulo: String,
    pub visivel: bool,
    pub habilitada: bool,
}

/// Derivar el mapa de acciones del estado del vehículo, replicando la
/// lógica de habilitación/visibilidad de botones de la SPA. Los botones de
/// subtipo usan las capability queries del variant, nunca inspección de tipo.
pub fn acoes_do_veiculo(v: &Vehicle) -> Vec<AcaoDisponivel> {
    let turbo_ativado = matches!(v.kind, VehicleKind::CarroEsportivo { turbo_ativado: true, .. });
    vec![
        AcaoDisponivel {
            acao: VehicleAction::Ligar,
            rotulo: "Ligar".to_string(),
            visivel: true,
            habilitada: !v.ligado,
        },
        AcaoDisponivel {
            acao: VehicleAction::Desligar,
            rotulo: "Desligar".to_string(),
            visivel: true,
            habilitada: v.ligado && v.velocidade == 0,
        },
        AcaoDisponivel {
            acao: VehicleAction::Acelerar,
            rotulo: "Acelerar".to_string(),
            visivel: true,
            habilitada: v.ligado,
        },
        AcaoDisponivel {
            acao: VehicleAction::Frear,
            rotulo: "Frear".to_string(),
            visivel: true,
            habilitada: v.ligado && v.velocidade > 0,
        },
        AcaoDisponivel {
            acao: VehicleAction::Buzinar,
            rotulo: "Buzinar".to_string(),
            visivel: true,
            habilitada: true,
        },
        AcaoDisponivel {
            acao: VehicleAction::Turbo,
            rotulo: if turbo_ativado { "Desativar Turbo" } else { "Ativar Turbo" }.to_string(),
            visivel: v.kind.supports_turbo(),
            habilitada: v.kind.supports_turbo(),
        },
        AcaoDisponivel {
            acao: VehicleAction::Carregar,
            rotulo: format!("Carregar ({} kg)", CARGA_PADRAO_KG),
            visivel: v.kind.supports_cargo(),
            habilitada: v.kind.supports_cargo(),
        },
        AcaoDisponivel {
            acao: VehicleAction::Descarregar,
            rotulo: format!("Descarregar ({} kg)", DESCARGA_PADRAO_KG),
            visivel: v.kind.supports_cargo(),
            habilitada: v.kind.supports_cargo(),
        },
    ]
}

// Panel de detalle completo
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    pub titulo: String,
    pub placa: String,
    pub modelo: String,
    pub cor: String,
    pub tipo: String,
    pub imagem: String,
    pub status: String,
    pub acoes: Vec<AcaoDisponivel>,
    pub historico: Vec<String>,
    pub agendamentos: Vec<String>,
}

impl VehicleDetailResponse {
    /// Armar el panel de detalle: histórico (fecha ≤ hoy) y agendamientos
    /// (fecha > hoy) ordenados por fecha descendente, con placeholder cuando
    /// la partición queda vacía, como hace el renderer original.
    pub fn build(v: &Vehicle, hoje: NaiveDate) -> Self {
        let mut registros = v.historico_manutencao.clone();
        registros.sort_by(|a, b| b.data.cmp(&a.data));

        let mut historico = Vec::new();
        let mut agendamentos = Vec::new();
        for m in &registros {
            if m.data <= hoje {
                historico.push(m.formatar());
            } else {
                agendamentos.push(m.formatar());
            }
        }
        if historico.is_empty() {
            historico.push(SEM_HISTORICO.to_string());
        }
        if agendamentos.is_empty() {
            agendamentos.push(SEM_AGENDAMENTOS.to_string());
        }

        Self {
            titulo: format!("Detalhes - {} ({})", v.placa, v.modelo),
            placa: v.placa.clone(),
            modelo: v.modelo.clone(),
            cor: v.cor.clone(),
            tipo: v.kind.label().to_string(),
            imagem: v.kind.image_file().to_string(),
            status: v.status_completo(),
            acoes: acoes_do_veiculo(v),
            historico,
            agendamentos,
        }
    }
}

// Resultado de una interacción: outcome estructurado + estado refrescado
#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ActionEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub som: Option<&'static str>,
    pub mensagem: String,
    pub status: String,
    pub acoes: Vec<AcaoDisponivel>,
}

impl InteractionResponse {
    pub fn build(outcome: ActionOutcome, v: &Vehicle) -> Self {
        Self {
            severity: outcome.severity,
            som: outcome.event.and_then(|e| e.sound_cue()),
            event: outcome.event,
            mensagem: outcome.message,
            status: v.status_completo(),
            acoes: acoes_do_veiculo(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::maintenance::Maintenance;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn esportivo() -> Vehicle {
        Vehicle::new(
            "TUR8000".to_string(),
            "F40".to_string(),
            "vermelho".to_string(),
            VehicleKind::CarroEsportivo { portas: 2, turbo_ativado: false },
        )
    }

    #[test]
    fn test_acoes_desligado() {
        let v = esportivo();
        let acoes = acoes_do_veiculo(&v);
        let ligar = acoes.iter().find(|a| a.acao == VehicleAction::Ligar).unwrap();
        let frear = acoes.iter().find(|a| a.acao == VehicleAction::Frear).unwrap();
        let carregar = acoes.iter().find(|a| a.acao == VehicleAction::Carregar).unwrap();
        assert!(ligar.habilitada);
        assert!(!frear.habilitada);
        assert!(!carregar.visivel);
    }

    #[test]
    fn test_rotulo_turbo_alterna() {
        let mut v = esportivo();
        let antes = acoes_do_veiculo(&v);
        let turbo = antes.iter().find(|a| a.acao == VehicleAction::Turbo).unwrap();
        assert_eq!(turbo.rotulo, "Ativar Turbo");
        assert!(turbo.visivel);

        v.alternar_turbo();
        let depois = acoes_do_veiculo(&v);
        let turbo = depois.iter().find(|a| a.acao == VehicleAction::Turbo).unwrap();
        assert_eq!(turbo.rotulo, "Desativar Turbo");
    }

    #[test]
    fn test_particao_historico_agendamentos() {
        let mut v = esportivo();
        v.adicionar_manutencao(Maintenance::new(
            hoje(),
            "Revisão".to_string(),
            350.0,
            String::new(),
        ));
        v.adicionar_manutencao(Maintenance::new(
            hoje().succ_opt().unwrap(),
            "Alinhamento".to_string(),
            120.0,
            String::new(),
        ));

        let detalhe = VehicleDetailResponse::build(&v, hoje());
        assert_eq!(detalhe.historico.len(), 1);
        assert!(detalhe.historico[0].starts_with("Revisão"));
        assert_eq!(detalhe.agendamentos.len(), 1);
        assert!(detalhe.agendamentos[0].starts_with("Alinhamento"));
    }

    #[test]
    fn test_placeholders_quando_vazio() {
        let v = esportivo();
        let detalhe = VehicleDetailResponse::build(&v, hoje());
        assert_eq!(detalhe.historico, vec![SEM_HISTORICO.to_string()]);
        assert_eq!(detalhe.agendamentos, vec![SEM_AGENDAMENTOS.to_string()]);

        let lista = GarageListResponse::from_vehicles(&[]);
        assert_eq!(lista.mensagem_vazia.as_deref(), Some(GARAGEM_VAZIA));
    }
}
