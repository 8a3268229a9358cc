//! Modelo de vehículos
//!
//! Este módulo define el vehículo con sus subtipos (carro, carro esportivo,
//! caminhão), la máquina de estados de interacción y el resultado
//! estructurado de cada acción. La legalidad de cada transición vive acá;
//! los controllers nunca interpretan strings para decidir severidad o sonido.

use serde::{Deserialize, Serialize};

use crate::models::maintenance::Maintenance;

/// Incremento de velocidad por acelerada, en km/h
pub const PASSO_ACELERACAO: u32 = 10;
/// Reducción de velocidad por frenada, en km/h
pub const PASSO_FRENAGEM: u32 = 10;
/// Carga por operación de carregar, en kg
pub const CARGA_PADRAO_KG: u32 = 1000;
/// Descarga por operación de descarregar, en kg
pub const DESCARGA_PADRAO_KG: u32 = 500;

/// Severidad de un resultado, usada por la SPA para elegir el estilo
/// de la notificación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Evento estructurado emitido por una interacción exitosa.
/// Reemplaza el matching por substrings del cliente original: el sonido y la
/// severidad se derivan del evento, nunca del texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionEvent {
    EngineStarted,
    EngineStopped,
    Accelerated,
    Braked,
    HornSounded,
    TurboActivated,
    TurboDeactivated,
    CargoLoaded,
    CargoUnloaded,
}

impl ActionEvent {
    /// Efecto de sonido que la SPA reproduce para este evento.
    /// Fallos de reproducción son problema del cliente (log y nada más).
    pub fn sound_cue(&self) -> Option<&'static str> {
        match self {
            ActionEvent::EngineStarted => Some("ligar"),
            ActionEvent::EngineStopped => Some("desligar"),
            ActionEvent::HornSounded => Some("buzina"),
            ActionEvent::TurboActivated => Some("turbo"),
            ActionEvent::CargoLoaded | ActionEvent::CargoUnloaded => Some("carga"),
            ActionEvent::Accelerated | ActionEvent::Braked | ActionEvent::TurboDeactivated => None,
        }
    }
}

/// Resultado de una interacción con el vehículo
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub severity: Severity,
    pub event: Option<ActionEvent>,
    pub message: String,
}

impl ActionOutcome {
    fn ok(event: ActionEvent, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            event: Some(event),
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            event: None,
            message: message.into(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.severity == Severity::Warning || self.severity == Severity::Error
    }
}

/// Acciones de interacción disponibles en el panel de detalle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleAction {
    Ligar,
    Desligar,
    Acelerar,
    Frear,
    Buzinar,
    Turbo,
    Carregar,
    Descarregar,
}

/// Subtipo del vehículo con sus campos específicos.
/// El tag `tipo` coincide con los valores del formulario de la SPA.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "tipo")]
pub enum VehicleKind {
    Carro { portas: u8 },
    CarroEsportivo { portas: u8, turbo_ativado: bool },
    Caminhao { eixos: u8, capacidade_kg: u32, carga_kg: u32 },
}

impl VehicleKind {
    /// Nombre legible del subtipo
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Carro { .. } => "Carro",
            VehicleKind::CarroEsportivo { .. } => "Carro Esportivo",
            VehicleKind::Caminhao { .. } => "Caminhão",
        }
    }

    /// Imagen asociada al subtipo en el panel de detalle
    pub fn image_file(&self) -> &'static str {
        match self {
            VehicleKind::Carro { .. } => "carro.png",
            VehicleKind::CarroEsportivo { .. } => "carroesportivo.png",
            VehicleKind::Caminhao { .. } => "caminhao.png",
        }
    }

    /// Techo de velocidad del subtipo, en km/h
    pub fn max_speed(&self) -> u32 {
        match self {
            VehicleKind::Carro { .. } => 180,
            VehicleKind::CarroEsportivo { .. } => 250,
            VehicleKind::Caminhao { .. } => 120,
        }
    }

    pub fn supports_turbo(&self) -> bool {
        matches!(self, VehicleKind::CarroEsportivo { .. })
    }

    pub fn supports_cargo(&self) -> bool {
        matches!(self, VehicleKind::Caminhao { .. })
    }
}

/// Vehículo de la garagem. La placa es única dentro de la colección e
/// inmutable después de la creación.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub placa: String,
    pub modelo: String,
    pub cor: String,
    #[serde(flatten)]
    pub kind: VehicleKind,
    pub ligado: bool,
    pub velocidade: u32,
    pub historico_manutencao: Vec<Maintenance>,
}

impl Vehicle {
    /// Crear un vehículo nuevo, apagado y parado. La placa ya debe llegar
    /// normalizada (trim + mayúsculas) desde la capa de validación.
    pub fn new(placa: String, modelo: String, cor: String, kind: VehicleKind) -> Self {
        Self {
            placa,
            modelo,
            cor,
            kind,
            ligado: false,
            velocidade: 0,
            historico_manutencao: Vec::new(),
        }
    }

    /// Línea de estado corta para la lista de la garagem
    pub fn status_curto(&self) -> String {
        if self.ligado {
            format!("Ligado, {} km/h", self.velocidade)
        } else {
            "Desligado".to_string()
        }
    }

    /// Línea de estado completa para el panel de detalle
    pub fn status_completo(&self) -> String {
        let mut status = format!(
            "{} {} ({}): {}",
            self.kind.label(),
            self.placa,
            self.cor,
            self.status_curto()
        );
        match &self.kind {
            VehicleKind::CarroEsportivo { turbo_ativado, .. } => {
                status.push_str(if *turbo_ativado {
                    ", Turbo ativado"
                } else {
                    ", Turbo desativado"
                });
            }
            VehicleKind::Caminhao { capacidade_kg, carga_kg, .. } => {
                status.push_str(&format!(", Carga: {}/{} kg", carga_kg, capacidade_kg));
            }
            VehicleKind::Carro { .. } => {}
        }
        status
    }

    pub fn ligar(&mut self) -> ActionOutcome {
        if self.ligado {
            return ActionOutcome::rejected("O veículo já está ligado.");
        }
        self.ligado = true;
        ActionOutcome::ok(ActionEvent::EngineStarted, format!("{} ligado!", self.kind.label()))
    }

    pub fn desligar(&mut self) -> ActionOutcome {
        if !self.ligado {
            return ActionOutcome::rejected("O veículo já está desligado.");
        }
        if self.velocidade > 0 {
            return ActionOutcome::rejected("Pare o veículo antes de desligar!");
        }
        self.ligado = false;
        ActionOutcome::ok(ActionEvent::EngineStopped, format!("{} desligado!", self.kind.label()))
    }

    pub fn acelerar(&mut self) -> ActionOutcome {
        if !self.ligado {
            return ActionOutcome::rejected("Ligue o veículo antes de acelerar!");
        }
        let max = self.kind.max_speed();
        if self.velocidade + PASSO_ACELERACAO > max {
            return ActionOutcome::rejected(format!(
                "Velocidade máxima de {} km/h excedida.",
                max
            ));
        }
        self.velocidade += PASSO_ACELERACAO;
        ActionOutcome::ok(
            ActionEvent::Accelerated,
            format!("Acelerando! Velocidade atual: {} km/h.", self.velocidade),
        )
    }

    pub fn frear(&mut self) -> ActionOutcome {
        if self.velocidade == 0 {
            return ActionOutcome::rejected("O veículo já está parado.");
        }
        self.velocidade = self.velocidade.saturating_sub(PASSO_FRENAGEM);
        ActionOutcome::ok(
            ActionEvent::Braked,
            format!("Freando. Velocidade atual: {} km/h.", self.velocidade),
        )
    }

    pub fn buzinar(&self) -> ActionOutcome {
        ActionOutcome::ok(ActionEvent::HornSounded, "Buzinando: Bibi!")
    }

    pub fn alternar_turbo(&mut self) -> ActionOutcome {
        match &mut self.kind {
            VehicleKind::CarroEsportivo { turbo_ativado, .. } => {
                *turbo_ativado = !*turbo_ativado;
                if *turbo_ativado {
                    ActionOutcome::ok(ActionEvent::TurboActivated, "Turbo ativado!")
                } else {
                    ActionOutcome::ok(ActionEvent::TurboDeactivated, "Turbo desativado.")
                }
            }
            _ => ActionOutcome::rejected("Esta ação só é aplicável a Carros Esportivos."),
        }
    }

    pub fn carregar(&mut self, quantidade_kg: u32) -> ActionOutcome {
        match &mut self.kind {
            VehicleKind::Caminhao { capacidade_kg, carga_kg, .. } => {
                if *carga_kg + quantidade_kg > *capacidade_kg {
                    return ActionOutcome::rejected(format!(
                        "Capacidade de carga de {} kg excedida.",
                        capacidade_kg
                    ));
                }
                *carga_kg += quantidade_kg;
                ActionOutcome::ok(
                    ActionEvent::CargoLoaded,
                    format!(
                        "Caminhão carregado com {} kg. Carga atual: {}/{} kg.",
                        quantidade_kg, carga_kg, capacidade_kg
                    ),
                )
            }
            _ => ActionOutcome::rejected("Esta ação só é aplicável a Caminhões."),
        }
    }

    pub fn descarregar(&mut self, quantidade_kg: u32) -> ActionOutcome {
        match &mut self.kind {
            VehicleKind::Caminhao { capacidade_kg, carga_kg, .. } => {
                if *carga_kg == 0 {
                    return ActionOutcome::rejected("Não há carga para descarregar.");
                }
                if quantidade_kg > *carga_kg {
                    return ActionOutcome::rejected(format!(
                        "Não é possível descarregar {} kg: carga atual é {} kg.",
                        quantidade_kg, carga_kg
                    ));
                }
                *carga_kg -= quantidade_kg;
                ActionOutcome::ok(
                    ActionEvent::CargoUnloaded,
                    format!(
                        "Caminhão descarregado em {} kg. Carga atual: {}/{} kg.",
                        quantidade_kg, carga_kg, capacidade_kg
                    ),
                )
            }
            _ => ActionOutcome::rejected("Esta ação só é aplicável a Caminhões."),
        }
    }

    /// Ejecutar una acción del panel. Los montos de carga/descarga son los
    /// fijos del panel de la SPA (1000 kg / 500 kg).
    pub fn executar(&mut self, acao: VehicleAction) -> ActionOutcome {
        match acao {
            VehicleAction::Ligar => self.ligar(),
            VehicleAction::Desligar => self.desligar(),
            VehicleAction::Acelerar => self.acelerar(),
            VehicleAction::Frear => self.frear(),
            VehicleAction::Buzinar => self.buzinar(),
            VehicleAction::Turbo => self.alternar_turbo(),
            VehicleAction::Carregar => self.carregar(CARGA_PADRAO_KG),
            VehicleAction::Descarregar => self.descarregar(DESCARGA_PADRAO_KG),
        }
    }

    /// Agregar un registro de manutenção; rechaza registros inválidos
    pub fn adicionar_manutencao(&mut self, manutencao: Maintenance) -> bool {
        if !manutencao.validar() {
            return false;
        }
        self.historico_manutencao.push(manutencao);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carro() -> Vehicle {
        Vehicle::new(
            "ABC1234".to_string(),
            "Fusca".to_string(),
            "azul".to_string(),
            VehicleKind::Carro { portas: 2 },
        )
    }

    fn esportivo() -> Vehicle {
        Vehicle::new(
            "TUR8000".to_string(),
            "F40".to_string(),
            "vermelho".to_string(),
            VehicleKind::CarroEsportivo { portas: 2, turbo_ativado: false },
        )
    }

    fn caminhao(capacidade_kg: u32) -> Vehicle {
        Vehicle::new(
            "CAM2000".to_string(),
            "Atego".to_string(),
            "branco".to_string(),
            VehicleKind::Caminhao { eixos: 2, capacidade_kg, carga_kg: 0 },
        )
    }

    #[test]
    fn test_acelerar_desligado_nao_muda_velocidade() {
        let mut v = carro();
        let outcome = v.acelerar();
        assert!(outcome.is_rejected());
        assert_eq!(outcome.severity, Severity::Warning);
        assert_eq!(v.velocidade, 0);
        assert!(outcome.event.is_none());
    }

    #[test]
    fn test_ligar_e_acelerar() {
        let mut v = carro();
        let ligado = v.ligar();
        assert_eq!(ligado.event, Some(ActionEvent::EngineStarted));
        assert_eq!(ligado.severity, Severity::Info);

        let outcome = v.acelerar();
        assert_eq!(outcome.event, Some(ActionEvent::Accelerated));
        assert_eq!(v.velocidade, PASSO_ACELERACAO);
    }

    #[test]
    fn test_ligar_duas_vezes_rejeitado() {
        let mut v = carro();
        v.ligar();
        let outcome = v.ligar();
        assert!(outcome.is_rejected());
        assert!(v.ligado);
    }

    #[test]
    fn test_desligar_em_movimento_rejeitado() {
        let mut v = carro();
        v.ligar();
        v.acelerar();
        let outcome = v.desligar();
        assert!(outcome.is_rejected());
        assert!(v.ligado);
        assert_eq!(v.velocidade, PASSO_ACELERACAO);
    }

    #[test]
    fn test_frear_parado_rejeitado() {
        let mut v = carro();
        v.ligar();
        let outcome = v.frear();
        assert!(outcome.is_rejected());
        assert_eq!(v.velocidade, 0);
    }

    #[test]
    fn test_frear_reduz_ate_zero() {
        let mut v = carro();
        v.ligar();
        v.acelerar();
        let outcome = v.frear();
        assert_eq!(outcome.event, Some(ActionEvent::Braked));
        assert_eq!(v.velocidade, 0);
    }

    #[test]
    fn test_velocidade_maxima_excedida_sem_efeito() {
        let mut v = caminhao(2000);
        v.ligar();
        for _ in 0..12 {
            v.acelerar();
        }
        assert_eq!(v.velocidade, v.kind.max_speed());
        let outcome = v.acelerar();
        assert!(outcome.is_rejected());
        assert_eq!(v.velocidade, v.kind.max_speed());
    }

    #[test]
    fn test_turbo_somente_esportivo() {
        let mut v = carro();
        let outcome = v.alternar_turbo();
        assert!(outcome.is_rejected());
        assert_eq!(v.kind, VehicleKind::Carro { portas: 2 });

        let mut e = esportivo();
        let ativado = e.alternar_turbo();
        assert_eq!(ativado.event, Some(ActionEvent::TurboActivated));
        assert_eq!(ativado.event.unwrap().sound_cue(), Some("turbo"));
        let desativado = e.alternar_turbo();
        assert_eq!(desativado.event, Some(ActionEvent::TurboDeactivated));
        assert_eq!(desativado.event.unwrap().sound_cue(), None);
    }

    #[test]
    fn test_carga_respeita_capacidade() {
        let mut v = caminhao(2000);
        let primeira = v.carregar(1000);
        assert_eq!(primeira.event, Some(ActionEvent::CargoLoaded));

        // 1000 + 1500 > 2000: rechazada sin clamping
        let segunda = v.carregar(1500);
        assert!(segunda.is_rejected());
        match v.kind {
            VehicleKind::Caminhao { carga_kg, .. } => assert_eq!(carga_kg, 1000),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_descarga_nao_fica_negativa() {
        let mut v = caminhao(2000);
        let vazio = v.descarregar(500);
        assert!(vazio.is_rejected());

        v.carregar(1000);
        let demais = v.descarregar(1500);
        assert!(demais.is_rejected());
        match v.kind {
            VehicleKind::Caminhao { carga_kg, .. } => assert_eq!(carga_kg, 1000),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_carga_em_carro_rejeitada() {
        let mut v = carro();
        assert!(v.carregar(100).is_rejected());
        assert!(v.descarregar(100).is_rejected());
    }

    #[test]
    fn test_buzinar_independe_de_estado() {
        let v = carro();
        let outcome = v.buzinar();
        assert_eq!(outcome.event, Some(ActionEvent::HornSounded));
        assert_eq!(outcome.severity, Severity::Info);
    }

    #[test]
    fn test_manutencao_invalida_rejeitada() {
        use crate::models::maintenance::Maintenance;
        let mut v = carro();
        let invalida = Maintenance::new(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            String::new(),
            100.0,
            String::new(),
        );
        assert!(!v.adicionar_manutencao(invalida));
        assert!(v.historico_manutencao.is_empty());
    }

    #[test]
    fn test_status_completo_caminhao() {
        let mut v = caminhao(2000);
        v.carregar(1000);
        assert_eq!(
            v.status_completo(),
            "Caminhão CAM2000 (branco): Desligado, Carga: 1000/2000 kg"
        );
    }
}
