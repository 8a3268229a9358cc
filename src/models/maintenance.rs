//! Modelo de registros de manutenção
//!
//! Un registro de mantenimiento agendado o histórico asociado a un vehículo.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registro de manutenção (histórico ou agendamento)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Maintenance {
    pub id: Uuid,
    pub data: NaiveDate,
    pub tipo_servico: String,
    pub custo: f64,
    pub descricao: String,
}

impl Maintenance {
    pub fn new(data: NaiveDate, tipo_servico: String, custo: f64, descricao: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            tipo_servico: tipo_servico.trim().to_string(),
            custo,
            descricao: descricao.trim().to_string(),
        }
    }

    /// Verificar la validez del registro antes de aceptarlo.
    /// Reglas mínimas observadas: tipo no vacío y costo finito no negativo.
    /// La descripción puede quedar vacía y fechas pasadas son historial válido.
    pub fn validar(&self) -> bool {
        !self.tipo_servico.is_empty() && self.custo.is_finite() && self.custo >= 0.0
    }

    /// Representación legible usada en listas y recordatorios,
    /// ej.: "Revisão em 15/01/2024 - R$ 350,00 (troca de óleo)"
    pub fn formatar(&self) -> String {
        let custo = format!("R$ {:.2}", self.custo).replace('.', ",");
        let base = format!("{} em {} - {}", self.tipo_servico, self.data.format("%d/%m/%Y"), custo);
        if self.descricao.is_empty() {
            base
        } else {
            format!("{} ({})", base, self.descricao)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_registro_valido() {
        let m = Maintenance::new(data("2024-01-15"), "Revisão".to_string(), 350.0, String::new());
        assert!(m.validar());
    }

    #[test]
    fn test_custo_negativo_invalido() {
        let m = Maintenance::new(data("2024-01-15"), "Revisão".to_string(), -1.0, String::new());
        assert!(!m.validar());
    }

    #[test]
    fn test_custo_nan_invalido() {
        let m = Maintenance::new(data("2024-01-15"), "Revisão".to_string(), f64::NAN, String::new());
        assert!(!m.validar());
    }

    #[test]
    fn test_tipo_vazio_invalido() {
        let m = Maintenance::new(data("2024-01-15"), "   ".to_string(), 100.0, String::new());
        assert!(!m.validar());
    }

    #[test]
    fn test_formatar() {
        let m = Maintenance::new(
            data("2024-01-15"),
            "Revisão".to_string(),
            350.0,
            "troca de óleo".to_string(),
        );
        assert_eq!(m.formatar(), "Revisão em 15/01/2024 - R$ 350,00 (troca de óleo)");

        let sem_descricao =
            Maintenance::new(data("2024-02-01"), "Freios".to_string(), 80.5, String::new());
        assert_eq!(sem_descricao.formatar(), "Freios em 01/02/2024 - R$ 80,50");
    }
}
