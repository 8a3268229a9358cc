//! Colección de la garagem
//!
//! Mantiene el mapeo placa → vehículo y el puntero de selección del panel
//! de detalle. La unicidad de placas se garantiza acá, en el momento del alta.

use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{conflict_error, AppError};

/// La garagem completa: vehículos + selección actual.
/// La selección es estado de sesión, nunca se persiste.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Garage {
    pub veiculos: Vec<Vehicle>,
    #[serde(skip)]
    pub placa_selecionada: Option<String>,
}

impl Garage {
    pub fn find(&self, placa: &str) -> Option<&Vehicle> {
        self.veiculos.iter().find(|v| v.placa == placa)
    }

    pub fn find_mut(&mut self, placa: &str) -> Option<&mut Vehicle> {
        self.veiculos.iter_mut().find(|v| v.placa == placa)
    }

    pub fn exists(&self, placa: &str) -> bool {
        self.find(placa).is_some()
    }

    /// Agregar un vehículo; placa duplicada no muta la colección
    pub fn add(&mut self, vehicle: Vehicle) -> Result<(), AppError> {
        if self.exists(&vehicle.placa) {
            return Err(conflict_error("Veículo", "placa", &vehicle.placa));
        }
        self.veiculos.push(vehicle);
        Ok(())
    }

    /// Seleccionar el vehículo del panel de detalle
    pub fn select(&mut self, placa: &str) {
        self.placa_selecionada = Some(placa.to_string());
    }

    /// Volver a la vista de lista
    pub fn clear_selection(&mut self) {
        self.placa_selecionada = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleKind;

    fn veiculo(placa: &str) -> Vehicle {
        Vehicle::new(
            placa.to_string(),
            "Fusca".to_string(),
            "azul".to_string(),
            VehicleKind::Carro { portas: 2 },
        )
    }

    #[test]
    fn test_placa_unica() {
        let mut g = Garage::default();
        g.add(veiculo("ABC1234")).unwrap();

        let result = g.add(veiculo("ABC1234"));
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(g.veiculos.len(), 1);
    }

    #[test]
    fn test_find_por_placa() {
        let mut g = Garage::default();
        g.add(veiculo("ABC1234")).unwrap();
        assert!(g.find("ABC1234").is_some());
        assert!(g.find("ZZZ9999").is_none());
    }

    #[test]
    fn test_selecao() {
        let mut g = Garage::default();
        g.add(veiculo("ABC1234")).unwrap();
        g.select("ABC1234");
        assert_eq!(g.placa_selecionada.as_deref(), Some("ABC1234"));
        g.clear_selection();
        assert!(g.placa_selecionada.is_none());
    }
}
