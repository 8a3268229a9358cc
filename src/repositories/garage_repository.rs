//! Repositorio de persistencia de la garagem
//!
//! Equivalente servidor del localStorage de la SPA: la colección completa se
//! carga una vez al arranque y se re-escribe entera después de cada mutación.
//! El controller nunca toca el archivo directamente, solo save/load totales.

use std::path::{Path, PathBuf};

use crate::models::garage::Garage;
use crate::utils::errors::{AppError, AppResult};

pub struct GarageRepository {
    path: PathBuf,
}

impl GarageRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Cargar la colección completa. Archivo ausente o corrupto degrada a
    /// garagem vacía con warning: el arranque nunca falla por el storage.
    pub async fn load(&self) -> Garage {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => match serde_json::from_str::<Garage>(&contents) {
                Ok(garage) => {
                    log::info!(
                        "📦 Garagem carregada: {} veículo(s) de {}",
                        garage.veiculos.len(),
                        self.path.display()
                    );
                    garage
                }
                Err(e) => {
                    log::warn!(
                        "⚠️ Arquivo de garagem corrompido ({}): começando vazio",
                        e
                    );
                    Garage::default()
                }
            },
            Err(_) => {
                log::info!(
                    "📦 Nenhuma garagem salva em {}: começando vazia",
                    self.path.display()
                );
                Garage::default()
            }
        }
    }

    /// Guardar la colección completa (nunca flush parcial)
    pub async fn save(&self, garage: &Garage) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::Storage(e.to_string()))?;
            }
        }
        let contents = serde_json::to_string_pretty(garage)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Guardar sin propagar el error: las interacciones persisten
    /// fire-and-forget, un fallo de disco nunca tumba la acción del usuario
    pub async fn save_best_effort(&self, garage: &Garage) {
        if let Err(e) = self.save(garage).await {
            log::error!("❌ Erro ao salvar garagem (ignorado): {}", e);
        }
    }
}
