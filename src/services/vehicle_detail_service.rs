//! Servicio de detalles extra de vehículos
//!
//! Lee el recurso estático de detalles (el `dados_veiculos_api.json` que la
//! SPA servía junto a su HTML) y hace un scan lineal por placa exacta.
//! Cualquier fallo de transporte o de parseo se degrada a "no encontrado":
//! este servicio nunca propaga errores al caller.

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Registro del documento externo. Solo `placa` es obligatoria; el resto se
/// renderiza con fallback explícito cuando falta.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleApiDetail {
    pub placa: String,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default, rename = "valorFIPE")]
    pub valor_fipe: Option<f64>,
    #[serde(default, rename = "temRecall")]
    pub tem_recall: Option<bool>,
    #[serde(default, rename = "recallInfo")]
    pub recall_info: Option<String>,
    #[serde(default, rename = "consumoMedioCidade")]
    pub consumo_medio_cidade: Option<f64>,
    #[serde(default, rename = "consumoMedioEstrada")]
    pub consumo_medio_estrada: Option<f64>,
    #[serde(default, rename = "imagemUrl")]
    pub imagem_url: Option<String>,
    #[serde(default, rename = "dicaManutencao")]
    pub dica_manutencao: Option<String>,
    #[serde(default, rename = "identificadorUnico")]
    pub identificador_unico: Option<String>,
}

pub struct VehicleDetailService {
    /// URL http(s) o ruta de archivo local del documento
    source: String,
    client: reqwest::Client,
}

impl VehicleDetailService {
    pub fn new(source: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { source, client }
    }

    /// Buscar el primer registro cuya placa coincida exactamente.
    /// Devuelve None tanto para "no está" como para cualquier error (logueado).
    pub async fn buscar_detalhes(&self, placa: &str) -> Option<VehicleApiDetail> {
        log::info!("🔍 Buscando detalhes extra para a placa: {}", placa);
        match self.carregar_documento().await {
            Ok(registros) => registros.into_iter().find(|r| r.placa == placa),
            Err(e) => {
                log::error!("❌ Falha na busca de detalhes extra: {}", e);
                None
            }
        }
    }

    async fn carregar_documento(&self) -> Result<Vec<VehicleApiDetail>> {
        let body = if self.source.starts_with("http://") || self.source.starts_with("https://") {
            let response = self.client.get(&self.source).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(anyhow!("API Veículo Erro HTTP: {}", status));
            }
            response.text().await?
        } else {
            tokio::fs::read_to_string(&self.source).await?
        };

        // El documento original admite entradas nulas o malformadas en el
        // array; se ignoran en vez de invalidar el documento entero
        let valores: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(valores
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect())
    }
}
