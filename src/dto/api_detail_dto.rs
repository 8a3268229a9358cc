//! DTOs de detalles extra (fuente externa)
//!
//! Formateo del registro del recurso estático de detalles de vehículos.
//! Todos los campos opcionales se renderizan con texto de fallback explícito.

use serde::Serialize;

use crate::services::vehicle_detail_service::VehicleApiDetail;

const NAO_DISPONIVEL: &str = "N/D";

// Contenido formateado del panel de detalles extra
#[derive(Debug, Serialize)]
pub struct ApiDetailContent {
    pub titulo: String,
    pub valor_fipe: String,
    pub consumo_cidade: String,
    pub consumo_estrada: String,
    pub tem_recall: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall_info: Option<String>,
    pub dica_manutencao: String,
    pub identificador: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagem_url: Option<String>,
}

// Response del panel: encontrado o mensaje de "no encontrado"
#[derive(Debug, Serialize)]
pub struct ApiDetailResponse {
    pub placa: String,
    pub encontrado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conteudo: Option<ApiDetailContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
}

impl ApiDetailResponse {
    pub fn found(placa: &str, detalhes: &VehicleApiDetail) -> Self {
        let valor_fipe = detalhes
            .valor_fipe
            .map(|valor| format!("R$ {:.2}", valor).replace('.', ","))
            .unwrap_or_else(|| NAO_DISPONIVEL.to_string());
        let consumo = |km_l: Option<f64>| {
            km_l.map(|v| format!("{} km/l", v))
                .unwrap_or_else(|| NAO_DISPONIVEL.to_string())
        };
        let tem_recall = detalhes.tem_recall.unwrap_or(false);

        Self {
            placa: placa.to_string(),
            encontrado: true,
            conteudo: Some(ApiDetailContent {
                titulo: format!(
                    "Detalhes Adicionais para {} ({})",
                    placa,
                    detalhes.modelo.as_deref().unwrap_or("Modelo Desconhecido")
                ),
                valor_fipe,
                consumo_cidade: consumo(detalhes.consumo_medio_cidade),
                consumo_estrada: consumo(detalhes.consumo_medio_estrada),
                tem_recall: if tem_recall { "Sim" } else { "Não" }.to_string(),
                // Solo se muestra cuando hay recall pendiente con información
                recall_info: tem_recall
                    .then(|| detalhes.recall_info.clone())
                    .flatten(),
                dica_manutencao: detalhes
                    .dica_manutencao
                    .clone()
                    .unwrap_or_else(|| "Nenhuma dica específica.".to_string()),
                identificador: detalhes
                    .identificador_unico
                    .clone()
                    .unwrap_or_else(|| NAO_DISPONIVEL.to_string()),
                imagem_url: detalhes.imagem_url.clone(),
            }),
            mensagem: None,
        }
    }

    pub fn not_found(placa: &str) -> Self {
        Self {
            placa: placa.to_string(),
            encontrado: false,
            conteudo: None,
            mensagem: Some(format!(
                "Não foram encontrados detalhes adicionais para a placa {} na fonte \
                 externa ou ocorreu um erro ao buscar os dados.",
                placa
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detalhes_completos() -> VehicleApiDetail {
        VehicleApiDetail {
            placa: "ABC1234".to_string(),
            modelo: Some("Fusca".to_string()),
            valor_fipe: Some(45000.0),
            tem_recall: Some(true),
            recall_info: Some("Cinto de segurança".to_string()),
            consumo_medio_cidade: Some(8.5),
            consumo_medio_estrada: Some(12.0),
            imagem_url: None,
            dica_manutencao: None,
            identificador_unico: Some("api-001".to_string()),
        }
    }

    #[test]
    fn test_formatacao_completa() {
        let response = ApiDetailResponse::found("ABC1234", &detalhes_completos());
        let conteudo = response.conteudo.unwrap();
        assert_eq!(conteudo.valor_fipe, "R$ 45000,00");
        assert_eq!(conteudo.consumo_cidade, "8.5 km/l");
        assert_eq!(conteudo.tem_recall, "Sim");
        assert_eq!(conteudo.recall_info.as_deref(), Some("Cinto de segurança"));
        assert_eq!(conteudo.dica_manutencao, "Nenhuma dica específica.");
    }

    #[test]
    fn test_fallbacks_de_campos_ausentes() {
        let detalhes = VehicleApiDetail {
            placa: "ABC1234".to_string(),
            modelo: None,
            valor_fipe: None,
            tem_recall: None,
            recall_info: Some("não deve aparecer".to_string()),
            consumo_medio_cidade: None,
            consumo_medio_estrada: None,
            imagem_url: None,
            dica_manutencao: None,
            identificador_unico: None,
        };
        let response = ApiDetailResponse::found("ABC1234", &detalhes);
        let conteudo = response.conteudo.unwrap();
        assert_eq!(conteudo.valor_fipe, "N/D");
        assert_eq!(conteudo.tem_recall, "Não");
        // Sin recall pendiente la información de recall no se muestra
        assert!(conteudo.recall_info.is_none());
        assert!(conteudo.titulo.contains("Modelo Desconhecido"));
    }

    #[test]
    fn test_nao_encontrado() {
        let response = ApiDetailResponse::not_found("ZZZ9999");
        assert!(!response.encontrado);
        assert!(response.mensagem.unwrap().contains("ZZZ9999"));
    }
}
