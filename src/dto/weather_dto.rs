//! DTOs de clima
//!
//! Formateo del snapshot de clima para el panel de la SPA. Todas las
//! conversiones de unidades viven acá (el fetcher entrega valores crudos
//! en unidades métricas del proveedor).

use chrono::FixedOffset;
use serde::Serialize;

use crate::services::weather_service::WeatherSnapshot;

// Response del panel "Clima Atual"
#[derive(Debug, Serialize)]
pub struct WeatherReportResponse {
    pub cidade_exibicao: String,
    pub descricao: String,
    pub icone_url: String,
    pub temperatura: String,
    pub sensacao_termica: String,
    pub temp_min: String,
    pub temp_max: String,
    pub umidade: String,
    pub vento: String,
    pub pressao: String,
    pub visibilidade: String,
    pub nascer_do_sol: String,
    pub por_do_sol: String,
}

impl WeatherReportResponse {
    /// `cidade_input` es lo que tipeó el usuario; si el proveedor devolvió
    /// otro nombre, mostramos el del proveedor con el país.
    pub fn from_snapshot(previsao: &WeatherSnapshot, cidade_input: &str) -> Self {
        let cidade_exibicao = if previsao.cidade.is_empty() {
            cidade_input.to_string()
        } else {
            format!("{}, {}", previsao.cidade, previsao.pais)
        };

        // Horarios de sol en el reloj local del destino, no del servidor
        let offset = FixedOffset::east_opt(previsao.timezone_offset_s)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("offset zero"));
        let nascer = previsao.nascer_do_sol.with_timezone(&offset);
        let por = previsao.por_do_sol.with_timezone(&offset);

        Self {
            cidade_exibicao,
            descricao: capitalizar(&previsao.descricao),
            icone_url: format!(
                "https://openweathermap.org/img/wn/{}@2x.png",
                previsao.icone
            ),
            temperatura: format!("{:.1}°C", previsao.temperatura),
            sensacao_termica: format!("{:.1}°C", previsao.sensacao_termica),
            temp_min: format!("{:.1}°C", previsao.temp_min),
            temp_max: format!("{:.1}°C", previsao.temp_max),
            umidade: format!("{}%", previsao.umidade),
            vento: format!("{:.1} km/h", previsao.vento_velocidade_ms * 3.6),
            pressao: format!("{} hPa", previsao.pressao_hpa),
            visibilidade: format!("{:.1} km", f64::from(previsao.visibilidade_m) / 1000.0),
            nascer_do_sol: nascer.format("%H:%M").to_string(),
            por_do_sol: por.format("%H:%M").to_string(),
        }
    }
}

fn capitalizar(texto: &str) -> String {
    let mut chars = texto.chars();
    match chars.next() {
        Some(primeira) => primeira.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
