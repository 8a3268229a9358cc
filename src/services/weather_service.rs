//! Servicio de clima (OpenWeatherMap)
//!
//! El proxy de clima que la SPA original no podía tener: la credencial vive
//! en el servidor. Una sola llamada GET al endpoint de clima actual; el body
//! se parsea aunque el status no sea exitoso para aprovechar el mensaje de
//! error del proveedor.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::utils::errors::{AppError, AppResult};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Snapshot de clima normalizado. Valores crudos en unidades métricas del
/// proveedor; las conversiones de presentación se hacen en la capa de DTOs.
/// Solo los timestamps se convierten acá (UNIX → instante UTC).
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub cidade: String,
    pub pais: String,
    pub temperatura: f64,
    pub sensacao_termica: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub descricao: String,
    pub icone: String,
    pub umidade: u8,
    pub vento_velocidade_ms: f64,
    pub pressao_hpa: u32,
    pub visibilidade_m: u32,
    pub nascer_do_sol: DateTime<Utc>,
    pub por_do_sol: DateTime<Utc>,
    /// Desplazamiento del UTC en segundos
    pub timezone_offset_s: i32,
}

// Payload del endpoint "Current Weather Data"
#[derive(Debug, Deserialize)]
struct OwmCurrentWeather {
    #[serde(default)]
    name: String,
    sys: OwmSys,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmDescription>,
    wind: OwmWind,
    #[serde(default)]
    visibility: Option<u32>,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    #[serde(default)]
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize, Default)]
struct OwmDescription {
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

pub struct WeatherService {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl WeatherService {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }

    /// Buscar el clima actual para una ciudad. Sin credencial configurada
    /// falla acá mismo, antes de cualquier llamada de red.
    pub async fn buscar_clima_atual(&self, cidade: &str) -> AppResult<WeatherSnapshot> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "A chave da API de clima não está configurada no servidor \
                 (OPENWEATHER_API_KEY)."
                    .to_string(),
            )
        })?;

        log::info!("🌦️ Buscando clima atual para: {}", cidade);

        let url = format!(
            "{}?q={}&appid={}&units=metric&lang=pt_br",
            OPENWEATHER_URL,
            urlencoding::encode(cidade),
            api_key
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "GaragemInteligente/1.0")
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Falha na requisição de clima: {}", e)))?;

        let status = response.status();
        log::info!("📡 Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Falha ao ler resposta de clima: {}", e)))?;

        parse_current_weather(status, &body, cidade)
    }
}

/// Mapear status + body del proveedor al snapshot o a un error con mensaje
/// específico (separado del transporte para poder testearlo sin red)
pub fn parse_current_weather(
    status: StatusCode,
    body: &str,
    cidade: &str,
) -> AppResult<WeatherSnapshot> {
    if !status.is_success() {
        // El proveedor manda {"cod": ..., "message": ...} también en errores
        let provider_message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| "Erro desconhecido".to_string());

        let message = match status.as_u16() {
            401 => "Chave de API inválida ou não autorizada. Verifique sua chave no \
                    OpenWeatherMap."
                .to_string(),
            404 => format!(
                "Cidade \"{}\" não encontrada pelo serviço de previsão.",
                cidade
            ),
            _ => format!("Erro HTTP {}: {}", status.as_u16(), provider_message),
        };
        log::error!("❌ Erro ao buscar clima: {}", message);
        return Err(AppError::ExternalApi(message));
    }

    let payload: OwmCurrentWeather = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalApi(format!("Falha ao interpretar resposta do clima: {}", e))
    })?;

    let descricao = payload.weather.into_iter().next().unwrap_or_default();

    log::info!("✅ Clima obtido para {} ({})", payload.name, payload.sys.country);

    Ok(WeatherSnapshot {
        cidade: payload.name,
        pais: payload.sys.country,
        temperatura: payload.main.temp,
        sensacao_termica: payload.main.feels_like,
        temp_min: payload.main.temp_min,
        temp_max: payload.main.temp_max,
        descricao: descricao.description,
        icone: descricao.icon,
        umidade: payload.main.humidity,
        vento_velocidade_ms: payload.wind.speed,
        pressao_hpa: payload.main.pressure,
        visibilidade_m: payload.visibility.unwrap_or(0),
        nascer_do_sol: DateTime::from_timestamp(payload.sys.sunrise, 0).unwrap_or_default(),
        por_do_sol: DateTime::from_timestamp(payload.sys.sunset, 0).unwrap_or_default(),
        timezone_offset_s: payload.timezone,
    })
}
