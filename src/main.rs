use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;

use garagem_api::config::environment::EnvironmentConfig;
use garagem_api::controllers::maintenance_controller::MaintenanceController;
use garagem_api::models::garage::Garage;
use garagem_api::routes::create_app;
use garagem_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Garagem Inteligente - API");
    info!("============================");

    let config = EnvironmentConfig::default();
    if config.is_development() {
        info!("🔧 Ambiente de desenvolvimento");
    }

    // Cargar la garagem persistida (archivo ausente o corrupto ⇒ garagem vacía)
    let state = AppState::new(Garage::default(), config.clone());
    let garagem = state.repository.load().await;
    *state.garage.write().await = garagem;

    // Barrido de agendamientos al arranque (el que la SPA hacía al cargar)
    MaintenanceController::new(&state).log_startup_reminders().await;

    if state.config.openweather_api_key.is_none() {
        info!("⚠️ OPENWEATHER_API_KEY não configurada; /api/clima responderá 503");
    }

    let app = create_app(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Adicionar veículo");
    info!("   GET  /api/vehicle - Listar garagem");
    info!("   GET  /api/vehicle/:placa - Selecionar e detalhar veículo");
    info!("   GET  /api/vehicle/:placa/detalhes-extra - Detalhes da fonte externa");
    info!("   POST /api/vehicle/:placa/manutencao - Agendar manutenção");
    info!("🔧 Endpoints - Manutenção:");
    info!("   GET  /api/manutencao/lembretes - Lembretes de hoje/amanhã");
    info!("🎮 Endpoints - Garagem:");
    info!("   POST /api/garage/interagir - Interagir com o veículo selecionado");
    info!("   POST /api/garage/voltar - Voltar à lista");
    info!("🌦️ Endpoints - Clima:");
    info!("   GET  /api/clima?cidade= - Clima atual (OpenWeatherMap)");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
