use clap::Parser;
use shipit_gateway::core::ConfigProvider;
use shipit_gateway::utils::{logger, validation::Validate};
use shipit_gateway::{router, CliConfig, Settings, ShipItClient, ShipmentService};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs() {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = ShipItClient::from_config(&settings)?;
    let service = ShipmentService::new(Arc::new(client));
    let app = router(service);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!(
        bind_addr = %settings.bind_addr(),
        provider = %settings.provider_base_url(),
        timeout_seconds = settings.request_timeout().as_secs(),
        "🚀 shipit-gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
