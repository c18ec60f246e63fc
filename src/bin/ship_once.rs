use clap::Parser;
use shipit_gateway::utils::{logger, validation::Validate};
use shipit_gateway::{CliConfig, Settings, ShipError, ShipItClient, ShipmentService};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// 送出單一出貨請求，用於手動測試 ShipIt 連線
#[derive(Debug, Parser)]
#[command(name = "ship_once")]
#[command(about = "Validate one shipment JSON document and send it to ShipIt")]
struct ShipOnceArgs {
    #[arg(help = "Shipment JSON file; reads stdin when omitted")]
    input: Option<PathBuf>,

    #[arg(long, env = "SHIPIT_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "SHIPIT_BASE_URL")]
    provider_url: Option<String>,

    #[arg(long, env = "SHIPIT_TIMEOUT_SECONDS")]
    timeout_seconds: Option<u64>,

    #[arg(long)]
    verbose: bool,
}

fn read_input(input: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match input {
        Some(path) => std::fs::read(path),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ShipOnceArgs::parse();
    logger::init_cli_logger(args.verbose);

    let cli = CliConfig {
        config: args.config.clone(),
        provider_url: args.provider_url.clone(),
        timeout_seconds: args.timeout_seconds,
        verbose: args.verbose,
        ..Default::default()
    };
    let settings = Settings::resolve(&cli)?;
    settings.validate()?;

    let body = read_input(args.input.as_ref())?;
    let client = ShipItClient::from_config(&settings)?;
    tracing::debug!("Sending shipment to {}", client.ship_url());
    let service = ShipmentService::new(Arc::new(client));

    match service.ship(&body).await {
        Ok(result) => {
            println!("✅ Shipped: {}", result.shipped);
            Ok(())
        }
        Err(ShipError::ValidationFailure(violations)) => {
            eprintln!("❌ Shipment request is invalid:");
            for violation in &violations {
                eprintln!("  - {}", violation);
            }
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
