use holiday_service::error::HolidayServiceError;
use holiday_service::startup::{load_config, startup_error};

use holiday_core::SERVICE_NAME;
use holiday_core::api::{HttpServerHandle, build_router, start_http_server};
use holiday_core::lookup::HolidayService;
use holiday_core::provider::ProviderClient;

use std::env::args;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};
use tokio::signal::ctrl_c;

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = args().nth(1).map(PathBuf::from);

    let handle = match start(config_path).await {
        Ok(handle) => handle,
        Err(e) => {
            // The logger may not be installed yet
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }

    info!("Shutting down {SERVICE_NAME}");

    match handle.shutdown().await {
        Ok(()) => {
            info!("{SERVICE_NAME} stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn start(config_path: Option<PathBuf>) -> Result<HttpServerHandle, HolidayServiceError> {
    // Logger is installed inside, before the config is read
    let config = load_config(config_path.as_deref())?;

    info!("{SERVICE_NAME} starting");
    info!("Holiday provider: {}", config.provider.base_url);

    let provider = ProviderClient::new(&config.provider).map_err(startup_error)?;
    let router = build_router(HolidayService::new(provider));

    let handle = start_http_server(&config.server, router)
        .await
        .map_err(startup_error)?;

    info!("{SERVICE_NAME} listening on {}", handle.base_url());

    Ok(handle)
}
