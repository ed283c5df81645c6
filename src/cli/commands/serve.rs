//! Serve command implementation
//!
//! Loads the server configuration in layers (defaults, config file,
//! environment, CLI flags) and runs the HTTP upload service until Ctrl-C.

use super::shared::setup_logging;
use crate::Result;
use crate::app::adapters::http;
use crate::cli::args::ServeArgs;
use crate::config::Config;
use tracing::{debug, info, warn};

/// Serve command runner
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    debug!("Serve arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    http::serve(config, shutdown_signal()).await
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &ServeArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(bind_address) = &args.bind_address {
        config.bind_address = bind_address.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(max_upload_mb) = args.max_upload_mb {
        config.max_upload_mb = max_upload_mb;
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl-C, shutting down");
}
