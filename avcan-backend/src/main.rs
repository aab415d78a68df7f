use avcan_backend::config;
use avcan_backend::console;
use avcan_backend::module::avcan::{AprsFiClient, AvcanClient, AvcanResponder};
use avcan_backend::module::handler::MessageHandler;

use anyhow::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::read_config()?;

    // Initialize logging
    let _logging_guard = avcan_backend::logging::init_logging(
        &config.log_dir,
        "avcan-backend",
        &config.log_level,
    )?;

    tracing::info!("Avcan backend starting...");

    let timeout = config.request_timeout();
    let locations = Arc::new(AprsFiClient::new(&config.aprs_fi.base_url, timeout)?);
    let forecasts = Arc::new(AvcanClient::new(
        &config.avcan.base_url,
        &config.avcan.language,
        timeout,
    )?);
    let responder = AvcanResponder::new(locations, forecasts, config.aprs_fi.api_key.clone());
    let handler = MessageHandler::new(Arc::new(responder));

    tracing::info!("Reading messages from stdin (CALLSIGN message)");
    console::run(
        &handler,
        tokio::io::BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}
