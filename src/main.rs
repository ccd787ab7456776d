//! # TaalWiz Server
//!
//! Entry point: tracing, configuration, database, seeding, HTTP server.

use anyhow::Result;
use tracing::info;

use taalwiz_server::config::Settings;
use taalwiz_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    taalwiz_server::telemetry::init_tracing();

    info!("Starting TaalWiz server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
