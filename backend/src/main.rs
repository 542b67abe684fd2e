use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_admin::config::Settings;
use catalog_admin::infrastructure::driving::JsonLinesHandler;
use catalog_admin::infrastructure::{AppState, Gateways};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;

    // Logs go to stderr; stdout carries protocol responses
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Catalog admin starting");

    let state = AppState::new(Gateways::from_settings(&settings));
    let handler = JsonLinesHandler::new(state);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    handler.run(stdin, tokio::io::stdout()).await?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
