use std::path::PathBuf;

use accounts_adapters::{MongoAccountStore, Settings};
use accounts_service::{AccountsService, shutdown, telemetry::init_tracing};
use clap::Parser;
use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use tokio::net::TcpListener;

/// Account management HTTP service backed by MongoDB.
#[derive(Debug, Parser)]
#[command(name = "accounts-service", version)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long = "config-path", default_value = "config/config.yml")]
    config_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    tracing::info!(path = %cli.config_path.display(), "reading configuration");
    let settings = Settings::load(&cli.config_path)?;

    let client =
        MongoAccountStore::connect(settings.mongo.url.expose_secret(), &settings.mongo.database)
            .await?;
    let store = MongoAccountStore::new(
        &client,
        &settings.mongo.database,
        &settings.mongo.collection,
    );
    store.ensure_indexes().await?;

    let listener = TcpListener::bind(("0.0.0.0", settings.http.port)).await?;

    AccountsService::new(store)
        .with_timeouts(
            settings.http.read_timeout(),
            settings.http.write_timeout(),
        )
        .run(
            listener,
            settings.http.max_header_bytes(),
            shutdown::signal(),
        )
        .await?;

    client.shutdown().await;
    tracing::info!("MongoDB client closed");

    Ok(())
}
