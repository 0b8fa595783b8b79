mod cli;
mod config;
mod errors;
mod llm_client;
mod quotes;
mod routes;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::quotes::store::QuoteStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so `generate` leaves stdout to the quote itself
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Generate {
            kind,
            theme,
            no_tags,
        } => cli::run_generate(&config, kind, &theme, !no_tags).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Quotes API v{}", env!("CARGO_PKG_VERSION"));

    // Loaded once; restart the server after editing the quote file
    let store = QuoteStore::load(&config.quotes_path)
        .with_context(|| format!("Failed to load {}", config.quotes_path.display()))?;
    if store.is_empty() {
        tracing::warn!("No famous quotes loaded; /quote/famous will return a placeholder");
    }

    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /quote/original will fail");
    }

    let state = AppState {
        store: Arc::new(store),
        writer: Arc::new(llm),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
