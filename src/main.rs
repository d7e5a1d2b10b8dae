// src/main.rs
// Research Assistant - HTTP relay from text-processing requests to Gemini

use anyhow::{Result, bail};
use clap::Parser;
use research_assistant::config::{EnvConfig, ServerConfig};
use research_assistant::web::{self, state::AppState};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "research-assistant")]
#[command(about = "Summarize, suggest and paraphrase text through the Gemini API")]
#[command(version)]
struct Cli {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RESEARCH_LOG_LEVEL", default_value = "info")]
    log_level: Level,
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from current directory
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let env = EnvConfig::load();
    let validation = env.validate();
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.is_valid() {
        error!(errors = %validation.error_summary(), "Configuration is invalid");
        bail!("invalid configuration: {}", validation.error_summary());
    }

    let server = ServerConfig {
        host: cli.host,
        port: cli.port,
    };

    info!(
        api_url = %env.gemini.api_url,
        timeout_secs = env.gemini.request_timeout.as_secs(),
        "Gemini upstream configured"
    );

    let state = AppState::from_gemini_config(env.gemini)?;
    let app = web::create_router(state);

    let bind_address = server.addr();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Research assistant listening on http://{}/api/research", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}
