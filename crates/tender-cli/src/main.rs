//! tender-cli - run the autonomous controller against real endpoints.
//!
//! Wires the HTTP adapters into a controller, starts the loop, and runs
//! until Ctrl-C; the final statistics are printed as JSON on exit.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tender_core::app::ControllerBuilder;
use tender_core::http::{
    client_with_timeout, GeminiClient, HttpCommandGateway, HttpStatusProvider, DEFAULT_TIMEOUT,
};

#[derive(Parser, Debug)]
#[command(name = "tender", about = "Autonomous greenhouse decision loop", version)]
struct Args {
    /// Backend base URL (serves the status and control endpoints).
    #[arg(long, default_value = "http://127.0.0.1:5000/api")]
    base_url: String,

    /// Gemini API key for the decision service.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Polling cadence in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    interval_ms: u64,

    /// Per-request deadline in seconds for all outbound calls.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Retained decision log entries.
    #[arg(long, default_value_t = 100)]
    max_log: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let client = client_with_timeout(Duration::from_secs(args.timeout_secs))
        .context("building HTTP client")?;

    let controller = ControllerBuilder::new()
        .status_provider(HttpStatusProvider::new(client.clone(), &args.base_url))
        .decision_service(GeminiClient::new(client.clone(), args.api_key)?)
        .command_gateway(HttpCommandGateway::new(client, &args.base_url))
        .poll_interval(Duration::from_millis(args.interval_ms))
        .max_log_size(args.max_log)
        .build()?;

    controller.start();
    tracing::info!(base_url = %args.base_url, interval_ms = args.interval_ms, "running");

    tokio::signal::ctrl_c()
        .await
        .context("waiting for Ctrl-C")?;
    tracing::info!("shutting down");
    controller.stop_and_join().await;

    let stats = controller.stats().await;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
