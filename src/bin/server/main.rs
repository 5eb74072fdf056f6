use std::net::SocketAddr;

use babbage::server::{build_router, AppState};
use clap::{arg, crate_version, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("babbage-server")
        .version(crate_version!())
        .about("HTTP host for the babbage plugin pipeline")
        .arg(
            arg!(--listen <ADDR> "Address to listen on")
                .default_value("127.0.0.1:8080"),
        )
        .get_matches();

    init_telemetry();

    let state = AppState::new();
    info!(plugins = state.registry.len(), "registry initialized");

    let router = build_router(state);

    let addr: SocketAddr = matches
        .get_one::<String>("listen")
        .map(String::as_str)
        .unwrap_or("127.0.0.1:8080")
        .parse()?;
    info!(%addr, "starting babbage-server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
