use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;

mod app;
mod config;
mod error;
mod middleware;
mod routes;
mod state;
mod telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let args = config::Args::parse();
    let cfg = config::load_config(args.config.as_deref())?;

    telemetry::init(&cfg.telemetry, &cfg.log_level)?;

    let app_state = state::AppState::new(cfg.clone());

    // Startup sweep: generate docs for every registered integration before
    // taking traffic. Per-key failures are logged inside the sweep.
    info!("generating credential api docs for all registered integrations");
    app_state.generator.generate_all(&app_state.plugins);

    let router = app::build_router(app_state);

    let addr: SocketAddr = cfg.listen_addr.parse()?;
    info!(%addr, "starting credoc-api");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
