use anyhow::Context;
use clap::Parser;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

use event_manager::shared::infrastructure::console;
use event_manager::shell::config::Config;
use event_manager::shell::state::AppState;
use event_manager::shell::{cli, http, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.log_filter());

    let state = AppState::in_memory();
    let app = http::router(state.clone()).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind REST API on {}", config.addr))?;
    tracing::info!("REST API: http://{}/events", config.addr);

    if config.headless {
        axum::serve(listener, app)
            .with_graceful_shutdown(ctrl_c())
            .await?;
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    let mut console = console::stdio();
    tokio::select! {
        served = &mut server => {
            served.context("REST API task failed")??;
            return Ok(());
        }
        session = cli::run(&state, &mut console) => session.context("CLI session failed")?,
    }

    let _ = shutdown_tx.send(());
    server.await.context("REST API task failed")??;
    tracing::info!("shut down");
    Ok(())
}

async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
