mod cors;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use cors::middleware::cors_middleware;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    let app_state = cors::build_state()?;

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/orders", post(routes::create_order))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    info!("monostore demo listening on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
