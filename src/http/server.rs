use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handler::{self, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::banner))
        .route("/messages", get(handler::search_messages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.listen_addr, config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on http://{addr}");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
