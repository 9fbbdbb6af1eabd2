use std::sync::Arc;

mod config;
mod corpus;
mod error;
mod es;
mod http;
mod models;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("message_search_rs=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    tracing::info!("Starting message-search-rs...");

    // Load configuration (env vars override TOML)
    let config = config::AppConfig::load()?;
    tracing::info!("Elasticsearch URL: {}", config.elasticsearch.url);

    // Startup is fail-fast: any error below exits before the listener binds.
    let es_client = es::client::create_client(&config)?;

    es::client::create_index(&es_client, &config.elasticsearch.index_name).await?;

    corpus::load_and_index_all(&es_client, &config.elasticsearch.index_name).await?;
    tracing::info!("Corpus indexed, starting HTTP server");

    let state = http::handler::AppState {
        search: Arc::new(es::search::SearchClient::new(
            es_client,
            config.elasticsearch.index_name.clone(),
        )),
    };

    http::server::run(&config.server, state).await?;

    Ok(())
}
