use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use elasticsearch::indices::IndicesCreateParts;
use elasticsearch::Elasticsearch;
use std::sync::Arc;
use url::Url;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::es::mapping::index_settings_and_mappings;

pub fn create_client(config: &AppConfig) -> anyhow::Result<Arc<Elasticsearch>> {
    let url = Url::parse(&config.elasticsearch.url)?;
    let pool = SingleNodeConnectionPool::new(url);
    let transport = TransportBuilder::new(pool).disable_proxy().build()?;

    Ok(Arc::new(Elasticsearch::new(transport)))
}

/// Creates the message index. Deliberately not idempotent: a second run
/// against the same engine fails with `resource_already_exists_exception`
/// and takes the whole startup down with it.
pub async fn create_index(client: &Elasticsearch, index_name: &str) -> Result<(), AppError> {
    let response = client
        .indices()
        .create(IndicesCreateParts::Index(index_name))
        .body(index_settings_and_mappings())
        .send()
        .await?;

    let status = response.status_code();
    if !status.is_success() {
        let details = response.text().await?;
        return Err(AppError::IndexCreation {
            status: status.as_u16(),
            details,
        });
    }

    tracing::info!("Created index '{index_name}'");

    Ok(())
}
