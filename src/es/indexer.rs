use elasticsearch::params::Refresh;
use elasticsearch::{Elasticsearch, IndexParts};

use crate::error::AppError;
use crate::models::message::{Message, MessageDoc};

/// Indexes one message under its id and forces a refresh, so the document
/// is queryable by the time this returns.
pub async fn index_message(
    es: &Elasticsearch,
    index_name: &str,
    msg: &Message,
) -> Result<(), AppError> {
    let response = es
        .index(IndexParts::IndexId(index_name, &msg.id))
        .body(MessageDoc::from(msg))
        .refresh(Refresh::True)
        .send()
        .await?;

    let status = response.status_code();
    if !status.is_success() {
        let details = response.text().await?;
        return Err(AppError::DocumentIndex {
            id: msg.id.clone(),
            status: status.as_u16(),
            details,
        });
    }

    tracing::info!("message {} has been indexed", msg.id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use elasticsearch::IndexParts;

    #[test]
    fn document_url_carries_the_message_id_verbatim() {
        let parts = IndexParts::IndexId("message_data", "1");
        assert_eq!(parts.url(), "/message_data/_doc/1");
    }
}
