use elasticsearch::Elasticsearch;

use crate::error::AppError;
use crate::es::indexer::index_message;
use crate::models::message::Message;

/// The corpus is bundled at build time. These bytes are both the source of
/// every indexed document and the literal payload of `GET /messages`
/// without a query.
pub const MESSAGES_JSON: &str = include_str!("../data/messages.json");

pub fn messages() -> Result<Vec<Message>, AppError> {
    Ok(serde_json::from_str(MESSAGES_JSON)?)
}

/// Indexes the whole corpus in order, stopping at the first failure. No
/// retry and no rollback of documents already written.
pub async fn load_and_index_all(es: &Elasticsearch, index_name: &str) -> Result<(), AppError> {
    for msg in &messages()? {
        index_message(es, index_name, msg).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_corpus_parses() {
        let msgs = messages().unwrap();
        assert!(!msgs.is_empty());
        assert!(msgs.iter().all(|m| !m.data.is_empty()));
    }

    #[test]
    fn message_ids_are_unique() {
        let msgs = messages().unwrap();
        let ids: HashSet<&str> = msgs.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), msgs.len());
    }
}
