use elasticsearch::{Elasticsearch, SearchParts};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::AppError;

pub struct SearchClient {
    es: Arc<Elasticsearch>,
    index_name: String,
}

/// What the engine reports back for one query. Logged server-side only;
/// the HTTP caller never sees it.
#[derive(Debug)]
pub struct SearchOutcome {
    pub total: u64,
    pub took_ms: u64,
    pub status: u16,
}

impl SearchClient {
    pub fn new(es: Arc<Elasticsearch>, index_name: String) -> Self {
        Self { es, index_name }
    }

    pub async fn search(&self, data: &str) -> Result<SearchOutcome, AppError> {
        let query = build_query(data);

        let response = self
            .es
            .search(SearchParts::Index(&[&self.index_name]))
            .body(query)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let details = response.text().await?;
            return Err(AppError::Search {
                status: status.as_u16(),
                details,
            });
        }

        let body: Value = response.json().await?;
        parse_response(&body, status.as_u16())
    }
}

fn build_query(data: &str) -> Value {
    json!({
        "query": {
            "match": { "data": data }
        },
        "track_total_hits": true
    })
}

fn parse_response(body: &Value, status: u16) -> Result<SearchOutcome, AppError> {
    let total = body["hits"]["total"]["value"]
        .as_u64()
        .ok_or_else(|| AppError::MalformedResponse("missing hits.total.value".into()))?;
    let took_ms = body["took"]
        .as_u64()
        .ok_or_else(|| AppError::MalformedResponse("missing took".into()))?;

    Ok(SearchOutcome {
        total,
        took_ms,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_is_a_match_on_data() {
        let query = build_query("hello world");
        assert_eq!(query["query"]["match"]["data"], "hello world");
    }

    #[test]
    fn parses_hit_count_and_took() {
        let body = json!({
            "took": 3,
            "hits": { "total": { "value": 2 }, "hits": [] }
        });
        let outcome = parse_response(&body, 200).unwrap();
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.took_ms, 3);
        assert_eq!(outcome.status, 200);
    }

    #[test]
    fn zero_hits_is_not_an_error() {
        let body = json!({
            "took": 1,
            "hits": { "total": { "value": 0 }, "hits": [] }
        });
        let outcome = parse_response(&body, 200).unwrap();
        assert_eq!(outcome.total, 0);
    }

    #[test]
    fn unexpected_shape_is_a_recoverable_error() {
        let body = json!({ "took": 1 });
        let err = parse_response(&body, 200).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
