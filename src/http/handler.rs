use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::corpus;
use crate::es::search::SearchClient;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchClient>,
}

const BANNER: &str = r#"
          ##         .
    ## ## ##        ==
 ## ## ## ## ##    ===
/"""""""""""""""""\___/ ===
{                       /  ===-
\______ O           __/
 \    \         __/
  \____\_______/


message-search-rs is up!

"#;

pub async fn banner() -> &'static str {
    BANNER
}

/// First `data` value wins when the key repeats.
fn first_data_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "data")
        .map(|(_, value)| value.into_owned())
}

/// Without `data`, dumps the embedded corpus verbatim. With `data`, runs
/// the search and reports only success or failure; hits stay server-side.
pub async fn search_messages(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let data = query.as_deref().and_then(first_data_param).unwrap_or_default();

    if data.is_empty() {
        tracing::info!("returning all messages");
        return (StatusCode::OK, corpus::MESSAGES_JSON).into_response();
    }

    match state.search.search(&data).await {
        Ok(outcome) => {
            tracing::info!(
                "[{}] {} hits; took: {}ms",
                outcome.status,
                outcome.total,
                outcome.took_ms
            );
            StatusCode::OK.into_response()
        }
        Err(e) => {
            tracing::error!("search messages: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
