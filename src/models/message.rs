use serde::{Deserialize, Serialize};

/// One record of the embedded corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub data: String,
}

/// The subset of a [`Message`] persisted into the index. The message id
/// becomes the document id, so only the text travels in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDoc {
    pub data: String,
}

impl From<&Message> for MessageDoc {
    fn from(msg: &Message) -> Self {
        Self {
            data: msg.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indexed_body_is_the_text_and_nothing_else() {
        let msg = Message {
            id: "1".into(),
            data: "hello".into(),
        };
        let body = serde_json::to_value(MessageDoc::from(&msg)).unwrap();
        assert_eq!(body, json!({ "data": "hello" }));
    }
}
