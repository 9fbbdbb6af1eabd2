use serde_json::{json, Value};

/// Settings and mappings for the message index: a single shard and one
/// text field named "data". Nothing else is ever stored.
pub fn index_settings_and_mappings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 0
        },
        "mappings": {
            "properties": {
                "data": { "type": "text" }
            }
        }
    })
}
