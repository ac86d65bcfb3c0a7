use serde_json::{Map, Value};

/// Replacement written over sensitive values.
pub const MASK: &str = "********";

/// Key fragments that mark a value as sensitive, matched case-insensitively
/// as substrings of the key name.
const SENSITIVE_KEYS: [&str; 9] = [
    "password",
    "secret",
    "token",
    "authorization",
    "cookie",
    "api_key",
    "key",
    "private",
    "credential",
];

/// Check if a key names sensitive information.
pub fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_KEYS.iter().any(|fragment| key.contains(fragment))
}

/// Mask sensitive values in an errors map before it reaches a log sink.
///
/// Nested objects are masked recursively and arrays are traversed for
/// objects inside them; only leaf values under a sensitive key are replaced.
/// Key order is preserved.
pub fn mask_sensitive_data(data: &Map<String, Value>) -> Map<String, Value> {
    let mut masked = Map::new();

    for (key, value) in data {
        let value = match value {
            Value::Object(nested) => Value::Object(mask_sensitive_data(nested)),
            Value::Array(items) => Value::Array(items.iter().map(mask_array_item).collect()),
            _ if is_sensitive_key(key) => Value::String(MASK.to_string()),
            leaf => leaf.clone(),
        };
        masked.insert(key.clone(), value);
    }

    masked
}

fn mask_array_item(item: &Value) -> Value {
    match item {
        Value::Object(nested) => Value::Object(mask_sensitive_data(nested)),
        Value::Array(items) => Value::Array(items.iter().map(mask_array_item).collect()),
        leaf => leaf.clone(),
    }
}
