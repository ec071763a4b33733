use serde_json::{Map, Value};

pub const GENERATED_TEXT_KEY: &str = "generated_text";
pub const MISSING_FIELD_WARNING: &str = "⚠️ No 'generated_text' in response.";
pub const UNEXPECTED_TYPE_WARNING: &str = "⚠️ Unexpected response type.";

/// A reply from a text-generation endpoint, classified by encoding.
///
/// Providers hand back either a structured record expected to carry a
/// `generated_text` field, a plain string (possibly JSON-encoded), or
/// something else entirely. Normalization to a displayable string happens in
/// [`GenerationReply::into_display_text`]; an oddly shaped reply becomes a
/// fixed warning string, never an error.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationReply {
    Record(Map<String, Value>),
    Text(String),
    Other(Value),
}

impl GenerationReply {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Record(map),
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }

    /// Classify a raw response body. A body that does not decode as JSON is
    /// a plain-string reply.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }

    /// Collapse the reply into the string shown to the user.
    ///
    /// String replies fall back to the raw text whenever they do not parse
    /// as a record carrying the field, wrong-shape JSON included.
    pub fn into_display_text(self) -> String {
        match self {
            Self::Record(map) => extract_generated_text(&map)
                .unwrap_or_else(|| MISSING_FIELD_WARNING.to_string()),
            Self::Text(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => extract_generated_text(&map).unwrap_or(text),
                _ => text,
            },
            Self::Other(_) => UNEXPECTED_TYPE_WARNING.to_string(),
        }
    }
}

fn extract_generated_text(map: &Map<String, Value>) -> Option<String> {
    map.get(GENERATED_TEXT_KEY).map(|value| {
        value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string())
    })
}
