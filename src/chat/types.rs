use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Outgoing payload: exactly one key, `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Whatever JSON the server answered with. No schema is imposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatResponse(Value);

impl ChatResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `reply` string, for servers that follow the `{"reply": ...}` convention.
    pub fn reply(&self) -> Option<&str> {
        self.0.get("reply").and_then(Value::as_str)
    }

    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for ChatResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_serializes_single_key() {
        let request = ChatRequest::new("Привет!");
        let serialized = serde_json::to_value(&request).unwrap();

        assert_eq!(serialized, json!({ "message": "Привет!" }));
    }

    #[test]
    fn test_request_keeps_non_ascii_unescaped() {
        let serialized = serde_json::to_string(&ChatRequest::new("Привет 👋")).unwrap();
        assert_eq!(serialized, r#"{"message":"Привет 👋"}"#);
    }

    #[test]
    fn test_response_reply_accessor() {
        let response = ChatResponse::new(json!({ "reply": "hi" }));
        assert_eq!(response.reply(), Some("hi"));

        let response = ChatResponse::new(json!(["not", "an", "object"]));
        assert_eq!(response.reply(), None);

        let response = ChatResponse::new(json!({ "reply": 42 }));
        assert_eq!(response.reply(), None);
    }

    #[test]
    fn test_response_is_transparent() {
        let response: ChatResponse = serde_json::from_str(r#"{"reply":"hi"}"#).unwrap();
        assert_eq!(response.value(), &json!({ "reply": "hi" }));
        assert_eq!(response.to_string(), r#"{"reply":"hi"}"#);
    }
}
