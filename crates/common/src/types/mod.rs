use serde::{Deserialize, Serialize};

/// Plain `{"message": "..."}` body used by liveness and delete confirmations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_serializes_as_single_field() {
        let m = StatusMessage::new("Product service is running");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Product service is running"}));
    }
}
