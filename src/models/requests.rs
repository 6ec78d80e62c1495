//! Request DTOs for the deck server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating or updating a card
/// (POST /api/decks/:deck_id/cards, PUT /api/decks/:deck_id/cards/:card_id)
#[derive(Debug, Clone, Deserialize)]
pub struct CardPayload {
    /// The card's spoken/displayed text
    pub text: String,
    /// URL of the card's image
    #[serde(default)]
    pub image_url: String,
}

impl CardPayload {
    /// Validates the payload.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.text.trim().is_empty() {
            return Some("Card text cannot be empty".to_string());
        }
        if self.text.len() > 512 {
            return Some("Card text exceeds maximum length of 512 characters".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_payload_deserialize() {
        let json = r#"{"text": "hello", "image_url": "/img/hello.png"}"#;
        let payload: CardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text, "hello");
        assert_eq!(payload.image_url, "/img/hello.png");
    }

    #[test]
    fn test_card_payload_image_url_defaults_empty() {
        let json = r#"{"text": "hello"}"#;
        let payload: CardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.image_url, "");
    }

    #[test]
    fn test_validate_empty_text() {
        let payload = CardPayload { text: "  ".to_string(), image_url: String::new() };
        assert!(payload.validate().is_some());
    }

    #[test]
    fn test_validate_valid_payload() {
        let payload = CardPayload { text: "yes".to_string(), image_url: String::new() };
        assert!(payload.validate().is_none());
    }
}
