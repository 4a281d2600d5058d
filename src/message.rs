//! Parsed chat message type.
//!
//! [`ChatMessage`] is what the splitter in [`crate::parser`] produces for every
//! date-prefixed segment that carries a sender. It lives for a single run.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fila::ChatMessage;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 3, 14)
//!     .unwrap()
//!     .and_hms_opt(12, 5, 0)
//!     .unwrap();
//! let msg = ChatMessage::new(ts, "Ana", "fila: 3,5 pessoas");
//!
//! assert_eq!(msg.sender(), "Ana");
//! assert_eq!(msg.body(), "fila: 3,5 pessoas");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single message from a chat export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local date and time from the boundary prefix |
/// | `sender` | `String` | Text before the first colon |
/// | `body` | `String` | Text after the first colon, may span lines |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// When the message was sent, in the exporting phone's local time.
    pub timestamp: NaiveDateTime,

    /// Display name or phone number of the author.
    pub sender: String,

    /// Message text.
    pub body: String,
}

impl ChatMessage {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, 14)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        let msg = ChatMessage::new(ts(), "Bia", "2 pessoas");
        assert_eq!(msg.timestamp(), ts());
        assert_eq!(msg.sender(), "Bia");
        assert_eq!(msg.body(), "2 pessoas");
    }

    #[test]
    fn test_serde_roundtrip_keeps_timestamp() {
        let msg = ChatMessage::new(ts(), "Bia", "vazia");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("2023-03-14T08:30:00"));
        let parsed: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
