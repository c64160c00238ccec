//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers that cross the engine boundary.
//! These prevent accidental identifier confusion — you cannot pass a
//! `MessageId` where a `DealId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an escrow-backed deal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealId(pub Uuid);

/// Telegram message identifier for a published ad post.
///
/// Kept as an opaque string: the backend relays it verbatim and the engine
/// only ever checks presence, never arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl DealId {
    /// Generate a new random deal identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DealId {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deal:{}", self.0)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_ids_are_unique() {
        assert_ne!(DealId::new(), DealId::new());
    }

    #[test]
    fn test_deal_id_display_prefix() {
        let id = DealId::new();
        assert!(id.to_string().starts_with("deal:"));
    }

    #[test]
    fn test_message_id_display_is_verbatim() {
        let id = MessageId("99421".to_string());
        assert_eq!(id.to_string(), "99421");
        assert_eq!(id.as_str(), "99421");
    }

    #[test]
    fn test_deal_id_serde_roundtrip() {
        let id = DealId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: DealId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
