//! Storage entity traits

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be used as collection keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for backends that require string keys
    fn as_str(&self) -> &str;
}

/// Trait for types that can be stored as documents
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this entity
    type Key: StorageKey;

    /// Returns the entity's key
    fn key(&self) -> &Self::Key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    struct TicketId(String);

    impl StorageKey for TicketId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct Ticket {
        id: TicketId,
        holder: String,
    }

    impl StorageEntity for Ticket {
        type Key = TicketId;

        fn key(&self) -> &Self::Key {
            &self.id
        }
    }

    #[test]
    fn test_key_as_str() {
        let key = TicketId("ticket-1".to_string());
        assert_eq!(key.as_str(), "ticket-1");
    }

    #[test]
    fn test_entity_exposes_key() {
        let ticket = Ticket {
            id: TicketId("ticket-1".to_string()),
            holder: "Ada".to_string(),
        };
        assert_eq!(ticket.key().as_str(), "ticket-1");
    }
}
