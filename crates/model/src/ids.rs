use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one chat.
///
/// Ids are opaque strings minted by whichever collaborator creates the chat;
/// the stores compare them for equality and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub String);

impl ChatId {
    /// Creates a typed chat identifier from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Mints a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<&str> for ChatId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ChatId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for ChatId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_distinct() {
        assert_ne!(ChatId::random(), ChatId::random());
    }

    #[test]
    fn serializes_as_bare_string() {
        let encoded = serde_json::to_string(&ChatId::new("c1")).unwrap();
        assert_eq!(encoded, "\"c1\"");
    }
}
