//! Identifier newtypes for the order domain.

use serde::{Deserialize, Serialize};

/// Unique identifier for an order request.
///
/// Orders are never stored as entities; the ID only tags log entries
/// produced while the saga runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an order ID from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user ID from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Stock keeping unit key for an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Creates a SKU from a string.
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    /// Returns the SKU as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Sku {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Sku {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_displays_raw_value() {
        assert_eq!(OrderId::new(42).to_string(), "42");
    }

    #[test]
    fn user_id_preserves_value() {
        let id = UserId::from(7);
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn sku_from_str_and_back() {
        let sku = Sku::from("ITEM001");
        assert_eq!(sku.as_str(), "ITEM001");
        assert_eq!(sku.to_string(), "ITEM001");
    }

    #[test]
    fn ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&UserId::new(1)).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&Sku::new("ITEM001")).unwrap(),
            "\"ITEM001\""
        );
    }
}
