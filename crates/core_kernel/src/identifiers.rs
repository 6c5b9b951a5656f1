//! Order identifiers
//!
//! Orders are keyed by time-ordered (v7) UUIDs so that storage indexes stay
//! roughly append-only. The display form carries an `ORD-` prefix; parsing
//! accepts it with or without.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const ORDER_PREFIX: &str = "ORD-";

/// Identifier of a registered quote order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new time-ordered identifier
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ORDER_PREFIX, self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix(ORDER_PREFIX).unwrap_or(s);
        Uuid::parse_str(bare).map(Self)
    }
}

impl From<Uuid> for OrderId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<OrderId> for Uuid {
    fn from(id: OrderId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_prefix() {
        assert!(OrderId::new().to_string().starts_with("ORD-"));
    }

    #[test]
    fn test_parse_bare_uuid() {
        let id = OrderId::new();
        let bare: OrderId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, bare);
    }
}
