use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog item.
///
/// Ids are assigned in load order as decimal strings (`"0"`, `"1"`, ...), but
/// callers treat them as opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the item at `position` in load order
    pub fn from_position(position: usize) -> Self {
        Self(position.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_creation_and_conversion() {
        let id = ItemId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(ItemId::from("42".to_string()), id);
        assert_eq!("42".parse::<ItemId>().unwrap(), id);
    }

    #[test]
    fn test_from_position() {
        assert_eq!(ItemId::from_position(0).as_str(), "0");
        assert_eq!(ItemId::from_position(17).as_str(), "17");
    }

    #[test]
    fn test_hashing() {
        let mut set = HashSet::new();
        set.insert(ItemId::new("1"));
        assert!(set.contains(&ItemId::from("1")));
        assert!(!set.contains(&ItemId::from("2")));
    }

    #[test]
    fn test_serialization() {
        let id = ItemId::new("3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"3\"");

        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}
