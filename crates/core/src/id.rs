//! Strongly-typed identifiers for server-owned entities.
//!
//! The backend services assign numeric identities; wrapping them keeps an
//! item id from being handed to a warehouse endpoint and vice versa.

use core::num::ParseIntError;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

/// Identifier of a warehouse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(i64);

/// Identifier of a replenishment request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(i64);

/// Identifier of a user account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

/// Identifier of an item category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

/// Identifier of a supplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(i64);

/// Identifier of an audit trail event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditEventId(i64);

macro_rules! impl_i64_newtype {
    ($t:ty) => {
        impl $t {
            /// Wrap a server-assigned identifier.
            ///
            /// The client never mints these; they always originate from a
            /// service response or a caller that already holds one.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(i64::from_str(s)?))
            }
        }
    };
}

impl_i64_newtype!(ItemId);
impl_i64_newtype!(WarehouseId);
impl_i64_newtype!(RequestId);
impl_i64_newtype!(UserId);
impl_i64_newtype!(CategoryId);
impl_i64_newtype!(SupplierId);
impl_i64_newtype!(AuditEventId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_raw_value() {
        assert_eq!(ItemId::new(42).to_string(), "42");
        assert_eq!(RequestId::new(-1).to_string(), "-1");
    }

    #[test]
    fn parses_from_path_segment() {
        let id: WarehouseId = "7".parse().unwrap();
        assert_eq!(id, WarehouseId::new(7));
        assert!("seven".parse::<WarehouseId>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ItemId::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: ItemId = serde_json::from_str("12").unwrap();
        assert_eq!(back, ItemId::new(12));
    }
}
