//! Type-safe identifier wrappers around the chain's unsigned integer ids.
//!
//! On-chain identifiers are plain felts that fit in a `u64` for every table
//! the engine reads. Wrapping them keeps a realm id from being passed where
//! an entity id is expected; the two are different namespaces on chain.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
            Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u64);

        impl $name {
            /// Wrap a raw chain identifier.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Return the inner raw value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of any entity in the world (realm entity, caravan, raider
    /// group, trade, chest).
    EntityId
}

define_id! {
    /// The token id of a realm. Distinct from the realm's [`EntityId`].
    RealmId
}

/// Identifier of a resource type.
///
/// Resource ids fit in a byte because realms pack their resource list
/// eight bits per entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct ResourceId(pub u8);

impl ResourceId {
    /// Wheat, the first of the two food resources every realm produces.
    pub const WHEAT: Self = Self(254);

    /// Fish, the second food resource.
    pub const FISH: Self = Self(255);

    /// Return the inner raw value.
    pub const fn into_inner(self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for ResourceId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<ResourceId> for u64 {
    fn from(id: ResourceId) -> Self {
        Self::from(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&EntityId::new(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));

        let restored: Result<RealmId, _> = serde_json::from_str("7");
        assert_eq!(restored.ok(), Some(RealmId::new(7)));
    }

    #[test]
    fn resource_id_widens_to_u64() {
        assert_eq!(u64::from(ResourceId::FISH), 255);
        assert_eq!(ResourceId::WHEAT.to_string(), "254");
    }
}
