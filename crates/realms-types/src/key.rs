//! Composite entity keys.
//!
//! Every record table on chain is addressed by an ordered tuple of unsigned
//! integers: a realm entity plus a resource type for labor, a single trade id
//! for trade status, and so on. [`EntityKey`] holds that tuple and gives it a
//! canonical, reversible string form.
//!
//! # Encoding
//!
//! Each part is rendered as exactly 16 lowercase hex digits and the parts
//! are concatenated with no separator. Fixed width makes the encoding
//! order-sensitive and collision-free: `(1, 23)` and `(12, 3)` can never
//! produce the same string.

use serde::{Deserialize, Serialize};

use crate::ids::{EntityId, ResourceId};

/// Width in hex digits of one encoded key part.
const PART_WIDTH: usize = 16;

/// Errors produced when building or decoding an [`EntityKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// A key must have at least one part.
    #[error("entity key has no parts")]
    Empty,

    /// The encoded form is not a whole number of fixed-width parts.
    #[error("encoded key length {len} is not a multiple of 16")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },

    /// The encoded form contains a non-hex character.
    #[error("encoded key contains non-hex characters: {encoded}")]
    InvalidHex {
        /// The rejected string.
        encoded: String,
    },

    /// A raw client key entry could not be parsed as an unsigned integer.
    #[error("raw key part is not an unsigned integer: {part:?}")]
    InvalidPart {
        /// The offending entry.
        part: String,
    },
}

/// Ordered, non-empty tuple of `u64` parts addressing one record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityKey(Vec<u64>);

impl EntityKey {
    /// Key with a single part, e.g. an entity or trade id.
    pub fn single(id: impl Into<u64>) -> Self {
        Self(vec![id.into()])
    }

    /// Key with two parts, e.g. owner entity and resource type.
    pub fn pair(first: impl Into<u64>, second: impl Into<u64>) -> Self {
        Self(vec![first.into(), second.into()])
    }

    /// Key of the labor and resource tables: `(realm entity, resource type)`.
    pub fn realm_resource(realm_entity: EntityId, resource: ResourceId) -> Self {
        Self::pair(realm_entity, resource)
    }

    /// Build a key from an arbitrary list of parts.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Empty`] if `parts` is empty.
    pub fn from_parts(parts: &[u64]) -> Result<Self, KeyError> {
        if parts.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(parts.to_vec()))
    }

    /// Clean and parse the raw key strings delivered with an entity update.
    ///
    /// Empty entries are padding and are dropped. Remaining entries are
    /// parsed as hex when prefixed with `0x`, otherwise as decimal.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidPart`] for an unparseable entry and
    /// [`KeyError::Empty`] if nothing is left after cleaning.
    pub fn from_raw_keys<S: AsRef<str>>(raw: &[S]) -> Result<Self, KeyError> {
        let parts = raw
            .iter()
            .map(AsRef::as_ref)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_raw_part)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_parts(&parts)
    }

    /// The key's parts in order.
    pub fn parts(&self) -> &[u64] {
        &self.0
    }

    /// The sole part of a single-part key, or `None` for composite keys.
    pub fn single_part(&self) -> Option<u64> {
        match self.0.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Canonical fixed-width hex encoding.
    pub fn encode(&self) -> String {
        self.0.iter().map(|part| format!("{part:016x}")).collect()
    }

    /// Inverse of [`EntityKey::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Empty`], [`KeyError::InvalidLength`], or
    /// [`KeyError::InvalidHex`] when `encoded` is not a canonical key.
    pub fn decode(encoded: &str) -> Result<Self, KeyError> {
        if encoded.is_empty() {
            return Err(KeyError::Empty);
        }
        if encoded.len() % PART_WIDTH != 0 {
            return Err(KeyError::InvalidLength { len: encoded.len() });
        }
        if !encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(KeyError::InvalidHex {
                encoded: encoded.to_owned(),
            });
        }

        let parts = encoded
            .as_bytes()
            .chunks(PART_WIDTH)
            .map(|chunk| {
                std::str::from_utf8(chunk)
                    .ok()
                    .and_then(|digits| u64::from_str_radix(digits, 16).ok())
                    .ok_or_else(|| KeyError::InvalidHex {
                        encoded: encoded.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(parts))
    }
}

fn parse_raw_part(entry: &str) -> Result<u64, KeyError> {
    let parsed = match entry
        .strip_prefix("0x")
        .or_else(|| entry.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => entry.parse::<u64>(),
    };
    parsed.ok().ok_or_else(|| KeyError::InvalidPart {
        part: entry.to_owned(),
    })
}

impl core::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl TryFrom<String> for EntityKey {
    type Error = KeyError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::decode(&encoded)
    }
}

impl From<EntityKey> for String {
    fn from(key: EntityKey) -> Self {
        key.encode()
    }
}
