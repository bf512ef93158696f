//! Host identifiers - 32-bit keys handed to us by the game server
//!
//! The host addresses guilds, characters and accounts by plain `u32` counters.
//! Each gets its own newtype so a character guid can never be passed where an
//! account id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when a stored integer does not fit a 32-bit host identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} out of range: {value}")]
pub struct IdRangeError {
    pub kind: &'static str,
    pub value: i64,
}

macro_rules! host_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create from the raw host counter
            #[inline]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw host counter
            #[inline]
            pub const fn into_inner(self) -> u32 {
                self.0
            }

            /// Check if the id is zero (unset)
            #[inline]
            pub const fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                i64::from(id.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = IdRangeError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                u32::try_from(value)
                    .map(Self)
                    .map_err(|_| IdRangeError { kind: $kind, value })
            }
        }
    };
}

host_id!(
    /// Guild identifier
    GuildId,
    "guild id"
);

host_id!(
    /// Character (player) guid counter
    CharacterGuid,
    "character guid"
);

host_id!(
    /// Account identifier; zero means the owning account is unknown
    AccountId,
    "account id"
);

impl AccountId {
    /// The "unknown account" marker
    pub const UNKNOWN: Self = Self(0);

    /// Check whether this refers to a real account
    #[inline]
    pub const fn is_known(&self) -> bool {
        self.0 != 0
    }
}
