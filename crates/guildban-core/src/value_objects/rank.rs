//! Guild rank - position in the host's rank ladder
//!
//! Lower numbers are higher ranks: 0 is the guild master, 1 is usually officer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Guild member rank id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildRank(u8);

impl GuildRank {
    /// Guild master rank
    pub const LEADER: Self = Self(0);

    /// First rank below the guild master
    pub const OFFICER: Self = Self(1);

    #[inline]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    #[inline]
    pub const fn into_inner(self) -> u8 {
        self.0
    }

    /// Officer or above
    #[inline]
    pub const fn is_officer(&self) -> bool {
        self.0 <= Self::OFFICER.0
    }
}

impl fmt::Display for GuildRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
