//! Value objects - immutable types that represent domain concepts

mod ids;
mod rank;

pub use ids::{AccountId, CharacterGuid, GuildId, IdRangeError};
pub use rank::GuildRank;
