//! # guildban-core
//!
//! Domain layer for guild bans: identifiers, the ban entity, domain errors,
//! player notices, and the ports (repository, host) the rest of the workspace
//! plugs into. This crate has zero dependencies on infrastructure.

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{GuildBan, GuildBanType, GuildBanTypeError};
pub use error::DomainError;
pub use events::GuildBanNotice;
pub use traits::{
    Clock, GuildBanRepository, GuildHost, GuildSummary, RepoResult, SystemClock,
};
pub use value_objects::{AccountId, CharacterGuid, GuildId, GuildRank};
