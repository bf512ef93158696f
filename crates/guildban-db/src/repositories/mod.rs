//! Repository implementations
//!
//! Implementations of the `GuildBanRepository` port defined in guildban-core.

mod error;
mod guild_ban;
mod memory;

pub use guild_ban::PgGuildBanRepository;
pub use memory::MemoryGuildBanRepository;
