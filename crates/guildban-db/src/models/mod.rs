//! Database models - SQLx-compatible structs for PostgreSQL tables

mod guild_ban;

pub use guild_ban::GuildBanModel;
