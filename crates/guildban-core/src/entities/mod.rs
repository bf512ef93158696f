//! Domain entities - core business objects

mod guild_ban;

pub use guild_ban::{GuildBan, GuildBanType, GuildBanTypeError};
