//! Configuration structs

mod guild_ban_config;

pub use guild_ban_config::{
    ConfigError, GuildBanConfig, ALLOW_OFFICER_BAN_KEY, ENABLE_KEY, NOTIFY_ON_BANNED_JOIN_KEY,
};
