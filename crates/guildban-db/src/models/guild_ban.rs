//! Guild ban database model

use sqlx::FromRow;

/// Database model for the guild_bans table
///
/// Dates are epoch seconds; `unban_date = 0` marks a permanent ban.
#[derive(Debug, Clone, FromRow)]
pub struct GuildBanModel {
    pub guild_id: i64,
    pub guid: i64,
    pub account_id: i64,
    pub ban_date: i64,
    pub unban_date: i64,
    pub banned_by: String,
    pub ban_reason: String,
    pub ban_type: i16,
}
