//! GuildBan entity <-> model mapper

use chrono::{DateTime, Utc};
use guildban_core::entities::{GuildBan, GuildBanType};
use guildban_core::error::DomainError;
use guildban_core::value_objects::{AccountId, CharacterGuid, GuildId};

use crate::models::GuildBanModel;

fn invalid(e: impl ToString) -> DomainError {
    DomainError::InvalidRecord(e.to_string())
}

fn from_epoch(secs: i64) -> Result<DateTime<Utc>, DomainError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| invalid(format!("timestamp out of range: {secs}")))
}

/// Convert a guild_bans row to a GuildBan entity
impl TryFrom<GuildBanModel> for GuildBan {
    type Error = DomainError;

    fn try_from(model: GuildBanModel) -> Result<Self, Self::Error> {
        let expires_at = match model.unban_date {
            0 => None,
            secs => Some(from_epoch(secs)?),
        };

        Ok(GuildBan {
            guild_id: GuildId::try_from(model.guild_id).map_err(invalid)?,
            guid: CharacterGuid::try_from(model.guid).map_err(invalid)?,
            account_id: AccountId::try_from(model.account_id).map_err(invalid)?,
            banned_at: from_epoch(model.ban_date)?,
            expires_at,
            banned_by: model.banned_by,
            reason: model.ban_reason,
            ban_type: GuildBanType::try_from(model.ban_type).map_err(invalid)?,
        })
    }
}

/// Column values for writing a GuildBan
pub struct GuildBanInsert<'a> {
    pub guild_id: i64,
    pub guid: i64,
    pub account_id: i64,
    pub ban_date: i64,
    pub unban_date: i64,
    pub banned_by: &'a str,
    pub ban_reason: &'a str,
    pub ban_type: i16,
}

impl<'a> GuildBanInsert<'a> {
    pub fn new(ban: &'a GuildBan) -> Self {
        Self {
            guild_id: ban.guild_id.into(),
            guid: ban.guid.into(),
            account_id: ban.account_id.into(),
            ban_date: ban.banned_at.timestamp(),
            unban_date: ban.expires_at.map_or(0, |t| t.timestamp()),
            banned_by: &ban.banned_by,
            ban_reason: &ban.reason,
            ban_type: ban.ban_type.as_i16(),
        }
    }
}
