//! Request DTOs handed over by the host's command layer

use guildban_core::{AccountId, CharacterGuid, GuildId};
use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_BAN_REASON: &str = "No reason specified";

/// The player issuing a ban command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanActor {
    pub guid: CharacterGuid,
    pub name: String,
    /// Guild the player currently belongs to
    pub guild_id: Option<GuildId>,
}

/// Ban options
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BanRequest {
    #[validate(length(max = 255, message = "Reason must be at most 255 characters"))]
    pub reason: Option<String>,

    /// Ban lifetime in seconds, 0 for permanent
    #[serde(default)]
    pub duration_secs: u32,
}

impl BanRequest {
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            duration_secs: 0,
        }
    }

    /// Reason to record, falling back to the default text
    pub fn reason(&self) -> &str {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_BAN_REASON)
    }
}

/// A player the host just added to a guild roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoiningPlayer {
    pub guid: CharacterGuid,
    pub account_id: AccountId,
    pub name: String,
}
