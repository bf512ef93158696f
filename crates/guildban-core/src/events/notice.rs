//! Guild ban notices - messages the host delivers to players
//!
//! The host owns chat formatting; these carry only the facts it needs.

use serde::{Deserialize, Serialize};

use crate::entities::GuildBanType;
use crate::value_objects::{CharacterGuid, GuildId};

/// Notice delivered to a single player through the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuildBanNotice {
    /// Sent to a player who was just banned
    Banned {
        guild_id: GuildId,
        guild_name: String,
        ban_type: GuildBanType,
        reason: String,
    },

    /// Sent to a banned player after the deferred kick removed them again
    JoinRejected { guild_id: GuildId },

    /// Sent to the guild leader when a banned player tried to join
    BannedJoinAttempt {
        guild_id: GuildId,
        guid: CharacterGuid,
        player_name: String,
    },
}

impl GuildBanNotice {
    /// Get the notice type name
    pub fn notice_type(&self) -> &'static str {
        match self {
            Self::Banned { .. } => "BANNED",
            Self::JoinRejected { .. } => "JOIN_REJECTED",
            Self::BannedJoinAttempt { .. } => "BANNED_JOIN_ATTEMPT",
        }
    }

    /// Guild the notice is about
    pub fn guild_id(&self) -> GuildId {
        match self {
            Self::Banned { guild_id, .. }
            | Self::JoinRejected { guild_id }
            | Self::BannedJoinAttempt { guild_id, .. } => *guild_id,
        }
    }
}
