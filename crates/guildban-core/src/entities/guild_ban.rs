//! Guild ban entity - one banned identity in one guild

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{AccountId, CharacterGuid, GuildId};

/// Scope of a guild ban
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuildBanType {
    /// Only the named character is barred
    Character,
    /// Every character on the owning account is barred
    Account,
}

impl GuildBanType {
    /// Stored integer representation
    #[inline]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Character => 0,
            Self::Account => 1,
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Account => "Account",
        }
    }
}

/// Error when a stored ban type is neither character nor account
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown guild ban type: {0}")]
pub struct GuildBanTypeError(pub i16);

impl TryFrom<i16> for GuildBanType {
    type Error = GuildBanTypeError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Character),
            1 => Ok(Self::Account),
            other => Err(GuildBanTypeError(other)),
        }
    }
}

/// Guild ban entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildBan {
    pub guild_id: GuildId,
    pub guid: CharacterGuid,
    pub account_id: AccountId,
    pub banned_at: DateTime<Utc>,
    /// `None` for a permanent ban
    pub expires_at: Option<DateTime<Utc>>,
    pub banned_by: String,
    pub reason: String,
    pub ban_type: GuildBanType,
}

impl GuildBan {
    /// Create a permanent ban issued at `banned_at`
    pub fn new(
        guild_id: GuildId,
        guid: CharacterGuid,
        account_id: AccountId,
        ban_type: GuildBanType,
        banned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            guild_id,
            guid,
            account_id,
            banned_at: banned_at.trunc_subsecs(0),
            expires_at: None,
            banned_by: String::new(),
            reason: String::new(),
            ban_type,
        }
    }

    /// Set the issuer's display name
    pub fn with_banned_by(mut self, banned_by: impl Into<String>) -> Self {
        self.banned_by = banned_by.into();
        self
    }

    /// Set the ban reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Give the ban a lifetime; zero keeps it permanent
    pub fn with_duration(mut self, duration_secs: u32) -> Self {
        self.expires_at = (duration_secs > 0)
            .then(|| self.banned_at + Duration::seconds(i64::from(duration_secs)));
        self
    }

    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.expires_at.is_none()
    }

    /// Check if the ban had lapsed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    #[inline]
    pub fn is_account_ban(&self) -> bool {
        self.ban_type == GuildBanType::Account
    }

    /// Whether this ban also bars the owning account
    #[inline]
    pub fn bars_account(&self) -> bool {
        self.is_account_ban() && self.account_id.is_known()
    }
}
