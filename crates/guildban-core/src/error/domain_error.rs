//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CharacterGuid, GuildId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guild not found: {0}")]
    GuildNotFound(GuildId),

    #[error("Could not find account for character {0}")]
    AccountNotFound(CharacterGuid),

    #[error("Character {guid} is not banned from guild {guild_id}")]
    NotBanned {
        guild_id: GuildId,
        guid: CharacterGuid,
    },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Guild ban system is disabled")]
    Disabled,

    #[error("Not a member of this guild")]
    NotInGuild,

    #[error("Only the guild leader can ban members")]
    NotGuildLeader,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot ban yourself")]
    CannotBanSelf,

    #[error("Cannot ban the guild leader")]
    CannotBanLeader,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Host error: {0}")]
    HostError(String),
}

impl DomainError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GuildNotFound(_) => "UNKNOWN_GUILD",
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::NotBanned { .. } => "UNKNOWN_BAN",

            // Authorization
            Self::Disabled => "GUILD_BAN_DISABLED",
            Self::NotInGuild => "NOT_IN_GUILD",
            Self::NotGuildLeader => "NOT_GUILD_LEADER",

            // Business Rules
            Self::CannotBanSelf => "CANNOT_BAN_SELF",
            Self::CannotBanLeader => "CANNOT_BAN_LEADER",

            // Infrastructure
            Self::InvalidRecord(_) => "INVALID_RECORD",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::HostError(_) => "HOST_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GuildNotFound(_) | Self::AccountNotFound(_) | Self::NotBanned { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Disabled | Self::NotInGuild | Self::NotGuildLeader)
    }

    /// Check if this is a business rule violation
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::CannotBanSelf | Self::CannotBanLeader)
    }

    /// Check if this came from storage or the host rather than the caller
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecord(_) | Self::DatabaseError(_) | Self::HostError(_)
        )
    }
}
