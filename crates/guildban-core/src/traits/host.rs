//! Host port - the game server's guild, character and session APIs
//!
//! The game server owns guilds, rosters and sessions. The ban layer only asks
//! questions and requests removals through this trait.

use async_trait::async_trait;

use crate::events::GuildBanNotice;
use crate::value_objects::{AccountId, CharacterGuid, GuildId, GuildRank};

use super::repositories::RepoResult;

/// What the ban layer needs to know about a guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: GuildId,
    pub name: String,
    pub leader: CharacterGuid,
}

impl GuildSummary {
    /// Check if a character leads this guild
    #[inline]
    pub fn is_leader(&self, guid: CharacterGuid) -> bool {
        self.leader == guid
    }
}

#[async_trait]
pub trait GuildHost: Send + Sync {
    /// Find a guild by ID
    async fn find_guild(&self, guild_id: GuildId) -> RepoResult<Option<GuildSummary>>;

    /// Rank of a character in a guild, `None` if not a member
    async fn member_rank(
        &self,
        guild_id: GuildId,
        guid: CharacterGuid,
    ) -> RepoResult<Option<GuildRank>>;

    /// Remove a character from a guild roster
    async fn remove_member(&self, guild_id: GuildId, guid: CharacterGuid) -> RepoResult<()>;

    /// Account owning a character, online or offline
    async fn account_of(&self, guid: CharacterGuid) -> RepoResult<Option<AccountId>>;

    /// All characters on an account
    async fn account_characters(&self, account_id: AccountId) -> RepoResult<Vec<CharacterGuid>>;

    /// Check if a character is logged in
    async fn is_online(&self, guid: CharacterGuid) -> RepoResult<bool>;

    /// Deliver a notice to a logged-in character
    async fn notify(&self, recipient: CharacterGuid, notice: GuildBanNotice) -> RepoResult<()>;
}
