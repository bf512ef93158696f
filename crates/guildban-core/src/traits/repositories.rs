//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::GuildBan;
use crate::error::DomainError;
use crate::value_objects::{CharacterGuid, GuildId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guild Ban Repository
// ============================================================================

/// Persistent store for guild bans, keyed by `(guild_id, guid)`
#[async_trait]
pub trait GuildBanRepository: Send + Sync {
    /// Load every stored ban, expired ones included
    async fn find_all(&self) -> RepoResult<Vec<GuildBan>>;

    /// Insert a ban, replacing any stored ban with the same key
    async fn upsert(&self, ban: &GuildBan) -> RepoResult<()>;

    /// Remove the ban stored under the key; a missing row is not an error
    async fn delete(&self, guild_id: GuildId, guid: CharacterGuid) -> RepoResult<()>;
}
