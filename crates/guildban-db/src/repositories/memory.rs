//! In-memory implementation of GuildBanRepository
//!
//! Keeps rows in insertion order under a mutex. Used by tests and by hosts
//! that run without a database.

use async_trait::async_trait;
use parking_lot::Mutex;

use guildban_core::entities::GuildBan;
use guildban_core::traits::{GuildBanRepository, RepoResult};
use guildban_core::value_objects::{CharacterGuid, GuildId};

#[derive(Debug, Default)]
pub struct MemoryGuildBanRepository {
    rows: Mutex<Vec<GuildBan>>,
}

impl MemoryGuildBanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing rows, as if loaded from an earlier run
    pub fn with_bans(bans: impl IntoIterator<Item = GuildBan>) -> Self {
        Self {
            rows: Mutex::new(bans.into_iter().collect()),
        }
    }

    /// Copy of every stored row
    pub fn snapshot(&self) -> Vec<GuildBan> {
        self.rows.lock().clone()
    }

    /// Stored row for a key
    pub fn get(&self, guild_id: GuildId, guid: CharacterGuid) -> Option<GuildBan> {
        self.rows
            .lock()
            .iter()
            .find(|row| row.guild_id == guild_id && row.guid == guid)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

#[async_trait]
impl GuildBanRepository for MemoryGuildBanRepository {
    async fn find_all(&self) -> RepoResult<Vec<GuildBan>> {
        Ok(self.snapshot())
    }

    async fn upsert(&self, ban: &GuildBan) -> RepoResult<()> {
        let mut rows = self.rows.lock();
        match rows
            .iter_mut()
            .find(|row| row.guild_id == ban.guild_id && row.guid == ban.guid)
        {
            Some(row) => *row = ban.clone(),
            None => rows.push(ban.clone()),
        }
        Ok(())
    }

    async fn delete(&self, guild_id: GuildId, guid: CharacterGuid) -> RepoResult<()> {
        self.rows
            .lock()
            .retain(|row| !(row.guild_id == guild_id && row.guid == guid));
        Ok(())
    }
}
