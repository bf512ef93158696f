//! Guild ban registry
//!
//! In-memory authority for "is this character or account banned from this
//! guild". Three indices are kept per guild: banned characters, banned
//! accounts (account bans only), and the ordered ban records. All three sit
//! behind one lock so a mutation is visible everywhere at once. Every mutation
//! is written through to the repository after memory has been updated.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use guildban_common::GuildBanConfig;
use guildban_core::entities::{GuildBan, GuildBanType};
use guildban_core::traits::{Clock, GuildBanRepository, RepoResult, SystemClock};
use guildban_core::value_objects::{AccountId, CharacterGuid, GuildId};
use parking_lot::RwLock;
use tracing::{debug, error, info, instrument};

/// Input for [`GuildBanRegistry::add_ban`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuildBan {
    pub guild_id: GuildId,
    pub guid: CharacterGuid,
    pub account_id: AccountId,
    pub banned_by: String,
    pub reason: String,
    /// Seconds until the ban lapses, 0 for permanent
    pub duration_secs: u32,
    pub ban_type: GuildBanType,
}

#[derive(Debug, Default)]
struct BanIndex {
    characters: HashMap<GuildId, HashSet<CharacterGuid>>,
    accounts: HashMap<GuildId, HashSet<AccountId>>,
    records: HashMap<GuildId, Vec<GuildBan>>,
}

impl BanIndex {
    /// Insert a ban, replacing any record with the same key
    fn insert(&mut self, ban: GuildBan) -> Option<GuildBan> {
        let replaced = self.take(ban.guild_id, ban.guid);

        self.characters
            .entry(ban.guild_id)
            .or_default()
            .insert(ban.guid);
        if ban.bars_account() {
            self.accounts
                .entry(ban.guild_id)
                .or_default()
                .insert(ban.account_id);
        }
        self.records.entry(ban.guild_id).or_default().push(ban);

        replaced
    }

    fn take(&mut self, guild_id: GuildId, guid: CharacterGuid) -> Option<GuildBan> {
        if let Some(characters) = self.characters.get_mut(&guild_id) {
            characters.remove(&guid);
        }

        let records = self.records.get_mut(&guild_id)?;
        let position = records.iter().position(|ban| ban.guid == guid)?;
        let removed = records.remove(position);

        // Another account ban in the guild may still cover the same account
        if removed.bars_account()
            && !records
                .iter()
                .any(|ban| ban.bars_account() && ban.account_id == removed.account_id)
        {
            if let Some(accounts) = self.accounts.get_mut(&guild_id) {
                accounts.remove(&removed.account_id);
            }
        }

        Some(removed)
    }

    fn is_character_banned(&self, guild_id: GuildId, guid: CharacterGuid) -> bool {
        self.characters
            .get(&guild_id)
            .is_some_and(|characters| characters.contains(&guid))
    }

    fn is_account_banned(&self, guild_id: GuildId, account_id: AccountId) -> bool {
        self.accounts
            .get(&guild_id)
            .is_some_and(|accounts| accounts.contains(&account_id))
    }

    fn bans(&self, guild_id: GuildId) -> Vec<GuildBan> {
        self.records.get(&guild_id).cloned().unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

/// Per-guild ban registry, shared by `Arc`
pub struct GuildBanRegistry {
    repo: Arc<dyn GuildBanRepository>,
    clock: Arc<dyn Clock>,
    config: RwLock<GuildBanConfig>,
    index: RwLock<BanIndex>,
}

impl GuildBanRegistry {
    /// Create an empty registry on the wall clock
    pub fn new(repo: Arc<dyn GuildBanRepository>, config: GuildBanConfig) -> Self {
        Self::with_clock(repo, config, Arc::new(SystemClock))
    }

    /// Create an empty registry reading time from `clock`
    pub fn with_clock(
        repo: Arc<dyn GuildBanRepository>,
        config: GuildBanConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            clock,
            config: RwLock::new(config),
            index: RwLock::new(BanIndex::default()),
        }
    }

    // === Configuration ===

    pub fn config(&self) -> GuildBanConfig {
        *self.config.read()
    }

    /// Swap in freshly read configuration flags
    pub fn reload_config(&self, config: GuildBanConfig) {
        *self.config.write() = config;
        info!(
            enabled = config.enabled,
            allow_officer_ban = config.allow_officer_ban,
            notify_on_banned_join_attempt = config.notify_on_banned_join_attempt,
            "Guild ban configuration reloaded"
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.config.read().enabled
    }

    pub fn allow_officer_ban(&self) -> bool {
        self.config.read().allow_officer_ban
    }

    pub fn notify_on_banned_join_attempt(&self) -> bool {
        self.config.read().notify_on_banned_join_attempt
    }

    // === Persistence ===

    /// Replace the in-memory state with every unexpired stored ban
    ///
    /// Expired rows are deleted from the store as they are found. When the
    /// fetch fails the previous state is left untouched.
    ///
    /// # Errors
    /// Returns the repository error if the stored bans cannot be fetched
    #[instrument(skip(self))]
    pub async fn load_from_store(&self) -> RepoResult<usize> {
        let started = Instant::now();
        let now = self.clock.now();

        let stored = self.repo.find_all().await?;
        let (expired, live): (Vec<_>, Vec<_>) =
            stored.into_iter().partition(|ban| ban.is_expired_at(now));

        let mut index = BanIndex::default();
        for ban in live {
            index.insert(ban);
        }
        let count = index.len();
        *self.index.write() = index;

        for ban in &expired {
            debug!(guild_id = %ban.guild_id, guid = %ban.guid, "Pruning expired guild ban");
            if let Err(e) = self.repo.delete(ban.guild_id, ban.guid).await {
                error!(
                    guild_id = %ban.guild_id,
                    guid = %ban.guid,
                    error = %e,
                    "Failed to delete expired guild ban"
                );
            }
        }

        info!(
            count,
            expired = expired.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Loaded guild bans"
        );

        Ok(count)
    }

    // === Mutations ===

    /// Record a ban and write it through to the store
    ///
    /// A ban already held for the same guild and character is replaced.
    #[instrument(skip(self, new), fields(guild_id = %new.guild_id, guid = %new.guid))]
    pub async fn add_ban(&self, new: NewGuildBan) -> GuildBan {
        let ban = GuildBan::new(
            new.guild_id,
            new.guid,
            new.account_id,
            new.ban_type,
            self.clock.now(),
        )
        .with_banned_by(new.banned_by)
        .with_reason(new.reason)
        .with_duration(new.duration_secs);

        let replaced = self.index.write().insert(ban.clone());
        debug!(
            ban_type = ban.ban_type.label(),
            account_id = %ban.account_id,
            permanent = ban.is_permanent(),
            replaced = replaced.is_some(),
            "Guild ban added"
        );

        if let Err(e) = self.repo.upsert(&ban).await {
            error!(
                guild_id = %ban.guild_id,
                guid = %ban.guid,
                error = %e,
                "Failed to persist guild ban"
            );
        }

        ban
    }

    /// Lift a ban, returning the record that was removed
    ///
    /// The stored row is deleted even when nothing was held in memory.
    #[instrument(skip(self))]
    pub async fn remove_ban(&self, guild_id: GuildId, guid: CharacterGuid) -> Option<GuildBan> {
        let removed = self.index.write().take(guild_id, guid);
        debug!(found = removed.is_some(), "Guild ban removed");

        if let Err(e) = self.repo.delete(guild_id, guid).await {
            error!(
                guild_id = %guild_id,
                guid = %guid,
                error = %e,
                "Failed to delete guild ban"
            );
        }

        removed
    }

    // === Lookups ===

    pub fn is_character_banned(&self, guild_id: GuildId, guid: CharacterGuid) -> bool {
        self.is_enabled() && self.index.read().is_character_banned(guild_id, guid)
    }

    pub fn is_account_banned(&self, guild_id: GuildId, account_id: AccountId) -> bool {
        self.is_enabled() && self.index.read().is_account_banned(guild_id, account_id)
    }

    /// Check the character and its account in one read
    pub fn is_banned(&self, guild_id: GuildId, guid: CharacterGuid, account_id: AccountId) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let index = self.index.read();
        index.is_character_banned(guild_id, guid) || index.is_account_banned(guild_id, account_id)
    }

    /// Bans of one guild in the order they were issued
    pub fn guild_bans(&self, guild_id: GuildId) -> Vec<GuildBan> {
        self.index.read().bans(guild_id)
    }

    /// Total records held across all guilds
    pub fn ban_count(&self) -> usize {
        self.index.read().len()
    }
}

impl std::fmt::Debug for GuildBanRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuildBanRegistry")
            .field("config", &*self.config.read())
            .field("ban_count", &self.ban_count())
            .finish_non_exhaustive()
    }
}
