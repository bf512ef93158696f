//! Test fixtures
//!
//! A fake game server host, a scheduler that only records kicks, and a clock
//! that moves when told to.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;

use guildban_core::error::DomainError;
use guildban_core::events::GuildBanNotice;
use guildban_core::traits::{Clock, GuildHost, GuildSummary, RepoResult};
use guildban_core::value_objects::{AccountId, CharacterGuid, GuildId, GuildRank};
use guildban_service::{KickScheduler, ScheduledKick};

// ============================================================================
// Well-known ids
// ============================================================================

pub const GUILD: GuildId = GuildId::new(1);
pub const OTHER_GUILD: GuildId = GuildId::new(2);

pub const LEADER: CharacterGuid = CharacterGuid::new(100);
pub const OFFICER: CharacterGuid = CharacterGuid::new(101);
pub const MEMBER: CharacterGuid = CharacterGuid::new(102);

/// Troublemaker and the alt on the same account
pub const TARGET: CharacterGuid = CharacterGuid::new(500);
pub const TARGET_ALT: CharacterGuid = CharacterGuid::new(501);
pub const TARGET_ACCOUNT: AccountId = AccountId::new(42);

/// Character the host knows nothing about
pub const GHOST: CharacterGuid = CharacterGuid::new(900);

// ============================================================================
// Fake host
// ============================================================================

/// Host calls that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCall {
    FindGuild,
    MemberRank,
    RemoveMember,
    AccountCharacters,
    IsOnline,
    Notify,
}

#[derive(Debug, Default)]
struct HostState {
    failing: HashSet<HostCall>,
    guilds: HashMap<GuildId, GuildSummary>,
    ranks: HashMap<(GuildId, CharacterGuid), GuildRank>,
    accounts: HashMap<CharacterGuid, AccountId>,
    online: HashSet<CharacterGuid>,
    removals: Vec<(GuildId, CharacterGuid)>,
    notices: Vec<(CharacterGuid, GuildBanNotice)>,
}

/// In-memory game server
#[derive(Debug, Default)]
pub struct FakeHost {
    state: Mutex<HostState>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_guild(&self, id: GuildId, name: &str, leader: CharacterGuid) {
        let mut state = self.state.lock();
        state.guilds.insert(
            id,
            GuildSummary {
                id,
                name: name.to_string(),
                leader,
            },
        );
        state.ranks.insert((id, leader), GuildRank::LEADER);
    }

    pub fn disband(&self, id: GuildId) {
        let mut state = self.state.lock();
        state.guilds.remove(&id);
        state.ranks.retain(|(guild_id, _), _| *guild_id != id);
    }

    pub fn add_member(&self, guild_id: GuildId, guid: CharacterGuid, rank: GuildRank) {
        self.state.lock().ranks.insert((guild_id, guid), rank);
    }

    pub fn add_character(&self, guid: CharacterGuid, account_id: AccountId) {
        self.state.lock().accounts.insert(guid, account_id);
    }

    pub fn set_online(&self, guid: CharacterGuid, online: bool) {
        let mut state = self.state.lock();
        if online {
            state.online.insert(guid);
        } else {
            state.online.remove(&guid);
        }
    }

    /// Make every later call of this kind return a host error
    pub fn fail(&self, call: HostCall) {
        self.state.lock().failing.insert(call);
    }

    fn check(&self, call: HostCall) -> RepoResult<()> {
        if self.state.lock().failing.contains(&call) {
            return Err(DomainError::HostError(format!("{call:?} unavailable")));
        }
        Ok(())
    }

    pub fn is_member(&self, guild_id: GuildId, guid: CharacterGuid) -> bool {
        self.state.lock().ranks.contains_key(&(guild_id, guid))
    }

    /// Roster removals in the order they happened
    pub fn removals(&self) -> Vec<(GuildId, CharacterGuid)> {
        self.state.lock().removals.clone()
    }

    /// Every delivered notice with its recipient
    pub fn notices(&self) -> Vec<(CharacterGuid, GuildBanNotice)> {
        self.state.lock().notices.clone()
    }

    pub fn notices_for(&self, recipient: CharacterGuid) -> Vec<GuildBanNotice> {
        self.state
            .lock()
            .notices
            .iter()
            .filter(|(to, _)| *to == recipient)
            .map(|(_, notice)| notice.clone())
            .collect()
    }
}

#[async_trait]
impl GuildHost for FakeHost {
    async fn find_guild(&self, guild_id: GuildId) -> RepoResult<Option<GuildSummary>> {
        self.check(HostCall::FindGuild)?;
        Ok(self.state.lock().guilds.get(&guild_id).cloned())
    }

    async fn member_rank(
        &self,
        guild_id: GuildId,
        guid: CharacterGuid,
    ) -> RepoResult<Option<GuildRank>> {
        self.check(HostCall::MemberRank)?;
        Ok(self.state.lock().ranks.get(&(guild_id, guid)).copied())
    }

    async fn remove_member(&self, guild_id: GuildId, guid: CharacterGuid) -> RepoResult<()> {
        self.check(HostCall::RemoveMember)?;
        let mut state = self.state.lock();
        state.ranks.remove(&(guild_id, guid));
        state.removals.push((guild_id, guid));
        Ok(())
    }

    async fn account_of(&self, guid: CharacterGuid) -> RepoResult<Option<AccountId>> {
        Ok(self.state.lock().accounts.get(&guid).copied())
    }

    async fn account_characters(&self, account_id: AccountId) -> RepoResult<Vec<CharacterGuid>> {
        self.check(HostCall::AccountCharacters)?;
        let mut characters: Vec<_> = self
            .state
            .lock()
            .accounts
            .iter()
            .filter(|(_, account)| **account == account_id)
            .map(|(guid, _)| *guid)
            .collect();
        characters.sort();
        Ok(characters)
    }

    async fn is_online(&self, guid: CharacterGuid) -> RepoResult<bool> {
        self.check(HostCall::IsOnline)?;
        Ok(self.state.lock().online.contains(&guid))
    }

    async fn notify(&self, recipient: CharacterGuid, notice: GuildBanNotice) -> RepoResult<()> {
        self.check(HostCall::Notify)?;
        self.state.lock().notices.push((recipient, notice));
        Ok(())
    }
}

// ============================================================================
// Recording scheduler
// ============================================================================

/// Holds kicks instead of running them
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    kicks: Mutex<Vec<ScheduledKick>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kicks(&self) -> Vec<ScheduledKick> {
        self.kicks.lock().clone()
    }
}

impl KickScheduler for RecordingScheduler {
    fn schedule_kick(&self, kick: ScheduledKick) {
        self.kicks.lock().push(kick);
    }
}

// ============================================================================
// Manual clock
// ============================================================================

/// Clock that only moves through [`ManualClock::advance`]
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Start at a whole-second unix timestamp
    pub fn at(secs: i64) -> Self {
        let now = Utc
            .timestamp_opt(secs, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, secs: i64) {
        *self.now.lock() += Duration::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
