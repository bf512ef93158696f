//! Test helpers for integration tests
//!
//! Wires a registry on the in-memory store and a fake host into a
//! `BanContext`, with a standard guild already set up.

use std::sync::Arc;

use guildban_common::GuildBanConfig;
use guildban_core::value_objects::{AccountId, CharacterGuid, GuildRank};
use guildban_db::MemoryGuildBanRepository;
use guildban_service::{
    BanActor, BanContext, BanContextBuilder, GuildBanRegistry, GuildBanService, JoiningPlayer,
};

use crate::fixtures::{
    FakeHost, ManualClock, RecordingScheduler, GUILD, LEADER, MEMBER, OFFICER, TARGET,
    TARGET_ACCOUNT, TARGET_ALT,
};

/// 2023-11-14T22:13:20Z
pub const TEST_EPOCH: i64 = 1_700_000_000;

/// One guild, its store, and the host it lives on
pub struct TestEnv {
    pub repo: Arc<MemoryGuildBanRepository>,
    pub clock: Arc<ManualClock>,
    pub host: Arc<FakeHost>,
    pub scheduler: Arc<RecordingScheduler>,
    pub registry: Arc<GuildBanRegistry>,
    pub ctx: BanContext,
}

impl TestEnv {
    /// Standard setup with default configuration
    pub fn new() -> Self {
        Self::with_config(GuildBanConfig::default())
    }

    /// Standard setup
    ///
    /// Guild "Knights" led by `LEADER`, with `OFFICER` at rank 1, `MEMBER`
    /// at rank 3, and `TARGET` plus `TARGET_ALT` (same account) at rank 4.
    pub fn with_config(config: GuildBanConfig) -> Self {
        let repo = Arc::new(MemoryGuildBanRepository::new());
        Self::on_store(repo, config)
    }

    /// Standard setup over an existing store
    pub fn on_store(repo: Arc<MemoryGuildBanRepository>, config: GuildBanConfig) -> Self {
        let clock = Arc::new(ManualClock::at(TEST_EPOCH));
        let host = Arc::new(FakeHost::new());
        let scheduler = Arc::new(RecordingScheduler::new());

        host.add_guild(GUILD, "Knights", LEADER);
        host.add_member(GUILD, OFFICER, GuildRank::OFFICER);
        host.add_member(GUILD, MEMBER, GuildRank::new(3));
        host.add_member(GUILD, TARGET, GuildRank::new(4));
        host.add_member(GUILD, TARGET_ALT, GuildRank::new(4));

        host.add_character(LEADER, AccountId::new(1));
        host.add_character(OFFICER, AccountId::new(2));
        host.add_character(MEMBER, AccountId::new(3));
        host.add_character(TARGET, TARGET_ACCOUNT);
        host.add_character(TARGET_ALT, TARGET_ACCOUNT);

        let registry = Arc::new(GuildBanRegistry::with_clock(
            repo.clone(),
            config,
            clock.clone(),
        ));

        let ctx = BanContextBuilder::new()
            .registry(registry.clone())
            .host(host.clone())
            .scheduler(scheduler.clone())
            .build()
            .unwrap_or_else(|e| panic!("test context: {e}"));

        Self {
            repo,
            clock,
            host,
            scheduler,
            registry,
            ctx,
        }
    }

    pub fn service(&self) -> GuildBanService<'_> {
        GuildBanService::new(&self.ctx)
    }

    /// A fresh registry over the same store and clock
    pub fn reloaded_registry(&self) -> GuildBanRegistry {
        GuildBanRegistry::with_clock(
            self.repo.clone(),
            self.registry.config(),
            self.clock.clone(),
        )
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Actor standing in the standard guild
pub fn actor(guid: CharacterGuid, name: &str) -> BanActor {
    BanActor {
        guid,
        name: name.to_string(),
        guild_id: Some(GUILD),
    }
}

pub fn leader() -> BanActor {
    actor(LEADER, "Arthas")
}

pub fn officer() -> BanActor {
    actor(OFFICER, "Jaina")
}

pub fn member() -> BanActor {
    actor(MEMBER, "Thrall")
}

/// Actor without a guild
pub fn guildless(guid: CharacterGuid) -> BanActor {
    BanActor {
        guid,
        name: "Wanderer".to_string(),
        guild_id: None,
    }
}

pub fn joining(guid: CharacterGuid, account_id: AccountId) -> JoiningPlayer {
    JoiningPlayer {
        guid,
        account_id,
        name: format!("Player{guid}"),
    }
}
