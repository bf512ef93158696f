//! Deferred kicks
//!
//! A banned player who slips into a roster is removed shortly after the join
//! completes, never from inside the join itself. The kick carries plain ids
//! and is resolved against the host again when it fires.

use std::sync::Arc;
use std::time::Duration;

use guildban_core::events::GuildBanNotice;
use guildban_core::traits::{GuildHost, RepoResult};
use guildban_core::value_objects::{CharacterGuid, GuildId};
use tokio::runtime::Handle;
use tracing::{debug, info, instrument, warn};

/// Delay between a banned join and the kick that undoes it
pub const BANNED_JOIN_KICK_DELAY: Duration = Duration::from_millis(100);

/// A kick waiting to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledKick {
    pub guild_id: GuildId,
    pub guid: CharacterGuid,
    pub delay: Duration,
}

impl ScheduledKick {
    pub fn new(guild_id: GuildId, guid: CharacterGuid) -> Self {
        Self {
            guild_id,
            guid,
            delay: BANNED_JOIN_KICK_DELAY,
        }
    }
}

pub trait KickScheduler: Send + Sync {
    /// Queue a kick to run once its delay has elapsed
    fn schedule_kick(&self, kick: ScheduledKick);
}

/// Remove a banned player who is still in the guild
///
/// Returns whether a kick happened. Nothing is done if the player logged off
/// or the guild was disbanded in the meantime.
///
/// # Errors
/// Returns the host error if a lookup, the removal or the notice fails
#[instrument(skip(host))]
pub async fn execute_kick(host: &dyn GuildHost, kick: ScheduledKick) -> RepoResult<bool> {
    if !host.is_online(kick.guid).await? {
        debug!("Banned player went offline before the kick");
        return Ok(false);
    }
    if host.find_guild(kick.guild_id).await?.is_none() {
        debug!("Guild disappeared before the kick");
        return Ok(false);
    }

    host.remove_member(kick.guild_id, kick.guid).await?;
    host.notify(
        kick.guid,
        GuildBanNotice::JoinRejected {
            guild_id: kick.guild_id,
        },
    )
    .await?;

    info!(guild_id = %kick.guild_id, guid = %kick.guid, "Banned player removed after joining");
    Ok(true)
}

/// Runs each kick as a one-shot tokio task
pub struct TokioKickScheduler {
    host: Arc<dyn GuildHost>,
    handle: Handle,
}

impl TokioKickScheduler {
    pub fn new(host: Arc<dyn GuildHost>, handle: Handle) -> Self {
        Self { host, handle }
    }

    /// Spawn kicks on the runtime the caller is running in
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime
    pub fn current(host: Arc<dyn GuildHost>) -> Self {
        Self::new(host, Handle::current())
    }
}

impl KickScheduler for TokioKickScheduler {
    fn schedule_kick(&self, kick: ScheduledKick) {
        let host = Arc::clone(&self.host);
        self.handle.spawn(async move {
            tokio::time::sleep(kick.delay).await;
            if let Err(e) = execute_kick(host.as_ref(), kick).await {
                warn!(
                    guild_id = %kick.guild_id,
                    guid = %kick.guid,
                    error = %e,
                    "Deferred guild kick failed"
                );
            }
        });
    }
}

impl std::fmt::Debug for TokioKickScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioKickScheduler")
            .field("host", &"dyn GuildHost")
            .finish_non_exhaustive()
    }
}
