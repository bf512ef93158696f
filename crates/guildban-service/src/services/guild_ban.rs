//! Guild ban service
//!
//! The rules behind the guild ban commands and the join hook. The host parses
//! commands and formats replies; this service decides what is allowed and
//! drives the registry, the roster and the player notices.

use guildban_core::entities::{GuildBan, GuildBanType};
use guildban_core::events::GuildBanNotice;
use guildban_core::traits::GuildSummary;
use guildban_core::value_objects::{AccountId, CharacterGuid, GuildId};
use guildban_core::DomainError;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{BanActor, BanRequest, JoinOutcome, JoiningPlayer};

use super::context::BanContext;
use super::error::ServiceResult;
use super::registry::NewGuildBan;
use super::scheduler::ScheduledKick;

/// Guild ban service
pub struct GuildBanService<'a> {
    ctx: &'a BanContext,
}

impl<'a> GuildBanService<'a> {
    /// Create a new GuildBanService
    pub fn new(ctx: &'a BanContext) -> Self {
        Self { ctx }
    }

    /// Check that an actor may issue or lift bans in a guild
    #[instrument(skip(self, guild), fields(guild_id = %guild.id))]
    pub async fn can_ban(&self, actor: &BanActor, guild: &GuildSummary) -> ServiceResult<()> {
        let registry = self.ctx.registry();

        if !registry.is_enabled() {
            return Err(DomainError::Disabled.into());
        }

        if actor.guild_id != Some(guild.id) {
            return Err(DomainError::NotInGuild.into());
        }

        if guild.is_leader(actor.guid) {
            return Ok(());
        }

        if registry.allow_officer_ban() {
            let rank = self.ctx.host().member_rank(guild.id, actor.guid).await?;
            if rank.is_some_and(|rank| rank.is_officer()) {
                return Ok(());
            }
        }

        Err(DomainError::NotGuildLeader.into())
    }

    /// Ban a single character from the actor's guild
    ///
    /// Errors are only returned before the ban is recorded. Roster removal
    /// and the player notice afterwards are logged when they fail.
    #[instrument(skip(self))]
    pub async fn ban_character(
        &self,
        actor: &BanActor,
        target: CharacterGuid,
        request: BanRequest,
    ) -> ServiceResult<GuildBan> {
        self.issue_ban(actor, target, request, GuildBanType::Character)
            .await
    }

    /// Ban every character on the target's account from the actor's guild
    #[instrument(skip(self))]
    pub async fn ban_account(
        &self,
        actor: &BanActor,
        target: CharacterGuid,
        request: BanRequest,
    ) -> ServiceResult<GuildBan> {
        self.issue_ban(actor, target, request, GuildBanType::Account)
            .await
    }

    /// Lift a character's ban from the actor's guild
    #[instrument(skip(self))]
    pub async fn remove_ban(
        &self,
        actor: &BanActor,
        target: CharacterGuid,
    ) -> ServiceResult<GuildBan> {
        let guild = self.actor_guild(actor).await?;
        self.can_ban(actor, &guild).await?;

        let not_banned = || DomainError::NotBanned {
            guild_id: guild.id,
            guid: target,
        };

        if !self.ctx.registry().is_character_banned(guild.id, target) {
            return Err(not_banned().into());
        }

        let removed = self
            .ctx
            .registry()
            .remove_ban(guild.id, target)
            .await
            .ok_or_else(not_banned)?;

        info!(guild_id = %guild.id, guid = %target, by = %actor.name, "Guild ban lifted");

        Ok(removed)
    }

    /// Bans of the actor's guild, oldest first
    ///
    /// Any member may read the list.
    #[instrument(skip(self))]
    pub async fn list_bans(&self, actor: &BanActor) -> ServiceResult<Vec<GuildBan>> {
        let guild_id = actor.guild_id.ok_or(DomainError::NotInGuild)?;

        if !self.ctx.registry().is_enabled() {
            return Err(DomainError::Disabled.into());
        }

        Ok(self.ctx.registry().guild_bans(guild_id))
    }

    /// Join hook, called after the host added a player to a roster
    ///
    /// A banned player is not removed here. A kick is scheduled instead and
    /// the leader is told about the attempt when configured. Once the kick is
    /// scheduled the outcome is `Rejected` even if the leader notice fails.
    #[instrument(skip(self, player), fields(guid = %player.guid))]
    pub async fn on_member_added(
        &self,
        guild_id: GuildId,
        player: &JoiningPlayer,
    ) -> ServiceResult<JoinOutcome> {
        let registry = self.ctx.registry();

        if !registry.is_enabled() || !registry.is_banned(guild_id, player.guid, player.account_id) {
            return Ok(JoinOutcome::Allowed);
        }

        self.ctx
            .scheduler()
            .schedule_kick(ScheduledKick::new(guild_id, player.guid));
        info!(
            guild_id = %guild_id,
            guid = %player.guid,
            account_id = %player.account_id,
            "Banned player joined, kick scheduled"
        );

        if registry.notify_on_banned_join_attempt() {
            if let Err(e) = self.notify_leader(guild_id, player).await {
                warn!(
                    guild_id = %guild_id,
                    error = %e,
                    "Failed to tell guild leader about banned join"
                );
            }
        }

        Ok(JoinOutcome::Rejected)
    }

    // === Helpers ===

    async fn actor_guild(&self, actor: &BanActor) -> ServiceResult<GuildSummary> {
        let guild_id = actor.guild_id.ok_or(DomainError::NotInGuild)?;

        let guild = self
            .ctx
            .host()
            .find_guild(guild_id)
            .await?
            .ok_or(DomainError::GuildNotFound(guild_id))?;

        Ok(guild)
    }

    async fn issue_ban(
        &self,
        actor: &BanActor,
        target: CharacterGuid,
        request: BanRequest,
        ban_type: GuildBanType,
    ) -> ServiceResult<GuildBan> {
        request.validate()?;

        let guild = self.actor_guild(actor).await?;
        self.can_ban(actor, &guild).await?;

        let host = self.ctx.host();
        let account_id = host
            .account_of(target)
            .await?
            .unwrap_or(AccountId::UNKNOWN);

        if ban_type == GuildBanType::Account && !account_id.is_known() {
            return Err(DomainError::AccountNotFound(target).into());
        }
        if target == actor.guid {
            return Err(DomainError::CannotBanSelf.into());
        }
        if guild.is_leader(target) {
            return Err(DomainError::CannotBanLeader.into());
        }

        let reason = request.reason().to_string();
        let ban = self
            .ctx
            .registry()
            .add_ban(NewGuildBan {
                guild_id: guild.id,
                guid: target,
                account_id,
                banned_by: actor.name.clone(),
                reason: reason.clone(),
                duration_secs: request.duration_secs,
                ban_type,
            })
            .await;

        // The ban is committed from here on, host failures are only logged
        self.kick_if_member(guild.id, target).await;

        if ban_type == GuildBanType::Account {
            match host.account_characters(account_id).await {
                Ok(characters) => {
                    for alt in characters.into_iter().filter(|alt| *alt != target) {
                        self.kick_if_member(guild.id, alt).await;
                    }
                }
                Err(e) => warn!(
                    account_id = %account_id,
                    error = %e,
                    "Failed to list characters of banned account"
                ),
            }
        }

        info!(
            guild_id = %guild.id,
            guid = %target,
            ban_type = ban_type.label(),
            by = %actor.name,
            "Guild ban issued"
        );

        let notice = GuildBanNotice::Banned {
            guild_id: guild.id,
            guild_name: guild.name.clone(),
            ban_type,
            reason,
        };
        if let Err(e) = self.notify_if_online(target, notice).await {
            warn!(guid = %target, error = %e, "Failed to notify banned player");
        }

        Ok(ban)
    }

    async fn kick_if_member(&self, guild_id: GuildId, guid: CharacterGuid) {
        let host = self.ctx.host();

        let removed = match host.member_rank(guild_id, guid).await {
            Ok(Some(_)) => host.remove_member(guild_id, guid).await,
            Ok(None) => return,
            Err(e) => Err(e),
        };

        match removed {
            Ok(()) => {
                debug!(guild_id = %guild_id, guid = %guid, "Banned character removed from roster");
            }
            Err(e) => warn!(
                guild_id = %guild_id,
                guid = %guid,
                error = %e,
                "Failed to remove banned character from roster"
            ),
        }
    }

    async fn notify_if_online(
        &self,
        recipient: CharacterGuid,
        notice: GuildBanNotice,
    ) -> ServiceResult<()> {
        let host = self.ctx.host();

        if host.is_online(recipient).await? {
            host.notify(recipient, notice).await?;
        }

        Ok(())
    }

    async fn notify_leader(&self, guild_id: GuildId, player: &JoiningPlayer) -> ServiceResult<()> {
        let host = self.ctx.host();

        let Some(guild) = host.find_guild(guild_id).await? else {
            return Ok(());
        };

        let notice = GuildBanNotice::BannedJoinAttempt {
            guild_id,
            guid: player.guid,
            player_name: player.name.clone(),
        };
        self.notify_if_online(guild.leader, notice).await
    }
}
