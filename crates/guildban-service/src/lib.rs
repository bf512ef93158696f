//! # guildban-service
//!
//! Application layer: the in-memory ban registry, the guild ban rules the
//! chat commands enforce, and the join hook that turns banned players away.

pub mod dto;
pub mod services;

pub use dto::{BanActor, BanRequest, JoinOutcome, JoiningPlayer};
pub use services::{
    execute_kick, BanContext, BanContextBuilder, GuildBanRegistry, GuildBanService,
    KickScheduler, NewGuildBan, ScheduledKick, ServiceError, ServiceResult, TokioKickScheduler,
    BANNED_JOIN_KICK_DELAY,
};
