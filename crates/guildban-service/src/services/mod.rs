//! Business logic services

pub mod context;
pub mod error;
pub mod guild_ban;
pub mod registry;
pub mod scheduler;

pub use context::{BanContext, BanContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use guild_ban::GuildBanService;
pub use registry::{GuildBanRegistry, NewGuildBan};
pub use scheduler::{
    execute_kick, KickScheduler, ScheduledKick, TokioKickScheduler, BANNED_JOIN_KICK_DELAY,
};
