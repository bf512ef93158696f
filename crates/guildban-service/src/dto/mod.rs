//! Data transfer objects between the host and the services

mod requests;
mod responses;

pub use requests::{BanActor, BanRequest, JoiningPlayer, DEFAULT_BAN_REASON};
pub use responses::JoinOutcome;
