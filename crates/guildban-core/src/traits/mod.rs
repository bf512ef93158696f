//! Ports - interfaces the domain needs from storage, the host, and the clock

mod clock;
mod host;
mod repositories;

pub use clock::{Clock, SystemClock};
pub use host::{GuildHost, GuildSummary};
pub use repositories::{GuildBanRepository, RepoResult};
