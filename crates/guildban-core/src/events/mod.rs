//! Player-facing notices

mod notice;

pub use notice::GuildBanNotice;
