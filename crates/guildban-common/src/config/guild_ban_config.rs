//! Guild ban configuration
//!
//! Three switches, read at startup and again whenever the host reloads its
//! configuration. Keys use the host's dotted form (`GuildBan.Enable`); the
//! environment form (`GUILDBAN_ENABLE`) is accepted as a fallback.

use serde::Deserialize;
use std::env;

pub const ENABLE_KEY: &str = "GuildBan.Enable";
pub const ALLOW_OFFICER_BAN_KEY: &str = "GuildBan.AllowOfficerBan";
pub const NOTIFY_ON_BANNED_JOIN_KEY: &str = "GuildBan.NotifyOnBannedJoinAttempt";

/// Guild ban feature flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GuildBanConfig {
    /// Master switch
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Let rank-1 members issue bans alongside the leader
    #[serde(default)]
    pub allow_officer_ban: bool,
    /// Tell the leader when a banned player tries to join
    #[serde(default = "default_notify_on_banned_join_attempt")]
    pub notify_on_banned_join_attempt: bool,
}

impl Default for GuildBanConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            allow_officer_ban: false,
            notify_on_banned_join_attempt: default_notify_on_banned_join_attempt(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_notify_on_banned_join_attempt() -> bool {
    true
}

impl GuildBanConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to something that is not a boolean
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Each key is tried in dotted form first, then in environment form.
    /// Missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            enabled: read_bool(&lookup, ENABLE_KEY, defaults.enabled)?,
            allow_officer_ban: read_bool(&lookup, ALLOW_OFFICER_BAN_KEY, defaults.allow_officer_ban)?,
            notify_on_banned_join_attempt: read_bool(
                &lookup,
                NOTIFY_ON_BANNED_JOIN_KEY,
                defaults.notify_on_banned_join_attempt,
            )?,
        })
    }
}

/// `GuildBan.AllowOfficerBan` -> `GUILDBAN_ALLOWOFFICERBAN`
fn env_key(key: &str) -> String {
    key.replace('.', "_").to_ascii_uppercase()
}

fn read_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).or_else(|| lookup(&env_key(key))) {
        None => Ok(default),
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue(key, raw)),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
