//! # guildban-db
//!
//! Storage layer implementing `GuildBanRepository`.
//!
//! ## Overview
//!
//! - Connection pool management
//! - The `guild_bans` row model with SQLx `FromRow`
//! - Entity ↔ row mapper
//! - PostgreSQL and in-memory repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guildban_db::{create_pool, DatabaseConfig, PgGuildBanRepository};
//! use guildban_core::GuildBanRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let repo = PgGuildBanRepository::new(pool);
//!
//!     let bans = repo.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{MemoryGuildBanRepository, PgGuildBanRepository};
