//! PostgreSQL implementation of GuildBanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guildban_core::entities::GuildBan;
use guildban_core::traits::{GuildBanRepository, RepoResult};
use guildban_core::value_objects::{CharacterGuid, GuildId};

use crate::mappers::GuildBanInsert;
use crate::models::GuildBanModel;

use super::error::map_db_error;

/// PostgreSQL implementation of GuildBanRepository
#[derive(Clone)]
pub struct PgGuildBanRepository {
    pool: PgPool,
}

impl PgGuildBanRepository {
    /// Create a new PgGuildBanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildBanRepository for PgGuildBanRepository {
    /// Rows oldest first
    ///
    /// `ban_date` only has second precision, so bans issued in the same
    /// second come back by key.
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<GuildBan>> {
        let rows = sqlx::query_as::<_, GuildBanModel>(
            r"
            SELECT guild_id, guid, account_id, ban_date, unban_date, banned_by, ban_reason, ban_type
            FROM guild_bans
            ORDER BY ban_date ASC, guild_id ASC, guid ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(GuildBan::try_from).collect()
    }

    #[instrument(skip(self, ban), fields(guild_id = %ban.guild_id, guid = %ban.guid))]
    async fn upsert(&self, ban: &GuildBan) -> RepoResult<()> {
        let insert = GuildBanInsert::new(ban);

        sqlx::query(
            r"
            INSERT INTO guild_bans
                (guild_id, guid, account_id, ban_date, unban_date, banned_by, ban_reason, ban_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (guild_id, guid) DO UPDATE SET
                account_id = EXCLUDED.account_id,
                ban_date = EXCLUDED.ban_date,
                unban_date = EXCLUDED.unban_date,
                banned_by = EXCLUDED.banned_by,
                ban_reason = EXCLUDED.ban_reason,
                ban_type = EXCLUDED.ban_type
            ",
        )
        .bind(insert.guild_id)
        .bind(insert.guid)
        .bind(insert.account_id)
        .bind(insert.ban_date)
        .bind(insert.unban_date)
        .bind(insert.banned_by)
        .bind(insert.ban_reason)
        .bind(insert.ban_type)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, guild_id: GuildId, guid: CharacterGuid) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM guild_bans WHERE guild_id = $1 AND guid = $2
            ",
        )
        .bind(i64::from(guild_id))
        .bind(i64::from(guid))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
