//! Postgres-backed player store.
//!
//! Stats live in two JSONB columns so the row stays narrow; scores and
//! timestamps are plain columns so they can be indexed and sorted on.

use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{PlayerFilters, PlayerPage, PlayerQuery, PlayerStore, SortField, SortOrder, StoreError};
use crate::model::{DefenseStats, OffenseStats, Player};

const PLAYER_COLUMNS: &str =
    "id, name, team, position, offense, defense, overall_score, weighted_score, created_at, updated_at";

type PlayerRow = (Uuid, String, String, String, Json<OffenseStats>, Json<DefenseStats>, f64, f64, i64, i64);

#[derive(Clone)]
pub struct PgPlayerStore {
    pool: PgPool,
}

impl PgPlayerStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_player(row: PlayerRow) -> Result<Player, StoreError> {
    let (id, name, team, position, offense, defense, overall_score, weighted_score, created_at, updated_at) = row;
    let position = position
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("player {id}: {e}")))?;
    Ok(Player {
        id,
        name,
        team,
        position,
        offense: offense.0,
        defense: defense.0,
        overall_score,
        weighted_score,
        created_at,
        updated_at,
    })
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &PlayerFilters) {
    builder.push(" WHERE TRUE");
    if let Some(position) = filters.position {
        builder.push(" AND position = ").push_bind(position.as_str());
    }
    if let Some(team) = filters.team.clone() {
        builder.push(" AND lower(team) = lower(").push_bind(team).push(")");
    }
    if let Some(name) = filters.name.clone() {
        builder
            .push(" AND strpos(lower(name), lower(")
            .push_bind(name)
            .push(")) > 0");
    }
}

/// ORDER BY expression. Text keys use the C collation so ordering matches
/// the byte-wise comparison of the in-memory store.
fn order_expr(field: SortField) -> &'static str {
    match field {
        SortField::OverallScore => "overall_score",
        SortField::WeightedScore => "weighted_score",
        SortField::Name => "lower(name) COLLATE \"C\"",
        SortField::Team => "lower(team) COLLATE \"C\"",
        SortField::Position => "position COLLATE \"C\"",
        SortField::CreatedAt => "created_at",
    }
}

#[async_trait::async_trait]
impl PlayerStore for PgPlayerStore {
    async fn insert(&self, player: &Player) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO players (id, name, team, position, offense, defense, overall_score, weighted_score, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.team)
        .bind(player.position.as_str())
        .bind(Json(&player.offense))
        .bind(Json(&player.defense))
        .bind(player.overall_score)
        .bind(player.weighted_score)
        .bind(player.created_at)
        .bind(player.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Player>, StoreError> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_player).transpose()
    }

    async fn list(&self, query: &PlayerQuery) -> Result<PlayerPage, StoreError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM players");
        push_filters(&mut count, &query.filters);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {PLAYER_COLUMNS} FROM players"));
        push_filters(&mut select, &query.filters);
        select.push(" ORDER BY ").push(order_expr(query.sort_by));
        select.push(match query.order {
            SortOrder::Asc => " ASC",
            SortOrder::Desc => " DESC",
        });
        select.push(", id ASC LIMIT ").push_bind(i64::from(query.per_page));
        select
            .push(" OFFSET ")
            .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

        let rows = select.build_query_as::<PlayerRow>().fetch_all(&self.pool).await?;
        let players = rows
            .into_iter()
            .map(row_to_player)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlayerPage::new(players, u64::try_from(total).unwrap_or(0), query))
    }

    async fn update(&self, player: &Player) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE players
             SET name = $2, team = $3, position = $4, offense = $5, defense = $6,
                 overall_score = $7, weighted_score = $8, updated_at = $9
             WHERE id = $1",
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.team)
        .bind(player.position.as_str())
        .bind(Json(&player.offense))
        .bind(Json(&player.defense))
        .bind(player.overall_score)
        .bind(player.weighted_score)
        .bind(player.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
