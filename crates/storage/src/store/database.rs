use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::{FootprintQuery, GameScoreQuery, Store};
use crate::error::Result;
use crate::models::{Footprint, GameScore, NewFootprint, NewGameScore};
use crate::repository::{footprint::FootprintRepository, game_score::GameScoreRepository};

/// SQLite-backed store. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database with the schema already applied.
    ///
    /// Pinned to one connection that never expires: every SQLite connection
    /// to `:memory:` opens a separate, empty database.
    pub async fn connect_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for Database {
    async fn insert_footprint(&self, new: &NewFootprint) -> Result<Footprint> {
        FootprintRepository::new(&self.pool).create(new).await
    }

    async fn insert_game_score(&self, new: &NewGameScore) -> Result<GameScore> {
        GameScoreRepository::new(&self.pool).create(new).await
    }

    async fn query_footprints(&self, query: FootprintQuery) -> Result<Vec<Footprint>> {
        FootprintRepository::new(&self.pool).list(query).await
    }

    async fn query_game_scores(&self, query: GameScoreQuery) -> Result<Vec<GameScore>> {
        GameScoreRepository::new(&self.pool).list(query).await
    }

    async fn count_footprints(&self) -> Result<i64> {
        FootprintRepository::new(&self.pool).count().await
    }

    async fn count_game_scores(&self) -> Result<i64> {
        GameScoreRepository::new(&self.pool).count().await
    }
}
