use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::{Result, StorageError};
use crate::models::{GameScore, NewGameScore};
use crate::store::GameScoreQuery;

pub struct GameScoreRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GameScoreRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewGameScore) -> Result<GameScore> {
        let score = sqlx::query_as::<_, GameScore>(
            r#"
            INSERT INTO game_scores (name, score, played_at)
            VALUES (?, ?, ?)
            RETURNING id, name, score, played_at
            "#,
        )
        .bind(&new.name)
        .bind(new.score)
        .bind(new.played_at)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write)?;

        Ok(score)
    }

    pub async fn list(&self, query: GameScoreQuery) -> Result<Vec<GameScore>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
            SELECT id, name, score, played_at
            FROM game_scores
            ORDER BY
            "#,
        );
        builder.push(query.order_by.as_column());
        builder.push(" ");
        builder.push(query.direction.as_sql());
        builder.push(", id ASC LIMIT ");
        builder.push_bind(i64::from(query.limit));

        let scores: Vec<GameScore> = builder.build_query_as().fetch_all(self.pool).await?;

        Ok(scores)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM game_scores")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
