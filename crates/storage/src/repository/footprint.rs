use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::{Result, StorageError};
use crate::models::{Footprint, NewFootprint};
use crate::store::FootprintQuery;

pub struct FootprintRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FootprintRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewFootprint) -> Result<Footprint> {
        let footprint = sqlx::query_as::<_, Footprint>(
            r#"
            INSERT INTO footprints (name, electricity, water, travel, waste, total_co2, submitted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, electricity, water, travel, waste, total_co2, submitted_at
            "#,
        )
        .bind(&new.name)
        .bind(new.electricity)
        .bind(new.water)
        .bind(new.travel)
        .bind(new.waste)
        .bind(new.total_co2)
        .bind(new.submitted_at)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_write)?;

        Ok(footprint)
    }

    pub async fn list(&self, query: FootprintQuery) -> Result<Vec<Footprint>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
            SELECT id, name, electricity, water, travel, waste, total_co2, submitted_at
            FROM footprints
            ORDER BY
            "#,
        );
        builder.push(query.order_by.as_column());
        builder.push(" ");
        builder.push(query.direction.as_sql());
        builder.push(", id ASC LIMIT ");
        builder.push_bind(i64::from(query.limit));

        let footprints: Vec<Footprint> = builder.build_query_as().fetch_all(self.pool).await?;

        Ok(footprints)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM footprints")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
