use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{FootprintQuery, GameScoreQuery, Store};
use crate::error::{Result, StorageError};
use crate::models::{Footprint, GameScore, MAX_NAME_LEN, NewFootprint, NewGameScore};

#[derive(Debug, Default)]
struct Tables {
    footprints: Vec<Footprint>,
    game_scores: Vec<GameScore>,
    next_footprint_id: i64,
    next_game_score_id: i64,
}

/// In-process store with the same ordering and constraint rules as the
/// SQLite schema. Used by tests and for running without a database file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_name(name: &str, allow_empty: bool) -> Result<()> {
    if !allow_empty && name.is_empty() {
        return Err(StorageError::ConstraintViolation(
            "name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StorageError::ConstraintViolation(format!(
            "name exceeds {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn check_quantity(field: &str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(StorageError::ConstraintViolation(format!(
            "{field} must be non-negative"
        )))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_footprint(&self, new: &NewFootprint) -> Result<Footprint> {
        check_name(&new.name, true)?;
        check_quantity("electricity", new.electricity)?;
        check_quantity("water", new.water)?;
        check_quantity("travel", new.travel)?;
        check_quantity("waste", new.waste)?;

        let mut tables = self.tables.write().await;
        tables.next_footprint_id += 1;
        let footprint = new.clone().into_footprint(tables.next_footprint_id);
        tables.footprints.push(footprint.clone());

        Ok(footprint)
    }

    async fn insert_game_score(&self, new: &NewGameScore) -> Result<GameScore> {
        check_name(&new.name, false)?;

        let mut tables = self.tables.write().await;
        tables.next_game_score_id += 1;
        let score = new.clone().into_game_score(tables.next_game_score_id);
        tables.game_scores.push(score.clone());

        Ok(score)
    }

    async fn query_footprints(&self, query: FootprintQuery) -> Result<Vec<Footprint>> {
        let mut rows = self.tables.read().await.footprints.clone();
        rows.sort_by(|a, b| query.compare(a, b));
        rows.truncate(query.limit as usize);
        Ok(rows)
    }

    async fn query_game_scores(&self, query: GameScoreQuery) -> Result<Vec<GameScore>> {
        let mut rows = self.tables.read().await.game_scores.clone();
        rows.sort_by(|a, b| query.compare(a, b));
        rows.truncate(query.limit as usize);
        Ok(rows)
    }

    async fn count_footprints(&self) -> Result<i64> {
        Ok(self.tables.read().await.footprints.len() as i64)
    }

    async fn count_game_scores(&self) -> Result<i64> {
        Ok(self.tables.read().await.game_scores.len() as i64)
    }
}
