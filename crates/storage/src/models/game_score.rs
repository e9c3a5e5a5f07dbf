use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GameScore {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub played_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameScore {
    pub name: String,
    pub score: i64,
    pub played_at: DateTime<Utc>,
}

impl NewGameScore {
    pub fn into_game_score(self, id: i64) -> GameScore {
        GameScore {
            id,
            name: self.name,
            score: self.score,
            played_at: self.played_at,
        }
    }
}
