use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Footprint, GameScore, NewFootprint, NewGameScore};

mod database;
mod memory;

pub use database::Database;
pub use memory::MemoryStore;

/// Append-only persistence contract shared by the estimator and the ledger.
///
/// Implementations assign ids themselves and never update or delete rows.
/// Every query breaks ties on the sort column by ascending id, so results are
/// stable with respect to insertion order.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_footprint(&self, new: &NewFootprint) -> Result<Footprint>;

    async fn insert_game_score(&self, new: &NewGameScore) -> Result<GameScore>;

    async fn query_footprints(&self, query: FootprintQuery) -> Result<Vec<Footprint>>;

    async fn query_game_scores(&self, query: GameScoreQuery) -> Result<Vec<GameScore>>;

    async fn count_footprints(&self) -> Result<i64>;

    async fn count_game_scores(&self) -> Result<i64>;
}

/// Handle built once at startup and shared by every request.
pub type SharedStore = Arc<dyn Store>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootprintColumn {
    TotalCo2,
    SubmittedAt,
}

impl FootprintColumn {
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::TotalCo2 => "total_co2",
            Self::SubmittedAt => "submitted_at",
        }
    }

    fn compare(&self, a: &Footprint, b: &Footprint) -> Ordering {
        match self {
            Self::TotalCo2 => a.total_co2.total_cmp(&b.total_co2),
            Self::SubmittedAt => a.submitted_at.cmp(&b.submitted_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameScoreColumn {
    Score,
}

impl GameScoreColumn {
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Score => "score",
        }
    }

    fn compare(&self, a: &GameScore, b: &GameScore) -> Ordering {
        match self {
            Self::Score => a.score.cmp(&b.score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootprintQuery {
    pub order_by: FootprintColumn,
    pub direction: SortDirection,
    pub limit: u32,
}

impl FootprintQuery {
    /// Lowest footprints first.
    pub fn lowest(limit: u32) -> Self {
        Self {
            order_by: FootprintColumn::TotalCo2,
            direction: SortDirection::Asc,
            limit,
        }
    }

    pub fn compare(&self, a: &Footprint, b: &Footprint) -> Ordering {
        self.direction
            .apply(self.order_by.compare(a, b))
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameScoreQuery {
    pub order_by: GameScoreColumn,
    pub direction: SortDirection,
    pub limit: u32,
}

impl GameScoreQuery {
    /// Highest scores first.
    pub fn highest(limit: u32) -> Self {
        Self {
            order_by: GameScoreColumn::Score,
            direction: SortDirection::Desc,
            limit,
        }
    }

    pub fn compare(&self, a: &GameScore, b: &GameScore) -> Ordering {
        self.direction
            .apply(self.order_by.compare(a, b))
            .then_with(|| a.id.cmp(&b.id))
    }
}
