use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A persisted carbon-footprint estimate.
///
/// `total_co2` is always derived from the four quantities at insert time and
/// is never edited afterwards; rows are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Footprint {
    pub id: i64,
    pub name: String,
    pub electricity: f64,
    pub water: f64,
    pub travel: f64,
    pub waste: f64,
    pub total_co2: f64,
    pub submitted_at: DateTime<Utc>,
}

/// Footprint row before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFootprint {
    pub name: String,
    pub electricity: f64,
    pub water: f64,
    pub travel: f64,
    pub waste: f64,
    pub total_co2: f64,
    pub submitted_at: DateTime<Utc>,
}

impl NewFootprint {
    pub fn into_footprint(self, id: i64) -> Footprint {
        Footprint {
            id,
            name: self.name,
            electricity: self.electricity,
            water: self.water,
            travel: self.travel,
            waste: self.waste,
            total_co2: self.total_co2,
            submitted_at: self.submitted_at,
        }
    }
}
