use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::GameScore;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScoreForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GameView {
    pub leaderboard: Vec<GameScore>,
    pub total_scores: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    /// False when the submission carried no name and nothing was stored.
    pub recorded: bool,
    pub score: Option<GameScore>,
    pub message: Option<String>,
}
