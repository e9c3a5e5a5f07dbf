use chrono::Utc;

use crate::error::Result;
use crate::input::ScoreInput;
use crate::models::{GameScore, NewGameScore};
use crate::store::{GameScoreQuery, Store};

/// Outcome of a score submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Recorded(GameScore),
    /// No name was given, so nothing was written.
    Skipped,
}

pub async fn submit(store: &dyn Store, input: &ScoreInput) -> Result<Submission> {
    let Some(name) = input.name.clone() else {
        tracing::debug!(score = input.score, "Score without a name, not recorded");
        return Ok(Submission::Skipped);
    };

    let new = NewGameScore {
        name,
        score: input.score,
        played_at: Utc::now(),
    };

    let score = store.insert_game_score(&new).await?;
    tracing::info!(id = score.id, score = score.score, "Game score recorded");

    Ok(Submission::Recorded(score))
}

/// Up to `n` scores, highest first.
pub async fn top_scores(store: &dyn Store, n: u32) -> Result<Vec<GameScore>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    store.query_game_scores(GameScoreQuery::highest(n)).await
}
