use storage::{
    Store,
    dto::{common::DEFAULT_TOP_N, game::GameView},
    error::Result,
    input::ScoreInput,
    models::GameScore,
    services::ledger::{self, Submission},
};

pub const SCORE_SAVED: &str = "Your score has been saved!";
pub const SCORE_SKIPPED: &str = "Score not saved: a name is required.";

/// Game page with the current leaderboard
pub async fn game_view(store: &dyn Store) -> Result<GameView> {
    let leaderboard = ledger::top_scores(store, DEFAULT_TOP_N).await?;
    let total_scores = store.count_game_scores().await?;

    Ok(GameView {
        leaderboard,
        total_scores,
    })
}

pub async fn submit_score(store: &dyn Store, input: &ScoreInput) -> Result<Submission> {
    ledger::submit(store, input).await
}

pub async fn leaderboard(store: &dyn Store, limit: u32) -> Result<Vec<GameScore>> {
    ledger::top_scores(store, limit).await
}
