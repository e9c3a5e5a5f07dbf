pub mod footprint;
pub mod game_score;
