mod footprint;
mod game_score;

pub use footprint::{Footprint, NewFootprint};
pub use game_score::{GameScore, NewGameScore};

/// Upper bound on stored names, mirrored by the `CHECK` constraints.
pub const MAX_NAME_LEN: usize = 100;
