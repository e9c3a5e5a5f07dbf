use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Number of rows shown on the calculator history and the game leaderboard.
pub const DEFAULT_TOP_N: u32 = 5;

#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct LimitParams {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_TOP_N
}

impl Default for LimitParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Plain acknowledgement carrying the user-facing notice.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
