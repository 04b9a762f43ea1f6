use common::config::Validate;
use common::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

pub const MAX_REPLY_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub difficulty: Difficulty,
    /// Pause before the computer answers, so the human move shows up first.
    pub reply_delay_ms: u64,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(format!(
                "reply_delay_ms must not exceed {} (got {})",
                MAX_REPLY_DELAY_MS, self.reply_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Random,
            reply_delay_ms: 500,
        }
    }
}
