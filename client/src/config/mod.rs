mod config;
mod tictactoe_config;

pub use config::{Config, get_config_manager};
pub use tictactoe_config::{MAX_REPLY_DELAY_MS, TicTacToeConfig};
