mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, WIN_LINES, get_available_moves, is_full};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move, calculate_random_move};
pub use error::{InvalidMoveReason, MoveError};
pub use game_state::TicTacToeGameState;
pub use session::{COMPUTER_MARK, HUMAN_MARK, SessionSnapshot, TicTacToeSession};
pub use types::{Difficulty, Mark, Outcome, Scores, SessionState, WinningLine};
pub use win_detector::{check_win, check_win_at, check_win_with_line, evaluate_terminal};
