use super::board::Board;
use super::error::{InvalidMoveReason, MoveError};
use super::types::{Mark, Outcome};
use super::win_detector::evaluate_terminal;

/// Board plus turn order for a single game. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: Option<Outcome>,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            outcome: None,
            last_move: None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some_and(|outcome| outcome.is_terminal())
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<Outcome, MoveError> {
        if self.is_game_over() {
            return Err(InvalidMoveReason::GameOver.into());
        }

        if mark != self.current_mark {
            return Err(InvalidMoveReason::NotYourTurn.into());
        }

        self.board.place(cell, mark)?;
        self.last_move = Some(cell);

        let outcome = match evaluate_terminal(&self.board) {
            Some(terminal) => terminal,
            None => {
                self.switch_turn();
                Outcome::Continuing(self.current_mark)
            }
        };

        self.outcome = Some(outcome);
        Ok(outcome)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    #[cfg(test)]
    pub(super) fn set_position(&mut self, board: Board, current_mark: Mark) {
        self.board = board;
        self.current_mark = current_mark;
        self.outcome = None;
        self.last_move = None;
    }
}
