use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{InvalidMoveReason, MoveError};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark, Outcome, Scores, SessionState};

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

/// Read-only view handed to whoever renders the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub state: SessionState,
    pub difficulty: Difficulty,
    pub scores: Scores,
    pub last_outcome: Option<Outcome>,
}

/// Human (X) against the computer (O).
///
/// A human move and the computer's answer are two separate transitions:
/// `place_human_move` leaves the session in `AwaitingComputerReply`, and the
/// caller decides when to run `computer_reply`. A reply that arrives in any
/// other state, for example after a restart, is rejected without effect.
#[derive(Debug)]
pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    state: SessionState,
    difficulty: Difficulty,
    scores: Scores,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn start_game(difficulty: Difficulty, rng: SessionRng) -> Self {
        log!("[session] New game, difficulty {}, seed {}", difficulty, rng.seed());
        Self {
            game_state: TicTacToeGameState::new(),
            state: SessionState::AwaitingHumanMove,
            difficulty,
            scores: Scores::default(),
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.game_state.board,
            current_mark: self.game_state.current_mark,
            state: self.state,
            difficulty: self.difficulty,
            scores: self.scores,
            last_outcome: self.game_state.outcome,
        }
    }

    pub fn place_human_move(&mut self, cell: usize) -> Result<Outcome, MoveError> {
        match self.state {
            SessionState::AwaitingHumanMove => {}
            SessionState::AwaitingComputerReply => {
                return Err(InvalidMoveReason::NotYourTurn.into());
            }
            SessionState::GameOver => return Err(InvalidMoveReason::GameOver.into()),
        }

        let outcome = self.game_state.place_mark(HUMAN_MARK, cell)?;
        Ok(self.after_move(outcome))
    }

    pub fn computer_reply(&mut self) -> Result<Outcome, MoveError> {
        if self.state != SessionState::AwaitingComputerReply {
            return Err(InvalidMoveReason::NotAwaitingReply.into());
        }

        let input = BotInput::new(self.game_state.board, COMPUTER_MARK);
        let cell = calculate_move(self.difficulty, &input, &mut self.rng).inspect_err(|e| {
            log!("[session] Computer could not move on {:?}: {}", self.game_state.board, e);
        })?;

        let outcome = self
            .game_state
            .place_mark(COMPUTER_MARK, cell)
            .inspect_err(|e| log!("[session] Computer move {} rejected: {}", cell, e))?;
        Ok(self.after_move(outcome))
    }

    /// Clears the board and hands the first move back to the human. Scores survive.
    pub fn restart(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            log!("[session] Difficulty {} -> {}", self.difficulty, difficulty);
        }
        self.game_state = TicTacToeGameState::new();
        self.state = SessionState::AwaitingHumanMove;
        self.difficulty = difficulty;
    }

    pub fn status_message(&self) -> String {
        match (self.state, self.game_state.outcome) {
            (SessionState::GameOver, Some(Outcome::Win(line))) if line.mark == HUMAN_MARK => {
                "You win!".to_string()
            }
            (SessionState::GameOver, Some(Outcome::Win(_))) => "Computer wins!".to_string(),
            (SessionState::GameOver, _) => "Draw!".to_string(),
            (SessionState::AwaitingComputerReply, _) => "Computer is thinking...".to_string(),
            (SessionState::AwaitingHumanMove, _) => format!("Your move ({})", HUMAN_MARK),
        }
    }

    fn after_move(&mut self, outcome: Outcome) -> Outcome {
        self.state = match outcome {
            Outcome::Continuing(mark) if mark == HUMAN_MARK => SessionState::AwaitingHumanMove,
            Outcome::Continuing(_) => SessionState::AwaitingComputerReply,
            Outcome::Win(line) => {
                if line.mark == HUMAN_MARK {
                    self.scores.human += 1;
                } else {
                    self.scores.computer += 1;
                }
                SessionState::GameOver
            }
            Outcome::Draw => {
                self.scores.draw += 1;
                SessionState::GameOver
            }
        };

        if self.state == SessionState::GameOver {
            log!(
                "[session] Game over: {} (human {}, computer {}, draw {})",
                outcome,
                self.scores.human,
                self.scores.computer,
                self.scores.draw
            );
        }

        outcome
    }

    #[cfg(test)]
    fn set_position(&mut self, board: Board, current_mark: Mark, state: SessionState) {
        self.game_state.set_position(board, current_mark);
        self.state = state;
    }
}
