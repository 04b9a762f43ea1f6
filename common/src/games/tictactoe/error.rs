use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange(usize),
    CellOccupied(usize),
    GameOver,
    NotYourTurn,
    NotAwaitingReply,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange(cell) => {
                write!(f, "cell {} is out of range, expected 0..=8", cell)
            }
            InvalidMoveReason::CellOccupied(cell) => write!(f, "cell {} is already marked", cell),
            InvalidMoveReason::GameOver => write!(f, "game is already over"),
            InvalidMoveReason::NotYourTurn => write!(f, "computer is still thinking"),
            InvalidMoveReason::NotAwaitingReply => write!(f, "no computer reply is pending"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove(InvalidMoveReason),
    /// The engine was asked to move on a board with no empty cell.
    NoMoveAvailable,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            MoveError::NoMoveAvailable => write!(f, "No move available"),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<InvalidMoveReason> for MoveError {
    fn from(reason: InvalidMoveReason) -> Self {
        MoveError::InvalidMove(reason)
    }
}
