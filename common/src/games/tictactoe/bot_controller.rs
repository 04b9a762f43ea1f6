use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::error::MoveError;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win_at;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    match difficulty {
        Difficulty::Random => calculate_random_move(input, rng),
        Difficulty::Optimal => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, MoveError> {
    let available_moves = get_available_moves(&input.board);
    rng.choose(&available_moves).ok_or(MoveError::NoMoveAvailable)
}

/// Full-depth minimax. Candidates are tried in ascending cell order and the
/// first one with the highest score wins.
pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, MoveError> {
    let bot_mark = input.current_mark;
    if bot_mark.opponent().is_none() {
        return Err(MoveError::NoMoveAvailable);
    }

    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return Err(MoveError::NoMoveAvailable);
    }

    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in available_moves {
        if board.place(cell, bot_mark).is_err() {
            continue;
        }

        let score = minimax(&mut board, 1, false, bot_mark, i32::MIN, i32::MAX, cell);

        board.clear(cell);

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move.ok_or(MoveError::NoMoveAvailable)
}

/// Score of `board` after the move at `last_cell`, `depth` plies below the
/// root. Wins for `bot_mark` are positive; faster wins score higher.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
    last_cell: usize,
) -> i32 {
    if let Some(winner) = check_win_at(board, last_cell) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for cell in moves {
            if board.place(cell, bot_mark).is_err() {
                continue;
            }
            let eval = minimax(board, depth + 1, false, bot_mark, alpha, beta, cell);
            board.clear(cell);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let Some(opponent_mark) = bot_mark.opponent() else {
            return 0;
        };
        let mut min_eval = i32::MAX;
        for cell in moves {
            if board.place(cell, opponent_mark).is_err() {
                continue;
            }
            let eval = minimax(board, depth + 1, true, bot_mark, alpha, beta, cell);
            board.clear(cell);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Outcome, evaluate_terminal};

    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    fn optimal(cells: [Mark; 9], mark: Mark) -> Result<usize, MoveError> {
        calculate_minimax_move(&BotInput::new(Board::from_cells(cells), mark))
    }

    #[test]
    fn test_random_move_picks_only_empty_cells() {
        let board = Board::from_cells([X, E, O, E, X, O, E, X, E]);
        let input = BotInput::new(board, O);
        let mut rng = SessionRng::new(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            let cell = calculate_random_move(&input, &mut rng).unwrap();
            assert_eq!(board.get(cell), Some(E));
            seen.insert(cell);
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![1, 3, 6, 8]);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let full = [X, O, X, O, X, O, O, X, O];
        let mut rng = SessionRng::new(3);
        let input = BotInput::new(Board::from_cells(full), O);
        assert_eq!(
            calculate_move(Difficulty::Random, &input, &mut rng),
            Err(MoveError::NoMoveAvailable)
        );
        assert_eq!(
            calculate_move(Difficulty::Optimal, &input, &mut rng),
            Err(MoveError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        assert_eq!(optimal([O, O, E, X, X, E, X, E, E], O), Ok(2));
    }

    #[test]
    fn test_minimax_blocks_opponent_win() {
        assert_eq!(optimal([X, X, E, E, O, E, E, E, E], O), Ok(2));
    }

    #[test]
    fn test_minimax_prefers_win_over_block() {
        // Blocking at 2 is tried first, but winning at 5 scores higher.
        assert_eq!(optimal([X, X, E, O, O, E, X, E, E], O), Ok(5));
    }

    #[test]
    fn test_minimax_ties_go_to_lowest_index() {
        // Every opening move draws under perfect play.
        assert_eq!(optimal([E; 9], X), Ok(0));
    }

    #[test]
    fn test_minimax_answers_corner_with_center() {
        assert_eq!(optimal([X, E, E, E, E, E, E, E, E], O), Ok(4));
    }

    #[test]
    fn test_minimax_leaves_input_board_untouched() {
        let input = BotInput::new(Board::from_cells([X, E, E, E, O, E, E, E, X]), O);
        let before = input.board;
        let mut rng = SessionRng::new(9);
        calculate_move(Difficulty::Optimal, &input, &mut rng).unwrap();
        calculate_move(Difficulty::Random, &input, &mut rng).unwrap();
        assert_eq!(input.board, before);
    }

    #[test]
    fn test_empty_mark_cannot_search() {
        assert_eq!(optimal([E; 9], E), Err(MoveError::NoMoveAvailable));
    }

    #[test]
    fn test_optimal_self_play_draws() {
        let mut board = Board::new();
        let mut mark = X;
        let outcome = loop {
            let cell = calculate_minimax_move(&BotInput::new(board, mark)).unwrap();
            board.place(cell, mark).unwrap();
            if let Some(outcome) = evaluate_terminal(&board) {
                break outcome;
            }
            mark = mark.opponent().unwrap();
        };
        assert_eq!(outcome, Outcome::Draw);
    }
}
