use super::board::{Board, WIN_LINES};
use super::types::{Mark, Outcome, WinningLine};

/// First line, in `WIN_LINES` order, fully held by `mark`.
pub fn check_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&cell| board.get(cell) == Some(mark)))
        .map(|&cells| WinningLine::new(mark, cells))
}

/// Winning line for either mark, X checked first.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    check_win(board, Mark::X).or_else(|| check_win(board, Mark::O))
}

/// Only the lines through `cell` can have been completed by a move there.
pub fn check_win_at(board: &Board, cell: usize) -> Option<Mark> {
    let mark = board.get(cell)?;
    if mark == Mark::Empty {
        return None;
    }

    WIN_LINES
        .iter()
        .filter(|line| line.contains(&cell))
        .any(|line| line.iter().all(|&c| board.get(c) == Some(mark)))
        .then_some(mark)
}

pub fn evaluate_terminal(board: &Board) -> Option<Outcome> {
    if let Some(line) = check_win_with_line(board) {
        return Some(Outcome::Win(line));
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_row_win_after_completing_move() {
        let mut board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        board.place(2, X).unwrap();
        assert_eq!(check_win(&board, X), Some(WinningLine::new(X, [0, 1, 2])));
        assert_eq!(check_win(&board, O), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // X holds both the top row and the left column.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        assert_eq!(check_win(&board, X).map(|line| line.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        let column = Board::from_cells([E, O, X, E, O, X, E, E, X]);
        assert_eq!(check_win(&column, X).map(|line| line.cells), Some([2, 5, 8]));

        let diagonal = Board::from_cells([O, X, X, E, X, O, X, E, O]);
        assert_eq!(check_win(&diagonal, X).map(|line| line.cells), Some([2, 4, 6]));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert_eq!(check_win(&Board::new(), E), None);
        assert_eq!(check_win_at(&Board::new(), 4), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(check_win(&board, X), None);
        assert_eq!(check_win(&board, O), None);
        assert_eq!(evaluate_terminal(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, X, X, O]);
        assert_eq!(
            evaluate_terminal(&board),
            Some(Outcome::Win(WinningLine::new(X, [0, 3, 6])))
        );
    }

    #[test]
    fn test_open_board_is_not_terminal() {
        let board = Board::from_cells([X, O, E, E, X, E, E, E, E]);
        assert_eq!(evaluate_terminal(&board), None);
    }

    #[test]
    fn test_impossible_double_win_reports_one_winner() {
        let board = Board::from_cells([X, X, X, O, O, O, E, E, E]);
        assert_eq!(
            evaluate_terminal(&board),
            Some(Outcome::Win(WinningLine::new(X, [0, 1, 2])))
        );
        assert_eq!(check_win(&board, O).map(|line| line.cells), Some([3, 4, 5]));
    }

    #[test]
    fn test_check_win_at_only_sees_lines_through_cell() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(check_win_at(&board, 1), Some(X));
        assert_eq!(check_win_at(&board, 3), None);
    }
}
