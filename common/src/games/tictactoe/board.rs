use super::error::InvalidMoveReason;
use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Rows, then columns, then diagonals. Detection order follows this table.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Row-major 3x3 grid. Cells only go from empty to marked through `place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    pub fn is_valid_move(&self, cell: usize) -> bool {
        self.get(cell) == Some(Mark::Empty)
    }

    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), InvalidMoveReason> {
        match self.get(cell) {
            None => Err(InvalidMoveReason::OutOfRange(cell)),
            Some(Mark::Empty) => {
                self.cells[cell] = mark;
                Ok(())
            }
            Some(_) => Err(InvalidMoveReason::CellOccupied(cell)),
        }
    }

    /// Undo for speculative search; only the engine takes marks back.
    pub(super) fn clear(&mut self, cell: usize) {
        self.cells[cell] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
