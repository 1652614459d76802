use std::fmt;
use std::str::FromStr;

use super::error::{BoardError, InvalidMove};
use super::types::{GameStatus, Mark, Player};
use super::win_detector::evaluate;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row-major 3x3 grid. Index 0 is the top-left cell, 8 the bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Result<Self, BoardError> {
        let board = Self { cells };
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if x != o && x != o + 1 {
            return Err(BoardError::UnbalancedMarks { x, o });
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfBounds { index });
        }

        if evaluate(self) != GameStatus::InProgress {
            return Err(InvalidMove::GameOver);
        }

        if !self.cells[index].is_empty() {
            return Err(InvalidMove::CellOccupied { index });
        }

        self.cells[index] = player.into();
        Ok(())
    }

    /// Copy of this board with one more mark. Used for search branches, so it
    /// does not re-validate.
    pub fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = player.into();
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn next_player(&self) -> Player {
        if self.count(Mark::X) > self.count(Mark::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Accepts `X`, `O` and `.`/`-`/`_` for empty cells. Whitespace and `|`
    /// are ignored so boards can be written row by row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for symbol in s.chars() {
            if symbol.is_whitespace() || symbol == '|' {
                continue;
            }
            let mark = match symbol.to_ascii_uppercase() {
                'X' => Mark::X,
                'O' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                _ => return Err(BoardError::InvalidSymbol { symbol }),
            };
            cells.push(mark);
        }

        let found = cells.len();
        let cells: [Mark; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidLength { found })?;
        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
