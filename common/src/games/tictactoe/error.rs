use std::fmt;

use super::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds { index: usize },
    CellOccupied { index: usize },
    GameOver,
    NotYourTurn { expected: Player, actual: Player },
    NotStarted,
    ComputerTurn,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfBounds { index } => write!(f, "Cell {} is out of bounds", index),
            InvalidMove::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            InvalidMove::GameOver => write!(f, "Game is already over"),
            InvalidMove::NotYourTurn { expected, actual } => {
                write!(f, "Not your turn: expected {}, got {}", expected, actual)
            }
            InvalidMove::NotStarted => write!(f, "Game has not started"),
            InvalidMove::ComputerTurn => write!(f, "The computer plays O in this mode"),
        }
    }
}

impl std::error::Error for InvalidMove {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    NotAiMode,
    NotComputerTurn,
    /// The engine found no move for a position that was still in progress.
    NoMoveAvailable,
    Move(InvalidMove),
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidState::NotAiMode => write!(f, "AI moves are only available against the AI"),
            InvalidState::NotComputerTurn => write!(f, "It is not the computer's turn"),
            InvalidState::NoMoveAvailable => write!(f, "No move available"),
            InvalidState::Move(e) => write!(f, "AI move rejected: {}", e),
        }
    }
}

impl std::error::Error for InvalidState {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidState::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidMove> for InvalidState {
    fn from(e: InvalidMove) -> Self {
        InvalidState::Move(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidLength { found: usize },
    InvalidSymbol { symbol: char },
    UnbalancedMarks { x: usize, o: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidLength { found } => {
                write!(f, "Board must have 9 cells, found {}", found)
            }
            BoardError::InvalidSymbol { symbol } => write!(f, "Invalid cell symbol '{}'", symbol),
            BoardError::UnbalancedMarks { x, o } => write!(
                f,
                "Unreachable board: {} X marks and {} O marks (X moves first)",
                x, o
            ),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_state_wraps_move_error() {
        let e: InvalidState = InvalidMove::CellOccupied { index: 4 }.into();
        assert_eq!(e, InvalidState::Move(InvalidMove::CellOccupied { index: 4 }));
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "AI move rejected: Cell 4 is already marked");
    }

    #[test]
    fn test_not_your_turn_message() {
        let e = InvalidMove::NotYourTurn {
            expected: Player::X,
            actual: Player::O,
        };
        assert_eq!(e.to_string(), "Not your turn: expected X, got O");
    }
}
