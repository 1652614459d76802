use super::board::Board;
use super::types::{GameStatus, Mark, Player, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_win(board: &Board, player: Player) -> bool {
    let mark = Mark::from(player);
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}

/// X is checked first. A board where both players hold a line cannot arise
/// from alternating play.
pub fn check_win(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_win(board, player))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let player = check_win(board)?;
    let mark = Mark::from(player);
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&index| cells[index] == mark))
        .map(|&line| WinningLine::new(player, line))
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return GameStatus::Won(winner);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
