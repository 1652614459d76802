use super::board::Board;
use super::types::{Move, Player};
use super::win_detector::has_win;

pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

/// Exhaustive minimax with O maximizing and X minimizing.
///
/// Every empty cell is tried in ascending index order and the first move with
/// the best score is kept, so the result is deterministic. Returns `None` on a
/// board that is already won or full.
pub fn calculate_minimax_move(board: &Board, player: Player) -> Option<Move> {
    if leaf_score(board).is_some() {
        return None;
    }

    let mut best_move: Option<Move> = None;

    for index in board.available_moves() {
        let next = board.with_mark(index, player);
        let score = score_position(&next, player.opponent());

        let improves = match best_move {
            None => true,
            Some(best) => match player {
                Player::O => score > best.score,
                Player::X => score < best.score,
            },
        };

        if improves {
            best_move = Some(Move::new(index, score));
        }
    }

    best_move
}

/// Minimax value of a position with `player_to_move` about to play.
pub fn score_position(board: &Board, player_to_move: Player) -> i32 {
    if let Some(score) = leaf_score(board) {
        return score;
    }

    calculate_minimax_move(board, player_to_move)
        .map(|best| best.score)
        .unwrap_or(DRAW_SCORE)
}

// Scores do not depend on depth, so a quick win and a slow win are equal.
fn leaf_score(board: &Board) -> Option<i32> {
    if has_win(board, Player::O) {
        Some(WIN_SCORE)
    } else if has_win(board, Player::X) {
        Some(-WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}
