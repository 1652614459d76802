mod board;
mod bot_controller;
mod error;
mod game_controller;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::{DRAW_SCORE, WIN_SCORE, calculate_minimax_move, score_position};
pub use error::{BoardError, InvalidMove, InvalidState};
pub use game_controller::{COMPUTER_PLAYER, ControllerState, GameController};
pub use types::{GameStatus, Mark, Mode, Move, Player, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate, has_win};
