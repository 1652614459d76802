use crate::log_debug;
use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::error::{InvalidMove, InvalidState};
use super::types::{GameStatus, Mode, Player, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// The computer always plays O.
pub const COMPUTER_PLAYER: Player = Player::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    TurnOf(Player),
    Terminal(GameStatus),
}

/// One game instance. Turn, activity and mode all live here, so several games
/// can coexist.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    state: ControllerState,
    mode: Mode,
    winning_line: Option<WinningLine>,
    last_move: Option<usize>,
}

impl GameController {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            state: ControllerState::Idle,
            mode,
            winning_line: None,
            last_move: None,
        }
    }

    /// Resumes play from an arbitrary reachable board. The side to move is
    /// derived from the mark counts.
    pub fn from_board(board: Board, mode: Mode) -> Self {
        let status = evaluate(&board);
        let state = if status.is_terminal() {
            ControllerState::Terminal(status)
        } else {
            ControllerState::TurnOf(board.next_player())
        };

        Self {
            board,
            state,
            mode,
            winning_line: check_win_with_line(&board),
            last_move: None,
        }
    }

    pub fn start(&mut self) {
        if self.state == ControllerState::Idle {
            self.state = ControllerState::TurnOf(Player::X);
            log_debug!("Game started in {:?} mode", self.mode);
        }
    }

    pub fn apply_move(
        &mut self,
        index: usize,
        acting_player: Player,
    ) -> Result<GameStatus, InvalidMove> {
        match self.state {
            ControllerState::Idle => return Err(InvalidMove::NotStarted),
            ControllerState::Terminal(_) => return Err(InvalidMove::GameOver),
            ControllerState::TurnOf(expected) if expected != acting_player => {
                return Err(InvalidMove::NotYourTurn {
                    expected,
                    actual: acting_player,
                });
            }
            ControllerState::TurnOf(_) => {}
        }

        if self.mode == Mode::HumanVsAI && acting_player == COMPUTER_PLAYER {
            return Err(InvalidMove::ComputerTurn);
        }

        self.commit_move(index, acting_player)
    }

    pub fn request_ai_move(&mut self) -> Result<usize, InvalidState> {
        if self.mode != Mode::HumanVsAI {
            return Err(InvalidState::NotAiMode);
        }

        if self.state != ControllerState::TurnOf(COMPUTER_PLAYER) {
            return Err(InvalidState::NotComputerTurn);
        }

        // Unreachable while TurnOf(O) implies an in-progress board with a free cell.
        let best = calculate_minimax_move(&self.board, COMPUTER_PLAYER)
            .ok_or(InvalidState::NoMoveAvailable)?;
        log_debug!("AI chose cell {} with score {}", best.index, best.score);

        self.commit_move(best.index, COMPUTER_PLAYER)?;
        Ok(best.index)
    }

    pub fn needs_ai_move(&self) -> bool {
        self.mode == Mode::HumanVsAI && self.state == ControllerState::TurnOf(COMPUTER_PLAYER)
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.state = ControllerState::TurnOf(Player::X);
        self.winning_line = None;
        self.last_move = None;
        log_debug!("Game reset in {:?} mode", self.mode);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn status(&self) -> GameStatus {
        match self.state {
            ControllerState::Terminal(status) => status,
            ControllerState::Idle | ControllerState::TurnOf(_) => GameStatus::InProgress,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            ControllerState::TurnOf(player) => Some(player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    fn commit_move(&mut self, index: usize, player: Player) -> Result<GameStatus, InvalidMove> {
        self.board.place(index, player)?;
        self.last_move = Some(index);

        let status = evaluate(&self.board);
        if status.is_terminal() {
            self.state = ControllerState::Terminal(status);
            self.winning_line = check_win_with_line(&self.board);
            log_debug!("{} played cell {}, game over: {:?}", player, index, status);
        } else {
            self.state = ControllerState::TurnOf(player.opponent());
            log_debug!("{} played cell {}", player, index);
        }

        Ok(status)
    }
}

impl Default for GameController {
    fn default() -> Self {
        let mut controller = Self::new(Mode::default());
        controller.start();
        controller
    }
}
