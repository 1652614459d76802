use tictactoe_common::games::tictactoe::{BOARD_SIZE, GameController, GameStatus, Mark, Mode};

/// Draws the board. Empty cells show their keypad number, winning cells are
/// wrapped in brackets.
pub fn render_board(controller: &GameController) -> String {
    let board = controller.board();
    let winning_line = controller.winning_line();

    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            let rendered: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, mark)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match mark {
                        Mark::Empty => (index + 1).to_string(),
                        _ => mark.to_string(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            rendered.join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn status_message(controller: &GameController) -> String {
    match controller.status() {
        GameStatus::Won(player) => format!("Player {} wins!", player),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => match controller.current_player() {
            Some(player) => format!("Player {}'s turn", player),
            None => "Waiting for the game to start".to_string(),
        },
    }
}

pub fn mode_message(mode: Mode) -> &'static str {
    match mode {
        Mode::HumanVsAI => "You are playing against the AI",
        Mode::TwoPlayer => "Two players mode: Player X's turn",
    }
}
