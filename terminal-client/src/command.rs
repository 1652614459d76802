use tictactoe_common::games::tictactoe::{CELL_COUNT, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Board index 0..8, already converted from the 1..9 keypad number.
    Place(usize),
    Reset,
    SetMode(Mode),
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_ascii_lowercase();

    if let Ok(cell) = input.parse::<usize>() {
        if (1..=CELL_COUNT).contains(&cell) {
            return Ok(Command::Place(cell - 1));
        }
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }

    match input.as_str() {
        "r" | "reset" | "restart" => Ok(Command::Reset),
        "ai" | "vs-ai" => Ok(Command::SetMode(Mode::HumanVsAI)),
        "two" | "two-player" => Ok(Command::SetMode(Mode::TwoPlayer)),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err("Enter a cell number or a command".to_string()),
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}

pub const HELP_TEXT: &str = "\
Cells are numbered like this:
 1 | 2 | 3
 4 | 5 | 6
 7 | 8 | 9
Commands: 1-9 place a mark, r restart, ai play against the AI,
two two-player mode, h help, q quit";
