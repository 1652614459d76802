use std::io::Write;
use std::time::Duration;
use tictactoe_common::games::tictactoe::GameController;
use tictactoe_common::{log, log_debug};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::render::{mode_message, render_board, status_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs one session until `quit` or the input channel closes.
///
/// The AI's reply is deferred by `ai_delay` to imitate thinking. Input that
/// arrives during the pause is still handled, so a restart cancels the reply,
/// but other input does not push the reply back.
pub async fn run_game<W: Write>(
    mut controller: GameController,
    command_rx: &mut mpsc::UnboundedReceiver<String>,
    out: &mut W,
    ai_delay: Duration,
) -> std::io::Result<GameController> {
    writeln!(out, "{}", mode_message(controller.mode()))?;
    draw(&controller, out)?;

    let mut ai_deadline: Option<Instant> = None;

    loop {
        let flow = if controller.needs_ai_move() {
            // Fixed once per AI turn so unrelated input cannot postpone the reply.
            let deadline = *ai_deadline.get_or_insert_with(|| Instant::now() + ai_delay);
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {
                    ai_deadline = None;
                    play_ai_turn(&mut controller, out)?;
                    Flow::Continue
                }
                line = command_rx.recv() => match line {
                    Some(line) => handle_line(&mut controller, &line, out)?,
                    None => Flow::Quit,
                },
            }
        } else {
            ai_deadline = None;
            match command_rx.recv().await {
                Some(line) => handle_line(&mut controller, &line, out)?,
                None => Flow::Quit,
            }
        };

        if flow == Flow::Quit {
            break;
        }
    }

    out.flush()?;
    Ok(controller)
}

fn play_ai_turn<W: Write>(controller: &mut GameController, out: &mut W) -> std::io::Result<()> {
    match controller.request_ai_move() {
        Ok(index) => {
            log_debug!("AI placed O on cell {}", index + 1);
            draw(controller, out)
        }
        Err(e) => {
            log!("AI move failed: {}", e);
            Ok(())
        }
    }
}

fn handle_line<W: Write>(
    controller: &mut GameController,
    line: &str,
    out: &mut W,
) -> std::io::Result<Flow> {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(message) => {
            writeln!(out, "{}", message)?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Place(index) => {
            let Some(player) = controller.current_player() else {
                return Ok(Flow::Continue);
            };
            match controller.apply_move(index, player) {
                Ok(_) => draw(controller, out)?,
                // Invalid clicks are dropped without feedback.
                Err(e) => log_debug!("Ignored move on cell {}: {}", index + 1, e),
            }
        }
        Command::Reset => {
            controller.reset();
            draw(controller, out)?;
        }
        Command::SetMode(mode) => {
            controller.set_mode(mode);
            log!("Switched to {:?} mode", mode);
            writeln!(out, "{}", mode_message(mode))?;
            draw(controller, out)?;
        }
        Command::Help => writeln!(out, "{}", HELP_TEXT)?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn draw<W: Write>(controller: &GameController, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", render_board(controller))?;
    writeln!(out, "{}", status_message(controller))?;
    out.flush()
}
