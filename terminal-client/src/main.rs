mod command;
mod config;
mod render;
mod runner;

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{GameController, Mode};
use tictactoe_common::{log, logger};
use tokio::sync::mpsc;

use config::{ClientConfig, get_config_manager};
use runner::run_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VsAi,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => Mode::TwoPlayer,
            ModeArg::VsAi => Mode::HumanVsAI,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe for two players or against the AI")]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<ClientConfig, String> {
    let manager = get_config_manager(args.config.clone());
    let mut config = manager.get_config()?;

    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(ai_delay_ms) = args.ai_delay_ms {
        config.ai_delay_ms = ai_delay_ms;
    }
    config.verbose_logging |= args.verbose;

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.verbose_logging);
    log!("Starting in {:?} mode, AI delay {} ms", config.mode, config.ai_delay_ms);

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    // A plain thread, so a pending stdin read never blocks runtime shutdown.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if command_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut controller = GameController::new(config.mode);
    controller.start();

    let mut stdout = std::io::stdout();
    run_game(
        controller,
        &mut command_rx,
        &mut stdout,
        Duration::from_millis(config.ai_delay_ms),
    )
    .await?;

    log!("Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(content: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_args_{}.yaml", random_number));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn parse(path: &std::path::Path, extra: &[&str]) -> Args {
        let path = path.to_string_lossy().to_string();
        let mut argv = vec!["tictactoe", "--config", path.as_str()];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_file_values_are_used_without_overrides() {
        let path = write_temp_config(
            "mode: human_vs_ai\nai_delay_ms: 100\nverbose_logging: true\n",
        );

        let config = load_config(&parse(&path, &[])).unwrap();
        assert_eq!(config.mode, Mode::HumanVsAI);
        assert_eq!(config.ai_delay_ms, 100);
        assert!(config.verbose_logging);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_command_line_overrides_file_values() {
        let path = write_temp_config(
            "mode: human_vs_ai\nai_delay_ms: 100\nverbose_logging: false\n",
        );

        let args = parse(&path, &["--mode", "two-player", "--ai-delay-ms", "250", "--verbose"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.mode, Mode::TwoPlayer);
        assert_eq!(config.ai_delay_ms, 250);
        assert!(config.verbose_logging);

        let args = parse(&path, &["--mode", "vs-ai"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.mode, Mode::HumanVsAI);
        assert!(!config.verbose_logging);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_overridden_delay_is_validated() {
        let path = write_temp_config("ai_delay_ms: 100\n");

        assert!(load_config(&parse(&path, &["--ai-delay-ms", "6000"])).is_err());
        assert!(load_config(&parse(&path, &["--ai-delay-ms", "5000"])).is_ok());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unknown_mode_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["tictactoe", "--mode", "solo"]).is_err());
    }
}
