use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

/// Writes to stderr so log lines stay out of the board drawn on stdout.
pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= LogLevel::Info || self.verbose
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        eprintln!("{}", self.format(level, file, line, message));
    }

    fn format(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let level = match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
        };
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}][{}:{}] {}", timestamp, level, prefix, file_name, line, message)
        } else {
            format!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message)
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Messages sent before `init_logger` are dropped, so library code can log
/// without requiring callers to set anything up.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_needs_verbose() {
        let quiet = Logger::new(None, false);
        assert!(quiet.enabled(LogLevel::Info));
        assert!(!quiet.enabled(LogLevel::Debug));

        let verbose = Logger::new(None, true);
        assert!(verbose.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_format_strips_directories() {
        let logger = Logger::new(Some("Client".to_string()), false);
        let line = logger.format(LogLevel::Info, "src/games/tictactoe/board.rs", 12, "hello");
        assert!(line.ends_with("[INFO][Client][board.rs:12] hello"), "{}", line);
    }

    #[test]
    fn test_log_before_init_is_silent() {
        log(LogLevel::Info, file!(), line!(), "dropped");
        crate::log!("also dropped {}", 1);
    }
}
