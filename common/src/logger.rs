use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Timestamped line logger. Writes to stderr so the board on stdout stays readable.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, message: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = self.format_line(&timestamp, message);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Game".to_string()));
        assert_eq!(
            logger.format_line("2026-01-01 10:00:00", "Computer plays (0, 0)"),
            "[2026-01-01 10:00:00][Game] Computer plays (0, 0)"
        );
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None);
        assert_eq!(logger.format_line("ts", "hello"), "[ts] hello");
    }
}
