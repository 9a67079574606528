use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Timestamped line logger. Writes to stderr so it never interleaves with a
/// board drawn on stdout. Until `init_logger` is called, messages are dropped.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!("{}", self.format(&timestamp, file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strips_directories() {
        let logger = Logger::new(None);
        let line = logger.format("2026-01-01 10:00:00", "common/src/games/tictactoe/session.rs", 42, "hello");
        assert_eq!(line, "[2026-01-01 10:00:00][session.rs:42] hello");
    }

    #[test]
    fn test_format_with_prefix() {
        let logger = Logger::new(Some("Console".to_string()));
        let line = logger.format("2026-01-01 10:00:00", "C:\\src\\main.rs", 7, "ready");
        assert_eq!(line, "[2026-01-01 10:00:00][Console][main.rs:7] ready");
    }
}
