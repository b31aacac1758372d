use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Log level enum for type-safe logging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// One recorded log event
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub source: &'static str, // "storage", "directory" or "console"
}

/// Simple circular buffer for fixed-size log storage
struct CircularBuffer {
    buffer: Vec<LogEntry>,
    head: usize,
    size: usize,
    capacity: usize,
}

impl CircularBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            head: 0,
            size: 0,
            capacity,
        }
    }

    fn push(&mut self, item: LogEntry) {
        if self.size < self.capacity {
            self.buffer.push(item);
            self.size += 1;
        } else {
            self.buffer[self.head] = item;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    fn to_vec(&self) -> Vec<LogEntry> {
        if self.size < self.capacity {
            self.buffer.clone()
        } else {
            // Return items in chronological order
            let mut result = Vec::with_capacity(self.size);
            result.extend_from_slice(&self.buffer[self.head..]);
            result.extend_from_slice(&self.buffer[..self.head]);
            result
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.head = 0;
        self.size = 0;
    }
}

/// Commands for the logger thread
enum LogCommand {
    Log(LogEntry),
    GetLogs(crossbeam_channel::Sender<Vec<LogEntry>>),
    Clear,
}

pub struct Logger {
    sender: Sender<LogCommand>,
    min_level: Arc<AtomicU8>,
}

impl Logger {
    pub fn new() -> Self {
        let (sender, receiver) = bounded(500);
        let min_level = Arc::new(AtomicU8::new(LogLevel::Debug as u8));

        // Spawn background thread to handle logs
        std::thread::spawn(move || {
            Self::logger_thread(receiver);
        });

        Self { sender, min_level }
    }

    /// Background thread that manages the log buffer
    fn logger_thread(receiver: Receiver<LogCommand>) {
        let mut buffer = CircularBuffer::new(500);

        for cmd in receiver {
            match cmd {
                LogCommand::Log(entry) => {
                    buffer.push(entry);
                }
                LogCommand::GetLogs(response_tx) => {
                    let _ = response_tx.send(buffer.to_vec());
                }
                LogCommand::Clear => {
                    buffer.clear();
                }
            }
        }
    }

    /// Log with enum level (non-blocking)
    pub fn log(&self, level: LogLevel, message: &str, source: &'static str) {
        if (level as u8) < self.min_level.load(Ordering::Relaxed) {
            return;
        }

        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            source,
        };

        // Non-blocking send (drops log if channel is full)
        let _ = self.sender.try_send(LogCommand::Log(entry));
    }

    /// Set minimum log level (runtime filtering)
    pub fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn get_logs(&self) -> Vec<LogEntry> {
        let (response_tx, response_rx) = bounded(1);
        if self.sender.send(LogCommand::GetLogs(response_tx)).is_ok() {
            response_rx.recv().unwrap_or_default()
        } else {
            Vec::new()
        }
    }

    pub fn clear_logs(&self) {
        let _ = self.sender.try_send(LogCommand::Clear);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

// Global logger instance
lazy_static::lazy_static! {
    pub static ref LOGGER: Logger = Logger::new();
}

// Macro for easy logging
#[macro_export]
macro_rules! book_log {
	($level:expr, $source:expr, $($arg:tt)*) => {
		{
			use $crate::logger::LogLevel;
			let message = format!($($arg)*);
			$crate::logger::LOGGER.log($level, &message, $source);
			// Also log to the log facade for development
			match $level {
				LogLevel::Error => log::error!("{}", message),
				LogLevel::Warn => log::warn!("{}", message),
				LogLevel::Info => log::info!("{}", message),
				LogLevel::Debug => log::debug!("{}", message),
			}
		}
	};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_as_str() {
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::Debug.as_str(), "debug");
    }

    #[test]
    fn test_circular_buffer_wraps() {
        let mut buffer = CircularBuffer::new(2);
        for i in 0..3 {
            buffer.push(LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                message: format!("msg {}", i),
                source: "storage",
            });
        }
        let entries = buffer.to_vec();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "msg 1");
        assert_eq!(entries[1].message, "msg 2");
    }

    #[test]
    fn test_logger_records_and_clears() {
        let logger = Logger::new();
        logger.log(LogLevel::Info, "loaded 3 records", "storage");
        // get_logs round-trips through the logger thread, so the entry is visible
        let logs = logger.get_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "loaded 3 records");
        assert_eq!(logs[0].source, "storage");

        logger.clear_logs();
        assert!(logger.get_logs().is_empty());
    }

    #[test]
    fn test_min_level_filters() {
        let logger = Logger::new();
        logger.set_min_level(LogLevel::Warn);
        logger.log(LogLevel::Debug, "dropped", "directory");
        logger.log(LogLevel::Error, "kept", "directory");
        let logs = logger.get_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "kept");
    }
}
