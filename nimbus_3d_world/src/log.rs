//! Logging subsystem for the Nimbus3D world crate.
//!
//! Provides:
//! - Customizable sink via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a global
//!   minimum-severity filter
//! - Colored console output by default
//! - File and line information on ERROR logs
//!
//! The logger sink is the one piece of process-global state this crate
//! keeps; everything else (scenes, managers, cameras) is a plain value
//! owned by the caller.

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom log sinks
///
/// Implement this trait to route log entries somewhere other than the
/// console (a file, a network collector, a test buffer).
pub trait Logger: Send + Sync {
    /// Process one log entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "nimbus3d::SceneManager")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose per-frame information (registration churn, tick counts)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (carry file:line details)
    Error,
}

/// Default logger writing colored lines to stdout
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Timestamp as YYYY-MM-DD HH:MM:SS.mmm local time
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp, severity_str, source, entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER STATE =====

struct LogState {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

static LOG_STATE: OnceLock<RwLock<LogState>> = OnceLock::new();

fn log_state() -> &'static RwLock<LogState> {
    LOG_STATE.get_or_init(|| {
        RwLock::new(LogState {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Trace,
        })
    })
}

/// Install a custom logger sink
///
/// Replaces the default console logger with a custom implementation.
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut state) = log_state().write() {
        state.logger = Box::new(logger);
    }
}

/// Restore the default console logger and the Trace severity floor
pub fn reset_logger() {
    if let Ok(mut state) = log_state().write() {
        state.logger = Box::new(DefaultLogger);
        state.min_severity = LogSeverity::Trace;
    }
}

/// Set the minimum severity that reaches the logger
///
/// Entries below `severity` are dropped before the sink sees them. The
/// frame loop emits Trace-level registration and tick messages; raising
/// the floor to Info keeps a demo's console readable.
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut state) = log_state().write() {
        state.min_severity = severity;
    }
}

/// Route a log message to the installed sink (used by the nimbus_* macros)
pub fn dispatch(severity: LogSeverity, source: &str, message: String) {
    if let Ok(state) = log_state().read() {
        if severity < state.min_severity {
            return;
        }
        state.logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Route a log message with file:line information (used by nimbus_error!)
pub fn dispatch_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if let Ok(state) = log_state().read() {
        if severity < state.min_severity {
            return;
        }
        state.logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, per-frame detail)
#[macro_export]
macro_rules! nimbus_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! nimbus_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! nimbus_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! nimbus_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! nimbus_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::dispatch_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
