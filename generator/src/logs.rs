//! Leveled pipeline logging.
//!
//! The pipeline reports progress as short human-readable lines at four
//! levels. Each line is emitted as a `tracing` event, so the binary's
//! subscriber (or a test's) decides where it goes.

use serde::{Deserialize, Serialize};

/// Log level for pipeline progress lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn marker(self) -> &'static str {
        match self {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠️ ",
            LogLevel::Error => "❌ ",
        }
    }
}

/// A single log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, rendered as leading spaces
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// The line as printed, with indentation and level marker.
    pub fn line(&self) -> String {
        format!(
            "{}{}{}",
            "   ".repeat(self.indent as usize),
            self.level.marker(),
            self.message
        )
    }

    /// Emit this entry as a `tracing` event.
    pub fn emit(&self) {
        let line = self.line();
        match self.level {
            LogLevel::Info | LogLevel::Success => tracing::info!(target: "rollmap", "{}", line),
            LogLevel::Warning => tracing::warn!(target: "rollmap", "{}", line),
            LogLevel::Error => tracing::error!(target: "rollmap", "{}", line),
        }
    }
}

pub fn log_info(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Info, msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Success, msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Warning, msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::new(LogLevel::Error, msg).emit();
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LogEntry::new(LogLevel::Info, msg).with_indent(indent).emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_includes_marker_and_indent() {
        let entry = LogEntry::new(LogLevel::Success, "done").with_indent(1);
        assert_eq!(entry.line(), "   ✓ done");

        let plain = LogEntry::new(LogLevel::Info, "reading");
        assert_eq!(plain.line(), "reading");
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
