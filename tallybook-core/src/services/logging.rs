//! Logging service - structured event logging through `tracing`
//!
//! Events carry a name plus optional command and error context. No user data
//! (descriptions, client names, amounts) is ever logged.
//!
//! This service is shared by the CLI and the HTTP server.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
    Server,
}

impl EntryPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Cli => "cli",
            EntryPoint::Server => "server",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            error_message: None,
            error_details: None,
        }
    }

    /// Set the command context (for CLI events)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set error details (cause chain, additional context)
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Record the event: errors at `error`, everything else at `info`
    pub fn emit(&self) {
        if self.is_error() {
            tracing::error!(
                event = %self.event,
                command = self.command.as_deref(),
                error_message = self.error_message.as_deref(),
                error_details = self.error_details.as_deref(),
                "event failed"
            );
        } else {
            tracing::info!(
                event = %self.event,
                command = self.command.as_deref(),
                "event"
            );
        }
    }
}

/// Install the global subscriber, honouring `RUST_LOG` over `default_directive`
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging(entry_point: EntryPoint, default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            entry_point = entry_point.as_str(),
            app_version = env!("CARGO_PKG_VERSION"),
            platform = detect_platform(),
            "logging initialised"
        );
    }
}

/// Log a command execution
pub fn log_command(command: &str) {
    LogEvent::new("command_executed").with_command(command).emit();
}

/// Log an error with its cause chain
pub fn log_error(event: &str, message: &str, details: Option<&str>) {
    let mut log_event = LogEvent::new(event).with_error(message);
    if let Some(d) = details {
        log_event = log_event.with_error_details(d);
    }
    log_event.emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_builder() {
        let event = LogEvent::new("report_failed")
            .with_command("report")
            .with_error("boom")
            .with_error_details("caused by: disk");
        assert!(event.is_error());
        assert_eq!(event.command.as_deref(), Some("report"));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "report_failed");
        assert_eq!(json["error_details"], "caused by: disk");
    }

    #[test]
    fn test_plain_event_skips_empty_fields() {
        let json = serde_json::to_value(LogEvent::new("command_executed")).unwrap();
        assert!(json.get("command").is_none());
        assert!(!LogEvent::new("x").is_error());
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(EntryPoint::Cli, "warn");
        init_logging(EntryPoint::Server, "info");
        LogEvent::new("after_init").emit();
    }
}
