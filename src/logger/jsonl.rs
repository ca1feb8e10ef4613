//! JSONL run log: append-only line-delimited JSON for agent-friendly log
//! consumption.
//!
//! Each line is a self-contained JSON object. Lines are assembled in memory
//! and written atomically via `write_all` to prevent interleaved partial
//! lines when the stream is being tailed by another process.
//!
//! A sweep must never fail because logging failed: the first sink write
//! error switches the writer to silent discard for the rest of the run.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::core::errors::Result;

/// Severity level for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Log event types matching the sweep activity model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    SweepStart,
    FileRewritten,
    SweepComplete,
    Error,
}

/// A single JSONL log entry — all fields optional except `ts`, `event`,
/// `severity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    /// Event type identifier.
    pub event: EventType,
    /// Severity level.
    pub severity: Severity,
    /// Affected filesystem path (when applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Lines kept by the filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_kept: Option<usize>,
    /// Lines dropped by the filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_dropped: Option<usize>,
    /// Files rewritten during the sweep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_rewritten: Option<usize>,
    /// Duration of the action in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Whether the action succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    /// TSC error code if the action failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Freeform details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogEntry {
    /// Create a new entry stamped with the current UTC time.
    pub fn new(event: EventType, severity: Severity) -> Self {
        Self {
            ts: format_utc_now(),
            event,
            severity,
            path: None,
            lines_kept: None,
            lines_dropped: None,
            files_rewritten: None,
            duration_ms: None,
            ok: None,
            error_code: None,
            error_message: None,
            details: None,
        }
    }

    /// Serialize to a single JSONL line, trailing newline included.
    pub fn to_json_line(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{json}\n"))
    }
}

/// Append-only JSONL writer over an arbitrary sink.
///
/// The binary hands it a locked stderr; tests hand it a `Vec<u8>`.
pub struct JsonlWriter<W: Write> {
    sink: W,
    discarding: bool,
    lines_written: u64,
    lines_dropped: u64,
}

impl<W: Write> JsonlWriter<W> {
    /// Wrap a sink. No writes happen until the first entry.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            discarding: false,
            lines_written: 0,
            lines_dropped: 0,
        }
    }

    /// Write a single log entry as one atomic JSONL line.
    ///
    /// Never fails: a serialization or sink error drops the entry, and a
    /// sink error additionally degrades the writer to discard mode.
    pub fn write_entry(&mut self, entry: &LogEntry) {
        if self.discarding {
            self.lines_dropped += 1;
            return;
        }

        let Ok(line) = entry.to_json_line() else {
            self.lines_dropped += 1;
            return;
        };

        if self.sink.write_all(line.as_bytes()).is_err() {
            self.discarding = true;
            self.lines_dropped += 1;
        } else {
            self.lines_written += 1;
        }
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) {
        if !self.discarding {
            let _ = self.sink.flush();
        }
    }

    /// Whether the writer has degraded to silent discard.
    pub fn is_discarding(&self) -> bool {
        self.discarding
    }

    /// Number of lines successfully written to the sink.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Number of entries dropped due to sink or serialization failures.
    pub fn lines_dropped(&self) -> u64 {
        self.lines_dropped
    }

    /// Consume the writer and return the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

fn format_utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
