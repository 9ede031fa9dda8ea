//! Rolling Logger
//!
//! A `tracing-subscriber` layer that keeps the most recent log records in a
//! circular buffer and mirrors them to the browser console on wasm targets.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

/// A single captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub at: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} [{}] {}",
            self.at.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Shared circular buffer of recent records.
///
/// Cloning is cheap; all clones see the same records.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    records: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a record, dropping the oldest one when full
    pub fn push(&self, record: LogRecord) {
        let Ok(mut records) = self.records.lock() else {
            return;
        };
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Copy of the buffered records, oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

/// Collects the `message` field plus any extra `key=value` fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Layer feeding a [`LogBuffer`] and, on wasm, the browser console
pub struct RollingLayer {
    buffer: LogBuffer,
    max_level: Level,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer, max_level: Level) -> Self {
        Self { buffer, max_level }
    }

    fn enabled_for(&self, level: &Level) -> bool {
        // Level ordering: TRACE > DEBUG > INFO > WARN > ERROR
        *level <= self.max_level
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if !self.enabled_for(meta.level()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let record = LogRecord {
            at: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: format!("{}{}", visitor.message, visitor.fields),
        };
        write_console(&record);
        self.buffer.push(record);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(record: &LogRecord) {
    let line = record.to_string();
    match record.level {
        Level::ERROR => web_sys::console::error_1(&line.as_str().into()),
        Level::WARN => web_sys::console::warn_1(&line.as_str().into()),
        Level::INFO => web_sys::console::info_1(&line.as_str().into()),
        _ => web_sys::console::debug_1(&line.as_str().into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_record: &LogRecord) {}

/// Parse a level name, case-insensitively
pub fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Install the rolling layer as the global subscriber
///
/// Returns the shared buffer so callers can inspect recent records.
pub fn init(capacity: usize, max_level: Level) -> Result<LogBuffer, TryInitError> {
    let buffer = LogBuffer::new(capacity);
    tracing_subscriber::registry()
        .with(RollingLayer::new(buffer.clone(), max_level))
        .try_init()?;
    Ok(buffer)
}
