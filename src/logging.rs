use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::log_buffer::{LogBuffer, LogEntry};

/// Initialize tracing with a log file and an in-memory buffer for the UI.
/// Logs are written to <config_dir>/tally/logs/tally-YYYY-MM-DD-HH-MM-SS.log
pub fn init_logging(buffer: LogBuffer) -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("tally");

    let logs_dir = config_dir.join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    // Timestamped log file name, one file per session
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_filename = format!("tally-{}.log", timestamp);
    let log_path = logs_dir.join(&log_filename);

    // Non-blocking file appender so logging never stalls the event loop
    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_line_number(true);

    // Default to INFO, overridable with RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Buffer layer feeds the in-app Logs screen
    let buffer_layer = LogBufferLayer::new(buffer);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(buffer_layer)
        .init();

    // Keep the appender guard alive for the lifetime of the program
    std::mem::forget(_guard);

    Ok(log_path)
}

/// A tracing layer that captures log entries to an in-memory buffer
pub struct LogBufferLayer {
    buffer: LogBuffer,
}

impl LogBufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for LogBufferLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        // Extract message from event
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.buffer.push(LogEntry {
            timestamp: chrono::Local::now(),
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
        });
    }
}

/// Visitor to extract the message field from a tracing event
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}
