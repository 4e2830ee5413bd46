//! Tracing layer that forwards events to the host diagnostic channel

use crate::callback::DiagnosticManager;
use crate::reload::{LevelControl, filter_for};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use wrapgen_core::LogLevel;

/// Tracing layer that forwards events to a [`DiagnosticManager`]
pub struct DiagnosticLayer {
    manager: &'static DiagnosticManager,
}

impl DiagnosticLayer {
    /// Create a layer using the global manager
    pub fn new() -> Self {
        Self {
            manager: DiagnosticManager::global(),
        }
    }

    /// Create a layer with a specific manager
    pub fn with_manager(manager: &'static DiagnosticManager) -> Self {
        Self { manager }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for DiagnosticLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.manager
            .log(level, metadata.target(), &visitor.into_message());
    }
}

/// Collects the `message` field plus any structured fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        let mut message = self.message.unwrap_or_default();
        for field in self.fields {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(&field);
        }
        message
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

/// Initialize logging: stderr output plus the diagnostic layer
///
/// Call once at start-up. Subsequent calls leave the installed subscriber in
/// place and only adjust the level.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = tracing_subscriber::reload::Layer::new(filter_for(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(DiagnosticLayer::new());

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        LevelControl::global().attach(handle, level);
    }

    DiagnosticManager::global().set_level(level);
}

/// Change the level of an initialized logging system
pub fn set_level(level: LogLevel) {
    DiagnosticManager::global().set_level(level);

    if let Err(e) = LevelControl::global().apply(level) {
        tracing::debug!("log level not reloaded: {}", e);
    }
}
