//! wrapgen-logging - Tracing to host diagnostics bridge
//!
//! A compiler host reports generator output through its own message
//! channel (notes, warnings, errors). This crate provides:
//! - [`DiagnosticLayer`] tracing layer that forwards events to that channel
//! - [`DiagnosticCallback`] type for the host callback
//! - Error/warning counters and dynamic level changes for the `debug` option

mod callback;
mod layer;
mod reload;

pub use callback::{DiagnosticCallback, DiagnosticManager};
pub use layer::{DiagnosticLayer, init_logging, set_level};
pub use reload::LevelControl;
pub use wrapgen_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DiagnosticCallback, DiagnosticLayer, DiagnosticManager, LogLevel, init_logging, set_level,
    };
}
