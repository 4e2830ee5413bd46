//! wrapgen-core - Type-descriptor resolution for source generators
//!
//! This crate provides the parts of wrapgen with real algorithmic content:
//! - [`TypeDescriptor`] and its parser for `pkg.Outer<A, B<C>>` descriptors
//! - [`ImportPolicy`] and [`ImportRegistry`] for import eligibility and dedup
//! - [`TypeRenderer`] / [`render`] for minimally-qualified rendering
//! - [`naming`] helpers for qualified names and accessor conventions
//! - [`GeneratorConfig`] and [`GenError`]

mod config;
mod descriptor;
mod error;
mod imports;
pub mod naming;
mod render;

pub use config::{GeneratorConfig, OPTION_DEBUG, OPTION_RESOURCE_PATH};
pub use descriptor::{BoundKind, PRIMITIVES, TypeDescriptor, WildcardBound};
pub use error::{GenError, GenResult};
pub use imports::{
    DEFAULT_IMPLICIT_NAMESPACES, ImportPolicy, ImportRegistry, Registration, same_namespace,
};
pub use render::{TypeRenderer, render};

/// Log levels for diagnostic callbacks
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Level implied by the `debug` option
    pub fn for_debug(debug: bool) -> Self {
        if debug { LogLevel::Debug } else { LogLevel::Info }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GenError, GenResult, GeneratorConfig, ImportPolicy, ImportRegistry, LogLevel,
        TypeDescriptor, TypeRenderer, render,
    };
}
