//! Runtime level changes for the installed subscriber
//!
//! The `debug` generator option arrives after logging is up, so the level
//! filter is installed behind a reload layer and adjusted through
//! [`LevelControl`].

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;
use wrapgen_core::{GenError, GenResult, LogLevel};

type FilterHandle = reload::Handle<LevelFilter, Registry>;

static LEVEL_CONTROL: OnceCell<LevelControl> = OnceCell::new();

/// Current log level, bound to the subscriber's filter once attached
pub struct LevelControl {
    handle: RwLock<Option<FilterHandle>>,
    current: AtomicU8,
}

impl LevelControl {
    /// A control not bound to any subscriber; it only records the level
    pub fn detached() -> Self {
        Self {
            handle: RwLock::new(None),
            current: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// The control used by [`crate::init_logging`] and [`crate::set_level`]
    pub fn global() -> &'static LevelControl {
        LEVEL_CONTROL.get_or_init(LevelControl::detached)
    }

    pub(crate) fn attach(&self, handle: FilterHandle, level: LogLevel) {
        *self.handle.write() = Some(handle);
        self.current.store(level as u8, Ordering::SeqCst);
    }

    pub fn is_attached(&self) -> bool {
        self.handle.read().is_some()
    }

    pub fn current(&self) -> LogLevel {
        LogLevel::from_u8(self.current.load(Ordering::SeqCst))
    }

    /// Switch to `level`, reloading the subscriber filter when attached
    pub fn apply(&self, level: LogLevel) -> GenResult<()> {
        self.current.store(level as u8, Ordering::SeqCst);

        match self.handle.read().as_ref() {
            Some(handle) => handle
                .reload(filter_for(level))
                .map_err(|e| GenError::Config(format!("cannot change log level: {e}"))),
            None => Ok(()),
        }
    }
}

impl Default for LevelControl {
    fn default() -> Self {
        Self::detached()
    }
}

pub(crate) fn filter_for(level: LogLevel) -> LevelFilter {
    let level = match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
        LogLevel::Off => return LevelFilter::OFF,
    };
    LevelFilter::from_level(level)
}
