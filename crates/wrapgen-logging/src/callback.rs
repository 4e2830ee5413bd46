//! Host diagnostic callback management

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use wrapgen_core::LogLevel;

/// Host callback receiving `(level, target, message)` for each diagnostic
pub type DiagnosticCallback = Arc<dyn Fn(LogLevel, &str, &str) + Send + Sync>;

/// Global diagnostic manager
static DIAGNOSTIC_MANAGER: OnceCell<DiagnosticManager> = OnceCell::new();

/// Routes diagnostics to the host callback and counts warnings and errors
pub struct DiagnosticManager {
    callback: RwLock<Option<DiagnosticCallback>>,
    level: AtomicU8,
    warnings: AtomicUsize,
    errors: AtomicUsize,
}

impl DiagnosticManager {
    /// Create a new manager
    pub fn new() -> Self {
        Self {
            callback: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
            warnings: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }

    /// Get the global manager instance
    pub fn global() -> &'static DiagnosticManager {
        DIAGNOSTIC_MANAGER.get_or_init(DiagnosticManager::new)
    }

    /// Set the host callback
    pub fn set_callback(&self, callback: Option<DiagnosticCallback>) {
        *self.callback.write() = callback;
    }

    /// Whether a callback is installed
    pub fn has_callback(&self) -> bool {
        self.callback.read().is_some()
    }

    /// Set the minimum level forwarded to the callback
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Get the current level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a level is enabled
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Count the diagnostic and forward it if its level is enabled
    ///
    /// Warnings and errors are counted even when below the level or when no
    /// callback is installed.
    pub fn log(&self, level: LogLevel, target: &str, message: &str) {
        match level {
            LogLevel::Warn => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
            LogLevel::Error => {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }

        if !self.is_enabled(level) {
            return;
        }

        // Clone out of the lock so the callback may log again
        let callback = self.callback.read().clone();
        if let Some(callback) = callback {
            callback(level, target, message);
        }
    }

    /// Number of warnings seen since the last reset
    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    /// Number of errors seen since the last reset
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    /// Reset warning and error counters
    pub fn reset_counts(&self) {
        self.warnings.store(0, Ordering::SeqCst);
        self.errors.store(0, Ordering::SeqCst);
    }
}

impl Default for DiagnosticManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "callback/callback_tests.rs"]
mod callback_tests;
