#![allow(non_snake_case)]

use super::*;
use std::sync::Mutex;

fn capturing_callback() -> (DiagnosticCallback, Arc<Mutex<Vec<(LogLevel, String)>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    let callback: DiagnosticCallback = Arc::new(move |level, _target, message| {
        sink.lock().unwrap().push((level, message.to_string()));
    });
    (callback, captured)
}

#[test]
fn DiagnosticManager___new___default_level_is_info() {
    let manager = DiagnosticManager::new();

    assert_eq!(manager.level(), LogLevel::Info);
}

#[test]
fn DiagnosticManager___new___no_callback_set() {
    let manager = DiagnosticManager::new();

    assert!(!manager.has_callback());
}

#[test]
fn DiagnosticManager___is_enabled___respects_level_ordering() {
    let manager = DiagnosticManager::new();
    manager.set_level(LogLevel::Debug);

    assert!(manager.is_enabled(LogLevel::Debug));
    assert!(manager.is_enabled(LogLevel::Error));
    assert!(!manager.is_enabled(LogLevel::Trace));
}

#[test]
fn DiagnosticManager___log___forwards_enabled_levels() {
    let manager = DiagnosticManager::new();
    let (callback, captured) = capturing_callback();
    manager.set_callback(Some(callback));

    manager.log(LogLevel::Info, "wrapgen", "generated FooWrapper");
    manager.log(LogLevel::Debug, "wrapgen", "filtered");

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0], (LogLevel::Info, "generated FooWrapper".to_string()));
}

#[test]
fn DiagnosticManager___log___counts_warnings_and_errors_without_callback() {
    let manager = DiagnosticManager::new();
    manager.set_level(LogLevel::Off);

    manager.log(LogLevel::Warn, "t", "w");
    manager.log(LogLevel::Error, "t", "e1");
    manager.log(LogLevel::Error, "t", "e2");
    manager.log(LogLevel::Info, "t", "i");

    assert_eq!(manager.warning_count(), 1);
    assert_eq!(manager.error_count(), 2);
}

#[test]
fn DiagnosticManager___reset_counts___clears_counters() {
    let manager = DiagnosticManager::new();
    manager.log(LogLevel::Error, "t", "e");

    manager.reset_counts();

    assert_eq!(manager.error_count(), 0);
    assert_eq!(manager.warning_count(), 0);
}

#[test]
fn DiagnosticManager___set_callback_none___stops_forwarding() {
    let manager = DiagnosticManager::new();
    let (callback, captured) = capturing_callback();
    manager.set_callback(Some(callback));
    manager.set_callback(None);

    manager.log(LogLevel::Error, "t", "e");

    assert!(captured.lock().unwrap().is_empty());
}

#[test]
fn DiagnosticManager___global___returns_same_instance() {
    let a = DiagnosticManager::global() as *const DiagnosticManager;
    let b = DiagnosticManager::global() as *const DiagnosticManager;

    assert_eq!(a, b);
}
