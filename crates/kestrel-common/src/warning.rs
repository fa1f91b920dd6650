//! Non-fatal diagnostics with colored terminal output.
//!
//! Grammar problems are hard errors and never come through here. This is for
//! things that are legal in the tree but get dropped further down the line,
//! like attribute names a host cannot apply. Each unique message is printed
//! once until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning and report whether it has not been seen before.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about something that was skipped (prints once per unique message).
///
/// # Example
/// ```
/// kestrel_common::warning::warn_once("Materialize", "skipping attribute `[type]`");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[Kestrel {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if the given warning has already been printed.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Forget every recorded warning (call between independent documents).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_messages_are_recorded_once() {
        assert!(record("[Test] first".to_string()));
        assert!(!record("[Test] first".to_string()));
        assert!(was_warned("Test", "first"));
    }

    #[test]
    fn warn_once_marks_message_as_seen() {
        warn_once("Test", "seen");
        assert!(was_warned("Test", "seen"));
        assert!(!was_warned("Test", "never printed"));
    }
}
