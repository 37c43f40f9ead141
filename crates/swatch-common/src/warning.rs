//! Extraction warnings routed through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! A page with thousands of elements usually repeats the same odd value many
//! times; each distinct message is logged once until [`clear_warnings`].

use std::collections::HashSet;
use std::sync::Mutex;

/// Global set of warnings we've already logged (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a value the extractor had to skip (logs once per unique message)
///
/// # Example
/// ```
/// swatch_common::warning::warn_once("color", "unparseable color value 'hsl(1, 2%, 3%)'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    // A poisoned set only loses deduplication, never the warning itself.
    let should_log = match WARNED.lock() {
        Ok(mut guard) => guard.get_or_insert_with(HashSet::new).insert(key),
        Err(_) => true,
    };

    if should_log {
        log::warn!(target: "swatch", "[{component}] {message}");
    }
}

/// Clear all recorded warnings (call when starting a new extraction pass)
pub fn clear_warnings() {
    if let Ok(mut guard) = WARNED.lock() {
        *guard = None;
    }
}
