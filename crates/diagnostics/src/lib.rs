//! Lightweight structured logging for the textops workspace.
//!
//! All crates log through the macros here rather than using `emit`
//! directly, so the emitter is configured in exactly one place.
//!
//! Levels are selected with the TEXTOPS_LOG environment variable:
//! off (default), error, warn, info, or debug.

use std::sync::Once;

// Re-export emit so the macros can expand inside dependent crates
pub use emit;

static INIT: Once = Once::new();

/// Initialize the log emitter from the TEXTOPS_LOG environment variable.
///
/// Call once at process startup. Repeated calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let level = std::env::var("TEXTOPS_LOG").unwrap_or_else(|_| "off".to_string());

        let min_level = match level.as_str() {
            "off" => return,
            "debug" => emit::Level::Debug,
            "info" => emit::Level::Info,
            "warn" => emit::Level::Warn,
            "error" => emit::Level::Error,
            other => {
                eprintln!("Warning: unknown TEXTOPS_LOG value '{}', using 'info'", other);
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min_level))
            .init();

        // The emitter lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log normal operations users may want to see (file created, server started).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (resolved paths, request payloads).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable issues (rejected requests, fallbacks).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that prevent an operation from completing.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}
