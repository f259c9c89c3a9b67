//! Console logging
//!
//! Browser builds write to `console.*` through web-sys. Native builds (tests,
//! tooling) fall back to stderr so the same call sites work everywhere.
//!
//! Usage:
//! ```rust
//! use folio_effects::console_log;
//!
//! console_log!("spawned {} balls", 42);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Toggle debug output (FPS reports)
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

pub fn write(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Log => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Error => web_sys::console::error_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let tag = match level {
            Level::Log => "log",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        eprintln!("[{}] {}", tag, message);
    }
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::write(
            $crate::core::utils::console::Level::Log,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::write(
            $crate::core::utils::console::Level::Warn,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::utils::console::write(
            $crate::core::utils::console::Level::Error,
            &format!($($arg)*),
        )
    };
}
