//! Console Logging Macros
//!
//! In WASM: messages go straight to the browser console via web-sys.
//! Native (tests, tools): the message is type-checked but never formatted,
//! so no JS import is ever called outside the browser.
//!
//! Usage:
//! ```rust
//! use accretion_engine::engine_log;
//!
//! let count = 200;
//! engine_log!("seeded {} disk particles", count);
//! ```

/// Log an info line to the console
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

/// Log a warning to the console
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}
