//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys`.
//! Native builds (unit tests, integration tests) compile the call away.
//!
//! Usage:
//! ```rust
//! use life_engine::console_log;
//!
//! let generation = 3;
//! console_log!("stepped to generation {}", generation);
//! ```

/// Log a formatted line to the browser console
///
/// - wasm32: `console.log` via `web_sys`
/// - everything else: arguments are type-checked, nothing is printed
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::write_line(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
pub fn write_line(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}
