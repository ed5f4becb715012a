/// Macros for properly formatted console logging.
///
/// In the browser they wrap `gloo_console` with a `Date.now()` timestamp
/// prefix; outside wasm they fall back to `tracing` so native builds and
/// unit tests stay runnable.

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)))
    };
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)))
    };
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)))
    };
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)))
    };
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
