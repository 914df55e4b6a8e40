/// Macros for properly formatted console logging
/// These macros wrap gloo_console functions and prefix each message with the
/// browser timestamp. They call into the browser console, so only use them from
/// code that runs in the page; services log through `tracing` instead.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::gloo_console::info!(format!("[{}] {}", $crate::js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::gloo_console::info!(format!("[{}] {}", $crate::js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::gloo_console::warn!(format!("[{}] {}", $crate::js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::gloo_console::warn!(format!("[{}] {}", $crate::js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::gloo_console::debug!(format!("[{}] {}", $crate::js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::gloo_console::debug!(format!("[{}] {}", $crate::js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}
