//! Logging macros over the global logger
//!
//! Context is written as `"key" => value` pairs where each value only needs
//! `Display`. Errors may carry a source span with `span = ...`.

/// Collect `"key" => value` pairs into owned context strings
#[doc(hidden)]
#[macro_export]
macro_rules! __log_context {
    ($($key:expr => $value:expr),*) => {
        vec![$(($key, ::std::string::ToString::to_string(&$value))),*]
    };
}

/// Log an error event tagged with a diagnostic `Code`
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::log_error_with_context(
            $code,
            $message,
            Some($span),
            $crate::__log_context!($($key => $value),*),
        )
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::log_error_with_context(
            $code,
            $message,
            None,
            $crate::__log_context!($($key => $value),*),
        )
    };
}

/// Log a success event tagged with a diagnostic `Code`
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::log_with_context(
            $crate::logging::LogEvent::success($code, $message),
            $crate::__log_context!($($key => $value),*),
        )
    };
}

#[macro_export]
macro_rules! log_warning {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        $crate::logging::log_with_context(
            $crate::logging::LogEvent::warning($message),
            $crate::__log_context!($($key => $value),*),
        )
    };
}

/// Debug events are skipped, context formatting included, unless debug output
/// is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
            $crate::logging::log_with_context(
                $crate::logging::LogEvent::debug($message),
                $crate::__log_context!($($key => $value),*),
            )
        }
    };
}
