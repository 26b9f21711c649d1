//! Global logging initialization with runtime preferences

use expr_lexer::config::runtime::{LogLevel, LoggingPreferences};
use expr_lexer::logging::{self, config, events};

#[test]
fn test_init_with_preferences_applies_log_level() {
    let preferences = LoggingPreferences {
        use_structured_logging: false,
        enable_console_logging: false,
        min_log_level: LogLevel::Debug,
    };

    logging::init_global_logging_with_preferences(preferences.clone()).unwrap();

    assert!(logging::is_initialized());
    assert_eq!(config::get_min_log_level(), events::LogLevel::Debug);
    assert!(logging::get_system_diagnostics().contains("Min log level: Debug"));

    // Preferences are fixed for the life of the process
    assert!(logging::init_global_logging_with_preferences(preferences).is_err());
}
