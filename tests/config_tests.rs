use std::time::Duration;

use pingrelay::core::config::AppConfig;

// Environment variables are process-wide, so every case lives in this one
// test to keep them sequential.
#[test]
fn test_config_from_env() {
    // SAFETY: this test binary runs a single test; nothing else reads the
    // environment concurrently.
    unsafe {
        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::set_var("TELEGRAM_CHAT_ID", "-100777");
        std::env::set_var("NOTIFY_API_KEY", "let-me-in");
    }

    let err = AppConfig::from_env().unwrap_err();
    assert!(err.starts_with("TELEGRAM_BOT_TOKEN"), "got: {err}");

    unsafe {
        std::env::set_var("TELEGRAM_BOT_TOKEN", "123456:test-token");
        std::env::remove_var("TELEGRAM_API_BASE");
        std::env::remove_var("TELEGRAM_PARSE_MODE");
        std::env::remove_var("CHUNK_SAFETY_MARGIN");
        std::env::remove_var("CHUNK_DELAY_MS");
        std::env::remove_var("ALLOWED_ORIGIN");
    }

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.telegram_api_base, "https://api.telegram.org");
    assert!(config.telegram_parse_mode.is_none());
    assert_eq!(config.chunk_safety_margin, 200);
    assert_eq!(config.chunk_delay_ms, 100);
    assert_eq!(config.allowed_origin, "*");

    unsafe {
        std::env::set_var("CHUNK_SAFETY_MARGIN", "100");
        std::env::set_var("CHUNK_DELAY_MS", "1000");
        std::env::set_var("TELEGRAM_PARSE_MODE", "HTML");
    }

    let config = AppConfig::from_env().unwrap();
    let settings = config.delivery_settings();
    assert_eq!(settings.effective_max_length(), 3996);
    assert_eq!(settings.inter_chunk_delay, Duration::from_secs(1));
    assert_eq!(config.telegram_parse_mode.as_deref(), Some("HTML"));

    unsafe {
        std::env::set_var("CHUNK_DELAY_MS", "soon");
    }

    let err = AppConfig::from_env().unwrap_err();
    assert!(err.starts_with("CHUNK_DELAY_MS"), "got: {err}");
}
