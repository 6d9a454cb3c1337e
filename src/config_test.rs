use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = AppConfig::from_values(None, None).expect("defaults");
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base, "http://localhost:3000");
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn trims_trailing_slash_from_api_base() {
    let cfg = AppConfig::from_values(Some("https://api.example.et/"), None).expect("config");
    assert_eq!(cfg.api_base, "https://api.example.et");
    assert_eq!(cfg.endpoint("/api/campaign"), "https://api.example.et/api/campaign");
}

#[test]
fn empty_api_base_means_same_origin() {
    let cfg = AppConfig::from_values(Some(""), None).expect("config");
    assert_eq!(cfg.endpoint("/api/auth/login"), "/api/auth/login");
}

#[test]
fn parses_log_level_case_insensitively() {
    let cfg = AppConfig::from_values(None, Some("DEBUG")).expect("config");
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn blank_log_level_uses_default() {
    let cfg = AppConfig::from_values(None, Some("  ")).expect("config");
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn rejects_unknown_log_level() {
    let err = AppConfig::from_values(None, Some("verbose")).expect_err("invalid level");
    assert_eq!(err, ConfigError::InvalidLogLevel("verbose".to_owned()));
}

#[test]
fn asset_url_prefixes_relative_paths_only() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.asset_url("/uploads/c1.jpg"), "http://localhost:3000/uploads/c1.jpg");
    assert_eq!(cfg.asset_url("https://cdn.example/x.png"), "https://cdn.example/x.png");
}

#[test]
fn bad_log_level_keeps_configured_api_base() {
    let (cfg, error) = AppConfig::with_fallback(Some("https://api.example.org/"), Some("verbose"));
    assert_eq!(cfg.api_base, "https://api.example.org");
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
    assert_eq!(error, Some(ConfigError::InvalidLogLevel("verbose".to_owned())));
}

#[test]
fn fallback_reports_nothing_for_valid_values() {
    let (cfg, error) = AppConfig::with_fallback(Some("https://api.example.org"), Some("warn"));
    assert_eq!(cfg.log_level, log::Level::Warn);
    assert_eq!(error, None);
}
