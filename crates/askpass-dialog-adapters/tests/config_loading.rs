use std::fs;
use std::path::PathBuf;

use askpass_dialog_adapters::{load_config, AskpassConfig, ConfigError};
use askpass_dialog_core::DialogConfig;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "askpass-{name}-{}.json",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn partial_config_keeps_defaults() {
    let path = temp_config(
        "partial",
        r#"{ "dialog": { "app_name": "DarkPayCoin", "coin_unit": "DKPC" } }"#,
    );
    let config = load_config(&path).expect("load config");
    fs::remove_file(&path).ok();

    assert_eq!(config.dialog.app_name, "DarkPayCoin");
    assert_eq!(config.dialog.coin_unit, "DKPC");
    assert_eq!(
        config.dialog.max_passphrase_chars,
        DialogConfig::default().max_passphrase_chars
    );
    assert_eq!(config.kdf, AskpassConfig::default().kdf);
}

#[test]
fn kdf_section_overrides_costs() {
    let path = temp_config("kdf", r#"{ "kdf": { "memory_kib": 19456, "iterations": 2 } }"#);
    let config = load_config(&path).expect("load config");
    fs::remove_file(&path).ok();

    assert_eq!(config.kdf.memory_kib, 19_456);
    assert_eq!(config.kdf.iterations, 2);
    assert_eq!(config.kdf.parallelism, 1);
}

#[test]
fn malformed_config_is_a_parse_error() {
    let path = temp_config("broken", "{ not json");
    let err = load_config(&path).expect_err("must fail");
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_config("/nonexistent/askpass/config.json").expect_err("must fail");
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn oversized_passphrase_limit_is_rejected() {
    let path = temp_config(
        "oversized",
        r#"{ "dialog": { "max_passphrase_chars": 18446744073709551615 } }"#,
    );
    let err = load_config(&path).expect_err("must fail");
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("max_passphrase_chars"));
}

#[test]
fn zero_passphrase_limit_is_rejected() {
    let path = temp_config("zero", r#"{ "dialog": { "max_passphrase_chars": 0 } }"#);
    let err = load_config(&path).expect_err("must fail");
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}
