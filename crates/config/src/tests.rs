use crate::{AppConfig, EmailConfig};
use secrecy::{ExposeSecret, Secret};
use serde_json::json;

#[test]
fn test_secret_redaction() {
    let secret = Secret::new("re_live_key".to_string());
    let debug_output = format!("{:?}", secret);
    assert!(debug_output.contains("Secret([REDACTED"));
    assert!(!debug_output.contains("re_live_key"));
}

#[test]
fn test_config_struct_redaction() {
    let config = EmailConfig {
        api_key: Secret::new("re_live_key".to_string()),
        ..EmailConfig::default()
    };
    let debug_output = format!("{:?}", config);
    assert!(!debug_output.contains("re_live_key"));
    assert!(debug_output.contains("Secret([REDACTED"));
}

#[test]
fn test_defaults() {
    let config: AppConfig = serde_json::from_value(json!({})).unwrap();

    assert_eq!(config.app_name, "email-service");
    assert_eq!(config.app_env, "development");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3001);
    assert_eq!(config.telemetry.log_level, "info");
    assert_eq!(config.email.base_url, "https://api.resend.com");
    assert_eq!(config.email.from_email, "");
    assert_eq!(config.email.timeout_secs, 30);
    assert_eq!(config.email.api_key.expose_secret(), "");
    assert!(config.is_development());
    assert!(!config.is_production());
}

#[test]
fn test_partial_override() {
    let config: AppConfig = serde_json::from_value(json!({
        "app_env": "production",
        "server": { "port": 8080 },
        "email": { "from_email": "noreply@cosmoshop.io" }
    }))
    .unwrap();

    assert!(config.is_production());
    assert_eq!(config.server.port, 8080);
    // 未覆盖的字段保持默认值
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.email.from_email, "noreply@cosmoshop.io");
    assert_eq!(config.email.base_url, "https://api.resend.com");
}
