use super::*;
use crate::schema::ActivityConfig;

fn activity(name: &str, max: u32, participants: &[&str]) -> ActivityConfig {
    ActivityConfig {
        name: name.to_string(),
        description: String::new(),
        schedule: String::new(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn test_validate_default_config() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_port() {
    let mut config = Config::default();
    config.server.port = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.port"));
}

#[test]
fn test_validate_empty_host() {
    let mut config = Config::default();
    config.server.host = String::new();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "server.host"));
}

#[test]
fn test_validate_unknown_log_level_warns() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "logging.level"));
}

#[test]
fn test_validate_filter_directive_accepted() {
    let mut config = Config::default();
    config.logging.level = "info,signup_api=debug".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_empty_log_dir() {
    let mut config = Config::default();
    config.logging.dir = String::new();
    assert!(!ConfigValidator::validate(&config).is_valid());

    config.logging.file = false;
    assert!(ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_validate_duplicate_activity_names() {
    let mut config = Config::default();
    config.activities = vec![activity("Chess Club", 5, &[]), activity("Chess Club", 5, &[])];

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "activities[1].name"));
}

#[test]
fn test_validate_empty_activity_name() {
    let mut config = Config::default();
    config.activities = vec![activity("  ", 5, &[])];

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "activities[0].name"));
}

#[test]
fn test_validate_zero_capacity() {
    let mut config = Config::default();
    config.activities = vec![activity("Choir", 0, &[])];

    let result = ConfigValidator::validate(&config);
    assert!(result
        .errors
        .iter()
        .any(|e| e.path == "activities[0].max_participants"));
}

#[test]
fn test_validate_duplicate_participants() {
    let mut config = Config::default();
    config.activities = vec![activity("Choir", 5, &["a@b.com", "a@b.com"])];

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result
        .errors
        .iter()
        .any(|e| e.path == "activities[0].participants"));
}

#[test]
fn test_validate_over_capacity_is_warning() {
    let mut config = Config::default();
    config.activities = vec![activity("Choir", 1, &["a@b.com", "c@d.com"])];

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_into_result_collects_errors() {
    let mut config = Config::default();
    config.server.port = 0;
    config.server.host = String::new();

    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("server.port"));
    assert!(message.contains("server.host"));
}

#[test]
fn test_into_result_returns_warnings() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();

    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert_eq!(warnings.len(), 1);
}
