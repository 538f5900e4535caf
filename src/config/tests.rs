use super::*;
use crate::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults_to_orphan_everywhere() {
    let config = Config::default();
    assert_eq!(config.contention, Contention::uniform(ContentionPolicy::Orphan));
    assert!(config.labels.is_empty());
}

#[test]
fn loads_json_from_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("larder.json"),
        r#"{"contention": {"confirm": "reject", "scope": "queue"}, "labels": {"save": "Keep"}}"#,
    )
    .unwrap();

    let config = Config::load_config(dir.path()).unwrap();
    assert_eq!(config.contention.confirm, ContentionPolicy::Reject);
    assert_eq!(config.contention.scope, ContentionPolicy::Queue);
    assert_eq!(config.contention.restore, ContentionPolicy::Orphan);
    assert_eq!(config.labels.get("save").map(String::as_str), Some("Keep"));
}

#[test]
fn loads_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prompts.yml");
    fs::write(&path, "contention:\n  restore: preempt\n").unwrap();

    let config = Config::load_config(&path).unwrap();
    assert_eq!(config.contention.restore, ContentionPolicy::Preempt);
}

#[test]
fn json_preferred_over_yaml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("larder.json"), r#"{"contention": {"confirm": "queue"}}"#)
        .unwrap();
    fs::write(dir.path().join("larder.yaml"), "contention:\n  confirm: reject\n").unwrap();

    let config = Config::load_config(dir.path()).unwrap();
    assert_eq!(config.contention.confirm, ContentionPolicy::Queue);
}

#[test]
fn missing_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_config(dir.path()).unwrap_err();
    match err {
        Error::ConfigNotFound { config_files, .. } => {
            assert_eq!(config_files, "larder.json, larder.yaml, larder.yml")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_unknown_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("larder.json"), r#"{"contention": {"confirm": "retry"}}"#)
        .unwrap();
    assert!(matches!(
        Config::load_config(dir.path()),
        Err(Error::JSONParseError(_))
    ));
}

#[test]
fn rejects_blank_labels() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("larder.yaml"), "labels:\n  delete: '  '\n").unwrap();
    let err = Config::load_config(dir.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigValidation(msg) if msg.contains("delete")));
}

#[test]
fn policy_display_matches_serde_names() {
    for policy in [
        ContentionPolicy::Orphan,
        ContentionPolicy::Reject,
        ContentionPolicy::Queue,
        ContentionPolicy::Preempt,
    ] {
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(json, format!("\"{policy}\""));
    }
}
