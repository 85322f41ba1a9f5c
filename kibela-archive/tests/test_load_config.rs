use kibela_archive::cli::resolve_config;
use kibela_archive::load_config::load_config;
use kibela_archive_core::ArchiveConfig;
use std::fs::write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), contents).unwrap();
    file
}

/// A full config file overrides every field.
#[test]
fn test_load_config_success_all_sections() {
    let file = config_file(
        r#"
site:
  title: Club Archive
  service_name: Club Wiki
  service_url: "https://wiki.example.org"
layout:
  notes_dir: posts
  attachments_dir: files
"#,
    );

    let config = load_config(file.path()).expect("Config should load");

    assert_eq!(
        config,
        ArchiveConfig {
            site_title: "Club Archive".into(),
            service_name: "Club Wiki".into(),
            service_url: "https://wiki.example.org".into(),
            notes_dir: "posts".into(),
            attachments_dir: "files".into(),
        }
    );
}

/// Keys that are absent keep their defaults.
#[test]
fn test_load_config_partial_keeps_defaults() {
    let file = config_file("layout:\n  attachments_dir: uploads\n");

    let config = load_config(file.path()).expect("Config should load");

    assert_eq!(config.attachments_dir, "uploads");
    assert_eq!(config.site_title, "KMC Kibela Archive");
    assert_eq!(config.service_url, "https://kmc.kibe.la");
    assert_eq!(config.notes_dir, "notes");
}

#[test]
fn test_load_config_empty_file_is_default() {
    let file = config_file("\n");
    assert_eq!(load_config(file.path()).unwrap(), ArchiveConfig::default());
}

#[test]
fn test_load_config_errors_for_invalid_file() {
    let file = config_file("not-yaml: [:::");
    let msg = load_config(file.path()).unwrap_err().to_string();
    assert!(
        msg.contains("parse") || msg.contains("YAML"),
        "Parse error expected, got: {msg}"
    );
}

#[test]
fn test_load_config_rejects_unknown_keys() {
    let file = config_file("site:\n  titel: typo\n");
    let msg = load_config(file.path()).unwrap_err().to_string();
    assert!(msg.contains("parse"), "got: {msg}");
}

#[test]
fn test_load_config_rejects_empty_values() {
    let file = config_file("layout:\n  notes_dir: \"  \"\n");
    let msg = load_config(file.path()).unwrap_err().to_string();
    assert!(msg.contains("layout.notes_dir"), "got: {msg}");
}

#[test]
fn test_load_config_errors_for_missing_file() {
    let msg = load_config("definitely/not/here.yaml")
        .unwrap_err()
        .to_string();
    assert!(msg.contains("read"), "got: {msg}");
}

#[test]
fn test_resolve_config_without_path_is_default() {
    assert_eq!(resolve_config(None).unwrap(), ArchiveConfig::default());
}
