//! Integration tests for configuration loading and the run context

use projtree::cli::{Commands, RunContext};
use projtree::config::{ConfigLoader, ExecutionMode, PROJECT_CONFIG_FILE};
use projtree::error::{ServiceError, TreeError};
use projtree::ops::blocking;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_project_config_selects_nonblocking_mode() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join(PROJECT_CONFIG_FILE),
        "execution = \"nonblocking\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_layers(None, root).unwrap();
    assert_eq!(config.execution, ExecutionMode::Nonblocking);

    let ctx = RunContext::new(Some(root.to_path_buf()), None, None).unwrap();
    assert_eq!(ctx.mode(), ExecutionMode::Nonblocking);
}

#[test]
fn test_cli_mode_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join(PROJECT_CONFIG_FILE),
        "execution = \"nonblocking\"\n",
    )
    .unwrap();

    let ctx = RunContext::new(Some(root.to_path_buf()), None, Some(ExecutionMode::Blocking))
        .unwrap();
    assert_eq!(ctx.mode(), ExecutionMode::Blocking);
}

/// The project config file is a dotfile, so listing and purge leave it alone
#[test]
fn test_project_config_is_a_service_entry() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(PROJECT_CONFIG_FILE), "[logging]\nlevel = \"warn\"\n").unwrap();
    blocking::write_file(root.join("x.txt"), "x").unwrap();

    let ctx = RunContext::new(Some(root.to_path_buf()), None, None).unwrap();
    let out = ctx
        .execute(&Commands::Purge {
            format: "json".to_string(),
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["removals"].as_array().unwrap().len(), 1);
    assert!(root.join(PROJECT_CONFIG_FILE).exists());
    assert!(!root.join("x.txt").exists());
}

#[test]
fn test_explicit_config_file_sets_root() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    blocking::write_file(project.join("docs").join("a.txt"), "a").unwrap();
    let config_path = temp_dir.path().join("projtree.toml");
    fs::write(
        &config_path,
        format!("root = {:?}\n", project.to_string_lossy()),
    )
    .unwrap();

    let ctx = RunContext::new(None, Some(config_path), None).unwrap();
    let project = fs::canonicalize(&project).unwrap();
    assert_eq!(ctx.root(), project.as_path());

    let out = ctx
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(PathBuf::from(out), project.join("docs").join("a.txt"));
}

#[test]
fn test_root_is_made_absolute_and_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    blocking::write_file(project.join("docs").join("a.txt"), "a").unwrap();

    let ctx = RunContext::new(Some(project.join("docs").join("..")), None, None).unwrap();
    let expected = fs::canonicalize(&project).unwrap();
    assert!(ctx.root().is_absolute());
    assert_eq!(ctx.root(), expected.as_path());

    let out = ctx
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(PathBuf::from(out), expected.join("docs").join("a.txt"));
}

#[test]
fn test_missing_root_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let err = RunContext::new(Some(temp_dir.path().join("absent")), None, None)
        .err()
        .unwrap();
    assert!(matches!(err, ServiceError::Tree(TreeError::NotFound(_))));
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(PROJECT_CONFIG_FILE),
        "execution = \"parallel\"\n",
    )
    .unwrap();
    assert!(ConfigLoader::load_layers(None, temp_dir.path()).is_err());
}
