//! Integration tests for single-file and single-directory operations

use projtree::error::TreeError;
use projtree::ops::{blocking, nonblocking};
use std::fs;
use tempfile::TempDir;

const CONTENTS: &[&str] = &[
    "",
    "plain",
    "Hello 123 WORLD!",
    "multi\nline\r\ncontent\n",
    "Юникод и цифры 2024",
    "{\"user\": \"Artem9\", \"role\": \"ADMIN0\"}",
];

#[test]
fn test_write_read_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    for (i, content) in CONTENTS.iter().enumerate() {
        let path = temp_dir.path().join(format!("dir{}", i)).join("file.txt");
        blocking::write_file(&path, content).unwrap();
        assert_eq!(blocking::read_file(&path).unwrap(), *content);
    }
}

#[tokio::test]
async fn test_write_read_round_trip_nonblocking() {
    let temp_dir = TempDir::new().unwrap();
    for (i, content) in CONTENTS.iter().enumerate() {
        let path = temp_dir.path().join(format!("dir{}", i)).join("file.txt");
        nonblocking::write_file(&path, content).await.unwrap();
        assert_eq!(nonblocking::read_file(&path).await.unwrap(), *content);
    }
}

/// Writing replaces the whole previous content, even when the new one is shorter
#[test]
fn test_write_replaces_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("note.txt");
    blocking::write_file(&path, "a much longer first version").unwrap();
    blocking::write_file(&path, "short").unwrap();
    assert_eq!(blocking::read_file(&path).unwrap(), "short");
}

#[test]
fn test_copy_matches_source_at_copy_time() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("note.txt");
    let dest = temp_dir.path().join("copy").join("deeper").join("note_copy.txt");
    blocking::write_file(&src, "Hello 123 WORLD!").unwrap();

    blocking::copy_file(&src, &dest).unwrap();
    let at_copy = blocking::read_file(&src).unwrap();
    blocking::write_file(&src, "changed later").unwrap();

    assert_eq!(blocking::read_file(&dest).unwrap(), at_copy);
}

#[tokio::test]
async fn test_copy_nonblocking() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("data.json");
    let dest = temp_dir.path().join("backup").join("data.json");
    nonblocking::write_file(&src, "{\"reset\":true}").await.unwrap();

    let bytes = nonblocking::copy_file(&src, &dest).await.unwrap();

    assert_eq!(bytes, 14);
    assert_eq!(fs::read(&src).unwrap(), fs::read(&dest).unwrap());
}

#[test]
fn test_clear_then_read_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    for (i, content) in CONTENTS.iter().enumerate() {
        let path = temp_dir.path().join(format!("f{}.txt", i));
        blocking::write_file(&path, content).unwrap();
        blocking::clear_file(&path).unwrap();
        assert_eq!(blocking::read_file(&path).unwrap(), "");
    }
}

/// `note.txt` scenario: digits removed, case lowered, whitespace preserved
#[test]
fn test_denoise_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("note.txt");
    blocking::write_file(&path, "Hello 123 WORLD!").unwrap();

    blocking::denoise_file(&path).unwrap();
    assert_eq!(blocking::read_file(&path).unwrap(), "hello  world!");

    blocking::denoise_file(&path).unwrap();
    assert_eq!(blocking::read_file(&path).unwrap(), "hello  world!");
}

#[tokio::test]
async fn test_denoise_scenario_nonblocking() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("note.txt");
    nonblocking::write_file(&path, "Hello 123 WORLD!").await.unwrap();
    nonblocking::denoise_file(&path).await.unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello  world!");
}

#[test]
fn test_denoise_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = blocking::denoise_file(temp_dir.path().join("none.txt")).unwrap_err();
    assert!(matches!(err, TreeError::NotFound(_)));
}

/// Unit operations surface failures instead of creating anything
#[test]
fn test_failures_surface_immediately() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope").join("x.txt");

    assert!(matches!(
        blocking::read_file(&missing).unwrap_err(),
        TreeError::NotFound(_)
    ));
    assert!(matches!(
        blocking::overwrite_file(&missing, "x").unwrap_err(),
        TreeError::NotFound(_)
    ));
    assert!(matches!(
        blocking::clear_file(&missing).unwrap_err(),
        TreeError::NotFound(_)
    ));
    assert!(!temp_dir.path().join("nope").exists());
}

/// Directory deletion is not filtered: service entries inside go too
#[test]
fn test_delete_dir_removes_service_entries() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("project");
    blocking::write_file(dir.join(".git").join("HEAD"), "ref").unwrap();
    blocking::write_file(dir.join("node_modules").join("x").join("i.js"), "").unwrap();
    blocking::write_file(dir.join("a.txt"), "a").unwrap();

    blocking::delete_dir(&dir).unwrap();

    assert!(!dir.exists());
}

#[tokio::test]
async fn test_create_and_delete_dir_nonblocking() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("x").join("y").join("z");
    nonblocking::create_dir(&dir).await.unwrap();
    nonblocking::create_dir(&dir).await.unwrap();
    assert!(dir.is_dir());

    nonblocking::delete_dir(temp_dir.path().join("x")).await.unwrap();
    nonblocking::delete_dir(temp_dir.path().join("x")).await.unwrap();
    assert!(!temp_dir.path().join("x").exists());
}

#[cfg(unix)]
#[test]
fn test_read_access_denied() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("secret.txt");
    blocking::write_file(&path, "s").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    let result = blocking::read_file(&path);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    // Permission bits are not enforced for root.
    if let Err(err) = result {
        assert!(matches!(err, TreeError::AccessDenied(_)));
    }
}
