//! End-to-end CLI tests for the lecture-mirror binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("lecture-mirror").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mirror course lecture slide PDFs"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("lecture-mirror").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lecture-mirror"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("lecture-mirror").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that an inverted lecture range is rejected up front.
#[test]
fn test_binary_inverted_range_returns_error() {
    let mut cmd = Command::cargo_bin("lecture-mirror").unwrap();
    cmd.args(["--first", "9", "--last", "3"]).assert().failure();
}

/// Full run against a mock server: available files land on disk.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_mirrors_files_from_mock_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/lectures/00/Slides00.pdf"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lectures/00/Slides00.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"deck zero".to_vec()))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(u8::MAX)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output_root = temp_dir.path().join("mirror");
    let base_url = format!("{}/lectures/", mock_server.uri());

    let output_arg = output_root.to_string_lossy().into_owned();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("lecture-mirror").unwrap();
        cmd.args([
            "--base-url",
            base_url.as_str(),
            "--output",
            output_arg.as_str(),
            "--first",
            "0",
            "--last",
            "1",
            "-q",
        ])
        .assert()
        .success();
    })
    .await
    .unwrap();

    let content = std::fs::read(output_root.join("00/Slides00.pdf")).unwrap();
    assert_eq!(content, b"deck zero");
    assert!(output_root.join("01").is_dir());
}

/// A per-file transfer failure must not turn into a non-zero exit code.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_exits_zero_despite_transfer_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/lectures/00/Slides00.pdf"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lectures/00/Slides00.pdf"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(u8::MAX)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output_root = temp_dir.path().join("mirror");
    let base_url = format!("{}/lectures/", mock_server.uri());

    let output_arg = output_root.to_string_lossy().into_owned();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("lecture-mirror").unwrap();
        cmd.args([
            "--base-url",
            base_url.as_str(),
            "--output",
            output_arg.as_str(),
            "--first",
            "0",
            "--last",
            "0",
            "-q",
        ])
        .assert()
        .success();
    })
    .await
    .unwrap();

    assert!(!output_root.join("00/Slides00.pdf").exists());
}
