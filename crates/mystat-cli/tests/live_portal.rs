//! CLI integration tests against the real portal.
//!
//! These tests are opt-in and require environment variables to be set:
//! - MYSTAT_TEST_USERNAME: Test account username
//! - MYSTAT_TEST_PASSWORD: Test account password
//!
//! Tests are skipped if these variables are not set. They only read data.

mod common;

use common::{get_test_credentials, run_cli_success};

#[tokio::test]
async fn test_login() {
    let Some((username, password)) = get_test_credentials() else {
        eprintln!("Skipping test_login: MYSTAT_TEST_USERNAME/PASSWORD not set");
        return;
    };

    let stdout = run_cli_success(
        &["login"],
        &[("MYSTAT_USERNAME", username.as_str()), ("MYSTAT_PASSWORD", password.as_str())],
    )
    .await;
    assert!(stdout.contains("Group ID"));
    assert!(stdout.contains("Expires"));
}

#[tokio::test]
async fn test_profile() {
    let Some((username, password)) = get_test_credentials() else {
        eprintln!("Skipping test_profile: credentials not set");
        return;
    };

    let stdout = run_cli_success(
        &["profile"],
        &[("MYSTAT_USERNAME", username.as_str()), ("MYSTAT_PASSWORD", password.as_str())],
    )
    .await;
    let profile: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(profile["current_group_id"].is_i64());
}

#[tokio::test]
async fn test_homework_list() {
    let Some((username, password)) = get_test_credentials() else {
        eprintln!("Skipping test_homework_list: credentials not set");
        return;
    };

    let stdout = run_cli_success(
        &["homework", "list", "--status", "checked"],
        &[("MYSTAT_USERNAME", username.as_str()), ("MYSTAT_PASSWORD", password.as_str())],
    )
    .await;
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(items.is_array());
}

#[tokio::test]
async fn test_progress() {
    let Some((username, password)) = get_test_credentials() else {
        eprintln!("Skipping test_progress: credentials not set");
        return;
    };

    let stdout = run_cli_success(
        &["progress"],
        &[("MYSTAT_USERNAME", username.as_str()), ("MYSTAT_PASSWORD", password.as_str())],
    )
    .await;
    let progress: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(progress["visits"].is_array());
    assert!(progress["attendance"].is_array());
}
