use std::process::Output;

/// Get test credentials from environment.
/// Returns None if not set, causing live tests to be skipped.
#[allow(dead_code)]
pub fn get_test_credentials() -> Option<(String, String)> {
    let username = std::env::var("MYSTAT_TEST_USERNAME").ok()?;
    let password = std::env::var("MYSTAT_TEST_PASSWORD").ok()?;
    Some((username, password))
}

/// Run the CLI binary with arguments and an environment scrubbed of
/// `MYSTAT_*` settings, so the caller's shell cannot leak into a test.
pub async fn run_cli(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_mystat"));
    cmd.args(args);
    for var in [
        "MYSTAT_USERNAME",
        "MYSTAT_PASSWORD",
        "MYSTAT_BASE_URL",
        "MYSTAT_LANGUAGE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.envs(env.iter().copied());
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success; returns stdout.
#[allow(dead_code)]
pub async fn run_cli_success(args: &[&str], env: &[(&str, &str)]) -> String {
    let output = run_cli(args, env).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure; returns stderr.
#[allow(dead_code)]
pub async fn run_cli_failure(args: &[&str], env: &[(&str, &str)]) -> String {
    let output = run_cli(args, env).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
