#![allow(dead_code)]

use std::process::Output;

use serde_json::{Value, json};
use tokio::process::Command;

const ENV_VARS: &[&str] = &[
    "BIRTHDAYS_API_URL",
    "BIRTHDAYS_RESOURCE",
    "BIRTHDAYS_AUTH_API_KEY",
    "BIRTHDAYS_EMAIL",
    "BIRTHDAYS_PASSWORD",
    "RUST_LOG",
];

/// Run the CLI binary against the given API base, isolated from the caller's environment.
pub async fn run_cli(api_url: &str, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_birthdays"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd.arg("--api-url").arg(api_url);
    cmd.args(args);
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub async fn run_cli_success(api_url: &str, args: &[&str]) -> String {
    let output = run_cli(api_url, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure; returns stderr.
pub async fn run_cli_failure(api_url: &str, args: &[&str]) -> String {
    let output = run_cli(api_url, args).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn record(id: i64, name: &str, year: i32, month: u32, day: u32) -> Value {
    json!({
        "id": id,
        "userId": "",
        "name": name,
        "birthYear": year,
        "birthMonth": month,
        "birthDayOfMonth": day,
        "remarks": "",
        "pictureUrl": null,
        "age": 0
    })
}
