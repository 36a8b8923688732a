//! Integration tests for the sunshop CLI.
//!
//! These tests verify end-to-end CLI behavior using assert_cmd. Commands
//! that reach the network run against a wiremock server.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sunshop_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sunshop").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SUNSHOP_API_URL")
        .env_remove("SUNSHOP_SESSION_FILE")
        .env_remove("SUNSHOP_NATIVE_VERBS")
        .env_remove("SUNSHOP_TIMEOUT_SECS");
    cmd
}

#[test]
fn cli_shows_help() {
    sunshop_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operator CLI for the SunShop store API"))
        .stdout(predicate::str::contains("admin"))
        .stdout(predicate::str::contains("customer"))
        .stdout(predicate::str::contains("--session-file"));
}

#[test]
fn cli_shows_version() {
    sunshop_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sunshop 0.1.0"));
}

#[test]
fn cli_requires_a_role() {
    sunshop_cmd().assert().failure();
}

#[test]
fn status_without_session_is_signed_out() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("session.json");

    sunshop_cmd()
        .arg("--session-file")
        .arg(&session)
        .args(["admin", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authenticated\": false"));

    assert!(!session.exists());
}

#[test]
fn customer_status_shows_cached_user() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("session.json");
    std::fs::write(
        &session,
        json!({"customerToken": "t", "customerUser": "{\"name\":\"Amara\"}"}).to_string(),
    )
    .unwrap();

    sunshop_cmd()
        .arg("--session-file")
        .arg(&session)
        .args(["customer", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authenticated\": true"))
        .stdout(predicate::str::contains("Amara"));
}

#[test]
fn logout_clears_only_its_role() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("session.json");
    std::fs::write(
        &session,
        json!({"adminToken": "a", "customerToken": "c"}).to_string(),
    )
    .unwrap();

    // Unroutable base URL: logout must not touch the network
    sunshop_cmd()
        .args(["--base-url", "http://127.0.0.1:9"])
        .arg("--session-file")
        .arg(&session)
        .args(["admin", "logout"])
        .assert()
        .success();

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&session).unwrap()).unwrap();
    assert_eq!(stored, json!({"customerToken": "c"}));
}

#[test]
fn invalid_base_url_fails() {
    let dir = tempdir().unwrap();

    sunshop_cmd()
        .args(["--base-url", "not a url"])
        .arg("--session-file")
        .arg(dir.path().join("session.json"))
        .args(["admin", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base URL"));
}

#[test]
fn cart_add_without_session_fails_fast() {
    let dir = tempdir().unwrap();

    sunshop_cmd()
        .args(["--base-url", "http://127.0.0.1:9"])
        .arg("--session-file")
        .arg(dir.path().join("session.json"))
        .args(["customer", "cart", "add", "--product-id", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sign in first"));
}

#[tokio::test]
async fn transactions_list_uses_stored_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/transactions"))
        .and(query_param("page", "2"))
        .and(query_param("status", "completed"))
        .and(header("authorization", "Bearer stored-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [{"id": 900, "amount": "42.00"}],
            "total": 11
        })))
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let session = dir.path().join("session.json");
    std::fs::write(&session, json!({"adminToken": "stored-admin"}).to_string()).unwrap();

    sunshop_cmd()
        .arg("--base-url")
        .arg(mock_server.uri())
        .arg("--session-file")
        .arg(&session)
        .args(["admin", "transactions", "list", "--page", "2", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 11"))
        .stdout(predicate::str::contains("900"));
}

#[tokio::test]
async fn backend_error_message_reaches_stderr() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard/stats"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Forbidden for staff role"})))
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();

    sunshop_cmd()
        .arg("--base-url")
        .arg(mock_server.uri())
        .arg("--session-file")
        .arg(dir.path().join("session.json"))
        .args(["admin", "dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 403: Forbidden for staff role"));
}
