//! End-to-end tests of the `askbox` binary against a mock server.

mod common;

use common::Sandbox;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_signin(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .and(body_json(json!({"username": "alice", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "AT1",
            "refreshToken": "RT1"
        })))
        .mount(server)
        .await;
}

fn login(sandbox: &Sandbox) {
    sandbox.run_success(&["login", "--username", "alice", "--password", "hunter2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_without_session() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new(&server.uri());

    let stdout = sandbox.run_success(&["whoami", "--json"]);
    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(summary["authenticated"], json!(false));
    assert!(!sandbox.session_file().exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_anonymous_private_route_redirects_to_login() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new(&server.uri());

    let stdout = sandbox.run_success(&["navigate", "/profile"]);
    assert!(stdout.contains("redirect Login /login"), "stdout: {}", stdout);

    let stdout = sandbox.run_success(&["navigate", "Home"]);
    assert!(stdout.contains("allow Home /"), "stdout: {}", stdout);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_persists_session_across_invocations() {
    let server = MockServer::start().await;
    mount_signin(&server).await;
    let sandbox = Sandbox::new(&server.uri());

    let stdout = sandbox.run_success(&["login", "--username", "alice", "--password", "hunter2"]);
    assert!(stdout.contains("Logged in successfully"));
    assert!(!stdout.contains("AT1"));

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(sandbox.session_file()).unwrap()).unwrap();
    assert_eq!(stored, json!({"accessToken": "AT1", "refreshToken": "RT1"}));

    let stdout = sandbox.run_success(&["whoami", "--json"]);
    assert!(!stdout.contains("AT1"));
    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(summary["authenticated"], json!(true));

    let stdout = sandbox.run_success(&["navigate", "/login", "--json"]);
    let decision: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(
        decision,
        json!({"outcome": "redirect", "route": "Profile", "path": "/profile"})
    );

    let stdout = sandbox.run_success(&["navigate", "Profile"]);
    assert!(stdout.contains("allow Profile /profile"), "stdout: {}", stdout);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(&server)
        .await;
    let sandbox = Sandbox::new(&server.uri());

    let stderr = sandbox.run_failure(&["login", "--username", "alice", "--password", "nope"]);
    assert!(stderr.contains("HTTP 401"), "stderr: {}", stderr);
    assert!(stderr.contains("Invalid credentials"), "stderr: {}", stderr);
    assert!(!sandbox.session_file().exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_clears_session_when_server_fails() {
    let server = MockServer::start().await;
    mount_signin(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("authorization", "Bearer AT1"))
        .and(body_json(json!({"refreshToken": "RT1"})))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    let sandbox = Sandbox::new(&server.uri());

    login(&sandbox);
    assert!(sandbox.session_file().exists());

    let stdout = sandbox.run_success(&["logout"]);
    assert!(stdout.contains("Logged out"));
    assert!(!sandbox.session_file().exists());

    let stdout = sandbox.run_success(&["navigate", "/profile"]);
    assert!(stdout.contains("redirect Login"), "stdout: {}", stdout);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_sends_stored_token() {
    let server = MockServer::start().await;
    mount_signin(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("authorization", "Bearer AT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "u1", "username": "alice"},
            {"_id": "u2", "username": "bob"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let sandbox = Sandbox::new(&server.uri());

    login(&sandbox);
    let stdout = sandbox.run_success(&["users", "--json"]);

    let names: Vec<String> = stdout
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .map(|user| user["username"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["alice", "bob"]);
}

#[test]
fn test_routes_lists_default_table() {
    let sandbox = Sandbox::new("http://localhost:4000");
    let stdout = sandbox.run_success(&["routes", "--json"]);

    let routes: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let names: Vec<&str> = routes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Home", "Login", "Signup", "Profile"]);
    assert_eq!(routes[3]["access"], json!("private"));
    assert_eq!(routes[1]["access"], json!("auth-only"));
}
