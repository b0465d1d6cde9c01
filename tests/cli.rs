use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// Build an `sb` command isolated to `root` (no global config leakage).
fn sb(root: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sb").unwrap();
    cmd.env("SB_ROOT", root)
        .env("SB_CONFIG", root.join("config.toml"))
        .env_remove("SB_RESOURCE")
        .env_remove("SB_STORAGE_KEY");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sb").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sb").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_seeds_and_list_shows_order() {
    let dir = tempdir().unwrap();

    let json = stdout_json(sb(dir.path()).args(["--robot", "init"]));
    assert_eq!(json["status"], "ok");
    assert_eq!(json["key"], "sb-skills-order");

    let json = stdout_json(sb(dir.path()).args(["--robot", "list"]));
    assert_eq!(json["status"], "ok");
    assert_eq!(json["seeded"], Value::Bool(true));
    let skills = json["skills"].as_array().unwrap();
    assert!(!skills.is_empty());
    assert_eq!(skills[0]["position"], 1);
    assert_eq!(skills[0]["id"], "TypeScript");
}

#[test]
fn test_init_twice_reports_already_initialized() {
    let dir = tempdir().unwrap();

    sb(dir.path()).args(["init"]).assert().success();
    sb(dir.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_move_changes_persisted_order() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();

    let json = stdout_json(sb(dir.path()).args(["--robot", "move", "TypeScript", "React"]));
    assert_eq!(json["changed"], Value::Bool(true));
    let order: Vec<String> = json["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    // TypeScript takes React's original slot; JavaScript and React shift left.
    assert_eq!(&order[..3], &["JavaScript", "React", "TypeScript"]);

    // The move survives a fresh invocation.
    let json = stdout_json(sb(dir.path()).args(["--robot", "list"]));
    assert_eq!(json["skills"][2]["id"], "TypeScript");
}

#[test]
fn test_move_unknown_skill_is_noop() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();

    let before = stdout_json(sb(dir.path()).args(["--robot", "list"]));
    let json = stdout_json(sb(dir.path()).args(["--robot", "move", "Cobol", "React"]));
    assert_eq!(json["changed"], Value::Bool(false));
    let after = stdout_json(sb(dir.path()).args(["--robot", "list"]));
    assert_eq!(before["skills"], after["skills"]);
}

#[test]
fn test_sync_live_reconciles_against_remote() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!(["Go", "TypeScript", "Elixir"]));
    });

    let json = stdout_json(
        sb(dir.path())
            .env("SB_RESOURCE", server.url("/skills.json"))
            .args(["--robot", "sync"]),
    );
    assert_eq!(json["provenance"], "live");
    assert_eq!(json["changed"], Value::Bool(true));
    assert_eq!(json["order"], serde_json::json!(["TypeScript", "Go", "Elixir"]));
    assert_eq!(json["added"], serde_json::json!(["Elixir"]));

    // Second sync against the same canonical list is a no-op.
    let json = stdout_json(
        sb(dir.path())
            .env("SB_RESOURCE", server.url("/skills.json"))
            .args(["--robot", "sync"]),
    );
    assert_eq!(json["changed"], Value::Bool(false));
}

#[test]
fn test_sync_falls_back_on_server_error() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.json");
        then.status(500);
    });

    let json = stdout_json(
        sb(dir.path())
            .env("SB_RESOURCE", server.url("/skills.json"))
            .args(["--robot", "sync"]),
    );
    assert_eq!(json["provenance"], "fallback");
    // Fallback equals the seeded order, so nothing changes.
    assert_eq!(json["changed"], Value::Bool(false));
}

#[test]
fn test_sync_empty_remote_list_keeps_board() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let json = stdout_json(
        sb(dir.path())
            .env("SB_RESOURCE", server.url("/skills.json"))
            .args(["--robot", "sync"]),
    );
    assert_eq!(json["provenance"], "live");
    assert_eq!(json["changed"], Value::Bool(false));
    assert!(!json["order"].as_array().unwrap().is_empty());
}

#[test]
fn test_sync_offline_uses_placeholder() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();

    let json = stdout_json(sb(dir.path()).args(["--robot", "sync", "--offline"]));
    assert_eq!(json["provenance"], "placeholder");
    assert_eq!(json["changed"], Value::Bool(true));
    assert_eq!(
        json["order"],
        serde_json::json!(["TypeScript", "JavaScript", "React", "Python"])
    );
}

#[test]
fn test_sync_preserves_custom_order_for_survivors() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();
    sb(dir.path())
        .args(["--robot", "move", "Python", "TypeScript"])
        .assert()
        .success();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!(["TypeScript", "Python", "Kotlin"]));
    });

    let json = stdout_json(
        sb(dir.path())
            .env("SB_RESOURCE", server.url("/skills.json"))
            .args(["--robot", "sync"]),
    );
    // Python was moved ahead of TypeScript; that customization survives.
    assert_eq!(
        json["order"],
        serde_json::json!(["Python", "TypeScript", "Kotlin"])
    );
}

#[test]
fn test_reset_requires_force() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();
    sb(dir.path())
        .args(["--robot", "move", "CSS", "TypeScript"])
        .assert()
        .success();

    let json = stdout_json(sb(dir.path()).args(["--robot", "reset"]));
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "approval_required");

    let json = stdout_json(sb(dir.path()).args(["--robot", "reset", "--force"]));
    assert_eq!(json["status"], "ok");

    let json = stdout_json(sb(dir.path()).args(["--robot", "list"]));
    assert_eq!(json["skills"][0]["id"], "TypeScript");
}

#[test]
fn test_malformed_storage_degrades_to_fallback() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();
    std::fs::write(dir.path().join("sb-skills-order.json"), "{broken").unwrap();

    let json = stdout_json(sb(dir.path()).args(["--robot", "list"]));
    assert_eq!(json["seeded"], Value::Bool(false));
    assert_eq!(json["skills"][0]["id"], "TypeScript");
}

#[test]
fn test_doctor_reports_healthy_board() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();

    let json = stdout_json(sb(dir.path()).args(["--robot", "doctor", "--no-network"]));
    assert_eq!(json["status"], "ok");
    assert_eq!(json["report"]["order_state"], "ok");
    assert_eq!(json["report"]["healthy"], Value::Bool(true));
}

#[test]
fn test_doctor_flags_malformed_order() {
    let dir = tempdir().unwrap();
    sb(dir.path()).args(["--robot", "init"]).assert().success();
    std::fs::write(dir.path().join("sb-skills-order.json"), "[1, 2]").unwrap();

    let json = stdout_json(sb(dir.path()).args(["--robot", "doctor", "--no-network"]));
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["report"]["order_state"], "malformed");
}

#[test]
fn test_config_file_overrides_storage_key() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[storage]
key = "my-board"
"#,
    )
    .unwrap();

    let json = stdout_json(sb(dir.path()).args(["--robot", "init"]));
    assert_eq!(json["key"], "my-board");
    assert!(dir.path().join("my-board.json").exists());
}
