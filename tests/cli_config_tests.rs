//! End-to-end tests for `folio config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "show"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("127.0.0.1:8080"));
    assert!(stdout.contains("(built-in)"));
}

#[test]
fn test_config_show_json_schema() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "show", "--json"]);
    assert_exit(&output, 0);

    let result = stdout_json(&output);
    assert!(result["paths"].is_object(), "Should have paths object");
    assert_eq!(result["server"]["host"], "127.0.0.1");
    assert_eq!(result["server"]["port"], 8080);
    assert_eq!(result["build"]["output_dir"], "dist");
    assert_eq!(result["viewport"]["reveal_threshold"], 0.3);
}

#[test]
fn test_config_path_honours_override() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "path"]);
    assert_exit(&output, 0);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        ws.config_path().display().to_string()
    );
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_server_and_threshold() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "config", "set", "--host", "0.0.0.0", "--port", "9000", "--threshold", "0.5",
    ]);
    assert_exit(&output, 0);
    assert!(ws.config_path().is_file());

    let result = stdout_json(&ws.run(&["config", "show", "--json"]));
    assert_eq!(result["server"]["host"], "0.0.0.0");
    assert_eq!(result["server"]["port"], 9000);
    assert_eq!(result["viewport"]["reveal_threshold"], 0.5);
}

#[test]
fn test_config_set_paths() {
    let ws = Workspace::new();
    let media = ws.media_dir();
    let content = ws.write_content("content.toml", &renamed_content("Ada"));

    let output = ws.run(&[
        "config",
        "set",
        "--media-dir",
        media.to_str().unwrap(),
        "--content",
        content.to_str().unwrap(),
    ]);
    assert_exit(&output, 0);

    let saved = fs::read_to_string(ws.config_path()).unwrap();
    assert!(saved.contains("media_dir"));
    assert!(saved.contains("content.toml"));
}

#[test]
fn test_config_set_requires_an_option() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "set"]);
    assert_exit(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one"));
}

#[test]
fn test_config_set_rejects_out_of_range_threshold() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "set", "--threshold", "1.5"]);
    assert_exit(&output, 1);
    assert!(!ws.config_path().exists(), "invalid config must not be saved");
}

#[test]
fn test_config_set_rejects_missing_directory() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "set", "--wasm-dir", "nowhere"]);
    assert_exit(&output, 1);
}

#[test]
fn test_corrupt_config_is_reported() {
    let ws = Workspace::new();
    fs::write(ws.config_path(), "[server\nport = ").unwrap();

    let output = ws.run(&["config", "show"]);
    assert_exit(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
