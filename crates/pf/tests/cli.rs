//! End-to-end tests for the `pf` binary.
//!
//! Each test runs the real binary with `PF_CONFIG` pointed into a temp
//! directory so the user's configuration is never read or written.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const FILTER: &str = r#"# Test filter
Show
    Class "Stackable Currency"
    BaseType "Divine Orb" "Mirror of Kalandra"
    SetTextColor 255 0 0
    SetFontSize 45
    PlayEffect Red

Hide
    Rarity Normal
    AreaLevel >= 68
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pf"));
        cmd.env("PF_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_preview_shown_item() {
    let ws = Workspace::new();
    let filter = ws.write("test.filter", FILTER);

    let output = ws.run(&[
        "preview",
        path_arg(&filter),
        "--base-type",
        "Divine Orb",
        "--class",
        "Stackable Currency",
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Divine Orb: Shown\nblock at line 2\n"));
    assert!(text.contains("rgb(255, 0, 0)"));
    assert!(text.contains("Red (#FF0000)"));
}

#[test]
fn test_preview_json_hidden_item() {
    let ws = Workspace::new();
    let filter = ws.write("test.filter", FILTER);

    let output = ws.run(&[
        "--json",
        "preview",
        path_arg(&filter),
        "-b",
        "Iron Ring",
        "-r",
        "Normal",
        "--area-level",
        "70",
    ]);

    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["result"]["isHidden"], true);
    assert_eq!(value["result"]["matchedLine"], 9);
    assert_eq!(value["item"]["areaLevel"], 70);
}

#[test]
fn test_preview_item_file_with_override() {
    let ws = Workspace::new();
    let filter = ws.write("test.filter", FILTER);
    let item = ws.write(
        "item.json",
        r#"{"baseType": "Iron Ring", "rarity": "Normal", "areaLevel": 70}"#,
    );

    let output = ws.run(&[
        "--json",
        "preview",
        path_arg(&filter),
        "--item",
        path_arg(&item),
        "--area-level",
        "10",
    ]);

    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["result"]["isHidden"], false);
    assert_eq!(value["result"]["matchedLine"], Value::Null);
    assert_eq!(value["result"]["style"]["fontSize"], 32);
}

#[test]
fn test_preview_from_stdin() {
    let ws = Workspace::new();
    let output = ws.run_with_stdin(
        &["--json", "preview", "-", "-b", "Mirror of Kalandra", "-c", "Currency"],
        FILTER,
    );

    // The currency alias runs one way: a "Currency" item is not
    // matched by Class "Stackable Currency".
    assert!(output.status.success());
    assert_eq!(json(&output)["result"]["matchedLine"], Value::Null);
}

#[test]
fn test_preview_uses_configured_default_filter() {
    let ws = Workspace::new();
    let filter = ws.write("league.filter", FILTER);

    let set = ws.run(&["config", "set", "preview.default_filter", path_arg(&filter)]);
    assert!(set.status.success());

    let output = ws.run(&[
        "--json",
        "preview",
        "-b",
        "Divine Orb",
        "-c",
        "Stackable Currency",
    ]);
    assert!(output.status.success());
    assert_eq!(json(&output)["result"]["style"]["fontSize"], 45);
}

#[test]
fn test_preview_without_filter_is_config_error() {
    let ws = Workspace::new();
    let output = ws.run(&["preview", "-b", "Divine Orb"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_preview_missing_filter_is_io_error() {
    let ws = Workspace::new();
    let output = ws.run(&["--json", "preview", "missing.filter", "-b", "Divine Orb"]);

    assert_eq!(output.status.code(), Some(3));
    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], "IO_ERROR");
}

#[test]
fn test_validate_valid_filter() {
    let ws = Workspace::new();
    let filter = ws.write("test.filter", FILTER);

    let output = ws.run(&["validate", path_arg(&filter)]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Filter is valid\n");
}

#[test]
fn test_validate_invalid_filter() {
    let ws = Workspace::new();
    let filter = ws.write("bad.filter", "Show\n    Rarity Unique\n    SetFontSize 99\nHide\n");

    let output = ws.run(&["validate", path_arg(&filter)]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains(":3: error: Font size must be between 18 and 45"));
    assert!(text.contains(":4: error: Final block has no conditions"));
    assert!(text.ends_with("2 errors, 0 warnings\n"));
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let ws = Workspace::new();
    let filter = ws.write("warn.filter", "Show\n    BaseType Chaos Orb\n");

    let lenient = ws.run(&["validate", path_arg(&filter)]);
    assert!(lenient.status.success());

    let strict = ws.run(&["--json", "validate", path_arg(&filter), "--strict"]);
    assert_eq!(strict.status.code(), Some(1));
    let value = json(&strict);
    assert_eq!(value["isValid"], false);
    assert_eq!(value["warningCount"], 1);
    let error: Value = serde_json::from_slice(&strict.stderr).unwrap();
    assert_eq!(error["error"]["code"], "INVALID_FILTER");
}

#[test]
fn test_validate_strict_from_config() {
    let ws = Workspace::new();
    let filter = ws.write("warn.filter", "Show\n    BaseType Chaos Orb\n");

    let set = ws.run(&["config", "set", "validate.warnings_as_errors", "true"]);
    assert!(set.status.success());

    let output = ws.run(&["validate", path_arg(&filter)]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_blocks_listing() {
    let ws = Workspace::new();
    let output = ws.run_with_stdin(&["--json", "blocks", "-"], FILTER);

    assert!(output.status.success());
    let value = json(&output);
    let blocks = value["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["visibility"], "Show");
    assert_eq!(blocks[1]["visibility"], "Hide");
    assert_eq!(blocks[1]["conditions"][1]["value"], 68);
}

#[test]
fn test_config_set_show_and_path() {
    let ws = Workspace::new();

    let path = ws.run(&["config", "path"]);
    assert_eq!(stdout(&path).trim(), ws.config_path().display().to_string());

    let set = ws.run(&["config", "set", "output.json", "yes"]);
    assert!(set.status.success());
    assert!(ws.config_path().exists());

    // output.json makes JSON the default format.
    let show = ws.run(&["config", "show"]);
    let value = json(&show);
    assert_eq!(value["exists"], true);
    assert_eq!(value["config"]["output"]["json"], true);
}

#[test]
fn test_config_set_unknown_key() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "set", "output.theme", "dark"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_completions() {
    let ws = Workspace::new();
    let output = ws.run(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("pf"));
}
