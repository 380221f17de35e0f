use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `depgraph` command isolated from the user's config and environment.
#[allow(deprecated)]
fn depgraph_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("depgraph").unwrap();
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("DEPGRAPH_INPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn write_deps(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_resolve_prints_tree() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(
        tmp.path(),
        "deps.json",
        r#"{"app": ["http", "json"], "http": ["socket"], "json": [], "socket": []}"#,
    );

    depgraph_cmd(tmp.path())
        .arg("resolve")
        .arg(&deps)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "app\n├── http\n│   └── socket\n└── json\nhttp\n└── socket\njson\nsocket\n",
        ))
        .stderr(predicate::str::contains("Resolved"));
}

#[test]
fn test_resolve_json_output() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(tmp.path(), "deps.json", r#"{"a": [], "b": []}"#);

    let output = depgraph_cmd(tmp.path())
        .args(["resolve", "--format", "json"])
        .arg(&deps)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let compact: String = stdout.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(compact, r#"{"a":{},"b":{}}"#);
}

#[test]
fn test_resolve_depth_limit() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(
        tmp.path(),
        "deps.json",
        r#"{"a": ["b"], "b": ["c"], "c": []}"#,
    );

    depgraph_cmd(tmp.path())
        .args(["resolve", "--depth", "1"])
        .arg(&deps)
        .assert()
        .success()
        .stdout("a\n└── b\nb\n└── c\nc\n");
}

#[test]
fn test_resolve_toml_input() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(tmp.path(), "deps.toml", "web = [\"log\"]\nlog = []\n");

    depgraph_cmd(tmp.path())
        .arg("resolve")
        .arg(&deps)
        .assert()
        .success()
        .stdout(predicate::str::contains("web\n└── log\n"));
}

#[test]
fn test_resolve_cycle_fails() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(tmp.path(), "deps.json", r#"{"a": ["b"], "b": ["a"]}"#);

    depgraph_cmd(tmp.path())
        .arg("resolve")
        .arg(&deps)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cyclic dependency detected: a"));
}

#[test]
fn test_resolve_missing_fails() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(tmp.path(), "deps.json", r#"{"a": ["b"]}"#);

    depgraph_cmd(tmp.path())
        .arg("resolve")
        .arg(&deps)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing dependency: b"));
}

#[test]
fn test_resolve_unreadable_input_fails() {
    let tmp = TempDir::new().unwrap();

    depgraph_cmd(tmp.path())
        .arg("resolve")
        .arg(tmp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_resolve_reads_env_path() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(tmp.path(), "from-env.json", r#"{"solo": []}"#);

    depgraph_cmd(tmp.path())
        .env("DEPGRAPH_INPUT", &deps)
        .arg("resolve")
        .assert()
        .success()
        .stdout("solo\n");
}

#[test]
fn test_resolve_uses_config_defaults() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(tmp.path(), "configured.json", r#"{"x": ["y"], "y": []}"#);
    let config_dir = tmp.path().join(".depgraph");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[input]\npath = {:?}\n\n[output]\nformat = \"json\"\n",
            deps.to_string_lossy()
        ),
    )
    .unwrap();

    depgraph_cmd(tmp.path())
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"x\""))
        .stdout(predicate::str::contains("└──").not());
}

#[test]
fn test_resolve_falls_back_when_config_is_invalid() {
    let tmp = TempDir::new().unwrap();
    let deps = write_deps(tmp.path(), "deps.json", r#"{"x": ["y"], "y": []}"#);
    let config_dir = tmp.path().join(".depgraph");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[output]\nformat = \"yaml\"\n",
    )
    .unwrap();

    depgraph_cmd(tmp.path())
        .arg("resolve")
        .arg(&deps)
        .assert()
        .success()
        .stdout("x\n└── y\ny\n")
        .stderr(predicate::str::contains("Failed to load global config"));
}

#[test]
fn test_resolve_rejects_unknown_format() {
    let tmp = TempDir::new().unwrap();

    depgraph_cmd(tmp.path())
        .args(["resolve", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}
