//! Integration tests for the trellis binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FLOWLOOPS_SORTED: &str = "\
icons/icon-192.png
icons/icon-512.png
index.html
manifest.json
scripts/main.js
scripts/notificationManager.js
scripts/panels/buttonsPanel.js
scripts/panels/historySidebar.js
scripts/panels/titlePanel.js
scripts/timerManager.js
service-worker.js
sounds/click.mp3
styles/animations.css
styles/main.css
styles/tailwind.css
";

/// Command isolated from the user's config and environment.
fn trellis(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("trellis");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("TRELLIS_DEFAULTS__ROOT")
        .env_remove("TRELLIS_OUTPUT__FORMAT");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_creates_the_skeleton_and_lists_it() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .args(["new", "site"])
        .assert()
        .success()
        .stdout(FLOWLOOPS_SORTED);

    for line in FLOWLOOPS_SORTED.lines() {
        let path = tmp.path().join("site").join(line);
        assert!(path.is_file(), "{line} missing");
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }
}

#[test]
fn new_defaults_to_current_directory() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path()).arg("new").assert().success();
    assert!(tmp.path().join("index.html").is_file());
    assert!(tmp.path().join("scripts/panels/titlePanel.js").is_file());
}

#[test]
fn second_run_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path()).args(["new", "site"]).assert().success();
    fs::write(tmp.path().join("site/styles/main.css"), "body {}").unwrap();

    trellis(tmp.path())
        .args(["new", "site"])
        .assert()
        .success()
        .stdout(FLOWLOOPS_SORTED)
        .stderr(predicate::str::contains("0 created, 15 already present"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("site/styles/main.css")).unwrap(),
        "body {}"
    );
}

#[test]
fn last_wins_skips_the_first_root_entry() {
    let tmp = TempDir::new().unwrap();
    let expected: String = FLOWLOOPS_SORTED
        .lines()
        .filter(|l| *l != "index.html")
        .map(|l| format!("{l}\n"))
        .collect();

    trellis(tmp.path())
        .args(["new", "site", "--duplicates", "last-wins"])
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("14 created"));
    assert!(!tmp.path().join("site/index.html").exists());
}

#[test]
fn report_includes_unrelated_files() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("site")).unwrap();
    fs::write(tmp.path().join("site/README.md"), "notes").unwrap();

    trellis(tmp.path())
        .args(["new", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md\n"));
}

#[test]
fn no_report_prints_no_listing() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .args(["new", "site", "--no-report"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(tmp.path().join("site/index.html").is_file());
}

#[test]
fn dry_run_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .args(["new", "site", "--dry-run"])
        .assert()
        .success()
        .stdout(FLOWLOOPS_SORTED)
        .stderr(predicate::str::contains("Dry run"));

    assert!(!tmp.path().join("site").exists());
}

#[test]
fn show_matches_what_new_creates() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(FLOWLOOPS_SORTED);
}

#[test]
fn human_format_is_a_titled_table() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .args(["--no-color", "--output-format", "human", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FlowLoops Vanilla Scaffold\n"))
        .stdout(predicate::str::contains("Created Files"))
        .stdout(predicate::str::contains(" 0  icons/icon-192.png"))
        .stdout(predicate::str::contains("14  styles/tailwind.css"));
}

#[test]
fn json_output_is_a_listing() {
    let tmp = TempDir::new().unwrap();
    let out = trellis(tmp.path())
        .args(["new", "site", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(listing["title"], "FlowLoops Vanilla Scaffold");
    assert_eq!(listing["column"], "Created Files");
    assert_eq!(listing["rows"].as_array().unwrap().len(), 15);
}

#[test]
fn csv_output_has_header() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .args(["show", "--output-format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created Files\nicons/icon-192.png\n"));
}

#[test]
fn definition_file_is_used() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("tiny.toml"),
        r#"
        [scaffold]
        name = "Tiny"
        column = "Files"

        [[entries]]
        folder = "public"
        files = ["index.html", "js/app.js"]
        "#,
    )
    .unwrap();

    trellis(tmp.path())
        .args(["new", "out", "--definition", "tiny.toml"])
        .assert()
        .success()
        .stdout("public/index.html\npublic/js/app.js\n");
    assert!(tmp.path().join("out/public/js/app.js").is_file());
}

#[test]
fn list_shows_builtins() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("flowloops-vanilla"));
}

#[test]
fn config_set_then_get() {
    let tmp = TempDir::new().unwrap();
    // an explicit --config file must exist
    fs::write(tmp.path().join("my.toml"), "").unwrap();
    trellis(tmp.path())
        .args(["--config", "my.toml", "config", "set", "defaults.root", "www"])
        .assert()
        .success();

    trellis(tmp.path())
        .args(["--config", "my.toml", "config", "get", "defaults.root"])
        .assert()
        .success()
        .stdout("www\n");

    trellis(tmp.path())
        .args(["--config", "my.toml", "new"])
        .assert()
        .success();
    assert!(tmp.path().join("www/index.html").is_file());
}

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".trellis.toml"), "[defaults]\nroot = \"a\"\n").unwrap();

    trellis(tmp.path())
        .env("TRELLIS_DEFAULTS__ROOT", "b")
        .args(["new", "--no-report"])
        .assert()
        .success();
    assert!(tmp.path().join("b/index.html").is_file());
    assert!(!tmp.path().join("a").exists());
}

#[test]
fn init_local_writes_loadable_config() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(tmp.path().join(".trellis.toml").is_file());

    trellis(tmp.path())
        .args(["config", "get", "defaults.builtin"])
        .assert()
        .success()
        .stdout("flowloops-vanilla\n");
}

#[test]
fn completions_bash() {
    let tmp = TempDir::new().unwrap();
    trellis(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}
