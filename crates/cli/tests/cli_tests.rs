//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("readtime");
    cmd.env(readtime_core::CONFIG_DIR_ENV, "/nonexistent/readtime-config");
    cmd
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("article.html")).unwrap();
    cmd().arg("-").write_stdin(html).assert().success().stdout("3\n");
}

#[test]
fn test_cli_inline_stdin() {
    cmd()
        .arg("-")
        .write_stdin("<article><p>one two three</p></article>")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_cli_no_article() {
    cmd()
        .arg(get_fixture_path("no_article.html"))
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("article.html")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["minutes"], 3);
    assert_eq!(json["word_count"], 653);
    assert_eq!(json["from_article"], true);
    assert!(json["source_url"].is_null());
}

#[test]
fn test_cli_wpm() {
    cmd()
        .args(["--wpm", "100", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_cli_rounding() {
    cmd()
        .args(["--rounding", "ceil", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_cli_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.json");
    std::fs::write(&config, r#"{ "words_per_minute": 100.0 }"#).unwrap();

    cmd()
        .args(["-c", config.to_str().unwrap(), &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout("7\n");

    cmd()
        .args(["-c", config.to_str().unwrap(), "--wpm", "200"])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_cli_config_dir_env() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.json"), r#"{ "words_per_minute": 100.0 }"#).unwrap();

    cmd()
        .env(readtime_core::CONFIG_DIR_ENV, tmp.path())
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout("7\n");

    cmd()
        .env(readtime_core::CONFIG_DIR_ENV, tmp.path().join("missing"))
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_cli_missing_config_file() {
    cmd()
        .args(["-c", "/nonexistent/readtime.json", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn test_cli_invalid_wpm() {
    cmd()
        .args(["--wpm", "0", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("words_per_minute"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", &get_fixture_path("article.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("minutes.txt");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(output).unwrap(), "3\n");
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.html").assert().failure();
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout("3\n")
        .stderr(predicate::str::contains("readtime"))
        .stderr(predicate::str::contains("653"));
}

#[test]
fn test_cli_unreachable_url() {
    cmd()
        .args(["--timeout", "2", "http://127.0.0.1:9/post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch URL"));
}

#[test]
fn test_cli_unreachable_url_fallback() {
    cmd()
        .args(["--timeout", "2", "--fallback-zero", "-f", "json", "http://127.0.0.1:9/post"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""minutes": 0"#))
        .stdout(predicate::str::contains("http://127.0.0.1:9/post"));
}
