#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movies"))
        .stdout(predicate::str::contains("books"))
        .stdout(predicate::str::contains("weather"));
}

#[test]
fn test_movies_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.args(["movies", "search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_movies_search_missing_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.args(["movies", "search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_movies_search_type_rejects_unknown_type() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.args(["movies", "search-type", "--query", "batman", "--type", "game"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown media type"));
}

#[test]
fn test_movies_without_api_key_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.env_remove("OMDB_API_KEY")
        .arg("--dir")
        .arg(dir.path())
        .args(["movies", "search", "--query", "batman"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OMDB_API_KEY"));
}

#[test]
fn test_invalid_config_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[books\n").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["books", "search", "--query", "dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_relative_config_dir_resolves_from_working_directory() {
    // Arrange
    let work = tempfile::tempdir().unwrap();
    std::fs::create_dir(work.path().join("conf")).unwrap();
    std::fs::write(
        work.path().join("conf").join("config.toml"),
        "[books]\nlimit = 0\n",
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.current_dir(work.path())
        .args(["--dir", "conf", "books", "search", "--query", "dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit must be at least 1"));
}

#[test]
fn test_books_search_requires_one_field() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.args(["books", "search", "--title", "dune", "--author", "herbert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_books_search_blank_query_prints_no_results() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.env("RUST_LOG", "info")
        .arg("--dir")
        .arg(dir.path())
        .args(["books", "search", "--query", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));
}

#[test]
fn test_books_search_json_stdout_is_bare_document() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.env("RUST_LOG", "info")
        .arg("--dir")
        .arg(dir.path())
        .args(["--json", "books", "search", "--query", "   "])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_books_search_json_ignores_log_level() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act
    let output = cargo_bin_cmd!("mediahub")
        .env("RUST_LOG", "warn")
        .arg("--dir")
        .arg(dir.path())
        .args(["--json", "books", "search", "--query", "   "])
        .output()
        .unwrap();

    // Assert
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn test_books_search_zero_limit_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["books", "search", "--query", "dune", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit must be at least 1"));
}

#[test]
fn test_weather_blank_location_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mediahub");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["weather", "--location", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("location name must not be empty"));
}
