// unemoji/tests/cli_integration_tests.rs
//! CLI integration tests for the `unemoji` binary.
//!
//! Each test runs the built executable against files in a fresh temporary
//! directory and checks both the console report and the resulting file
//! contents. Output is captured through pipes, so it is never colored.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn unemoji_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("unemoji"));
    cmd.current_dir(cwd);
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("UNEMOJI_DOCS_DIR");
    cmd
}

#[test]
fn test_single_file_is_cleaned() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("status.md");
    fs::write(&path, "Status: \u{2705} done")?;

    unemoji_cmd(dir.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("Processing: {}\n  -> Cleaned\n", path.display()));

    assert_eq!(fs::read_to_string(&path)?, "Status: [OK] done");
    Ok(())
}

#[test]
fn test_relative_file_argument() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("plan.md"), "\u{1F3AF} goal \u{2192} ship \u{1F389}")?;

    unemoji_cmd(dir.path())
        .arg("plan.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing: plan.md"));

    assert_eq!(fs::read_to_string(dir.path().join("plan.md"))?, "[TARGET] goal -> ship [SUCCESS]");
    Ok(())
}

#[test]
fn test_clean_file_reports_no_changes() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("plain.md");
    fs::write(&path, "# Nothing fancy\n")?;
    let before = fs::metadata(&path)?.modified()?;

    unemoji_cmd(dir.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("  -> No changes needed"));

    assert_eq!(fs::metadata(&path)?.modified()?, before);
    Ok(())
}

#[test]
fn test_default_mode_sweeps_docs_markdown_only() -> Result<()> {
    let dir = tempdir()?;
    let docs = dir.path().join("docs");
    fs::create_dir(&docs)?;
    fs::write(docs.join("a.md"), "ready \u{1F680}")?;
    fs::write(docs.join("b.txt"), "ready \u{1F680}")?;

    unemoji_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md").and(predicate::str::contains("b.txt").not()));

    assert_eq!(fs::read_to_string(docs.join("a.md"))?, "ready [START]");
    assert_eq!(fs::read_to_string(docs.join("b.txt"))?, "ready \u{1F680}");
    Ok(())
}

#[test]
fn test_docs_dir_flag_and_env() -> Result<()> {
    let dir = tempdir()?;
    let flagged = dir.path().join("manual");
    let from_env = dir.path().join("guide");
    fs::create_dir(&flagged)?;
    fs::create_dir(&from_env)?;
    fs::write(flagged.join("x.md"), "\u{1F4DA}")?;
    fs::write(from_env.join("y.md"), "\u{1F511}")?;

    unemoji_cmd(dir.path()).args(["--docs-dir", "manual"]).assert().success();
    assert_eq!(fs::read_to_string(flagged.join("x.md"))?, "[DOCS]");

    unemoji_cmd(dir.path()).env("UNEMOJI_DOCS_DIR", &from_env).assert().success();
    assert_eq!(fs::read_to_string(from_env.join("y.md"))?, "[KEY]");
    Ok(())
}

#[test]
fn test_dry_run_with_diff() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("draft.md");
    fs::write(&path, "intro\n\u{26A0}\u{FE0F} beware\n")?;

    unemoji_cmd(dir.path())
        .args(["--dry-run", "--diff"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("  -> Would clean")
                .and(predicate::str::contains("-\u{26A0}\u{FE0F} beware"))
                .and(predicate::str::contains("+[WARNING] beware")),
        );

    assert_eq!(fs::read_to_string(&path)?, "intro\n\u{26A0}\u{FE0F} beware\n");
    Ok(())
}

#[test]
fn test_summary_on_stderr() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("s.md");
    fs::write(&path, "\u{2705}\u{2705} \u{1F30D}")?;

    unemoji_cmd(dir.path())
        .arg("--summary")
        .arg(&path)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("U+2705 -> [OK] x2")
                .and(predicate::str::contains("other emoji removed: 1")),
        );
    Ok(())
}

#[test]
fn test_quiet_suppresses_progress() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("q.md");
    fs::write(&path, "\u{1F525}")?;

    unemoji_cmd(dir.path()).arg("-q").arg(&path).assert().success().stdout("");
    assert_eq!(fs::read_to_string(&path)?, "[HOT]");
    Ok(())
}

#[test]
fn test_missing_file_fails() -> Result<()> {
    let dir = tempdir()?;

    unemoji_cmd(dir.path())
        .arg("absent.md")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Processing: absent.md"))
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("absent.md")));
    Ok(())
}

#[test]
fn test_missing_docs_dir_fails() -> Result<()> {
    let dir = tempdir()?;

    unemoji_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("docs"));
    Ok(())
}

#[test]
fn test_invalid_utf8_fails_without_touching_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("bad.md");
    fs::write(&path, [0xc3, 0x28, 0xff])?;

    unemoji_cmd(dir.path())
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));

    assert_eq!(fs::read(&path)?, vec![0xc3, 0x28, 0xff]);
    Ok(())
}

#[test]
fn test_debug_and_quiet_conflict() {
    let dir = tempdir().unwrap();
    unemoji_cmd(dir.path()).args(["--debug", "--quiet"]).assert().failure();
}
