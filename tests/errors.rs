// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, seqls_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_path_reports_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "dir/x.txt", 1)?;

    seqls_cmd()
        .args(["-I", "non_existent_path_hopefully", "dir"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "seqls: non_existent_path_hopefully: No such file or directory",
        ))
        .stdout("dir:\nx.txt\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_each_failed_path_gets_one_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let output = seqls_cmd()
        .args(["missing_one", "missing_two"])
        .current_dir(temp.path())
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(
        stderr,
        "seqls: missing_one: No such file or directory\n\
         seqls: missing_two: No such file or directory\n"
    );
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_empty_path_is_rejected() {
    seqls_cmd()
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for PATH"));
}

#[test]
fn test_invalid_column_count() {
    seqls_cmd()
        .args(["--columns", "-3"])
        .assert()
        .failure()
        .code(2);
}

#[cfg(unix)]
#[test]
fn test_symlink_in_directory_is_listed_as_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "target/x.txt", 1)?;
    std::os::unix::fs::symlink(temp.path().join("target"), temp.path().join("link"))?;

    let output = seqls_cmd().arg(temp.path()).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let link_line = stdout
        .lines()
        .find(|l| l.starts_with("link"))
        .expect("link should be listed");
    assert!(link_line.starts_with("link   File"));
    assert!(stdout.lines().next().unwrap_or("").starts_with("target Dir "));
    Ok(())
}
