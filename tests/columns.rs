mod common;

use assert_cmd::prelude::*;
use common::{create_file, create_frames, seqls_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_three_columns_single_row() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_frames(temp.path(), "shot.", ".png", 3, &[1, 2, 3, 5], 1)?;
    create_file(temp.path(), "readme.txt", 1)?;
    fs::create_dir(temp.path().join("assets"))?;

    seqls_cmd()
        .args(["-c", "3"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("assets  readme.txt  shot.1-3,5.png\n");
    Ok(())
}

#[test]
fn test_columns_align_per_column() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    for name in ["a", "bbbb", "cc", "dddddd", "e"] {
        create_file(temp.path(), name, 1)?;
    }

    seqls_cmd()
        .args(["--columns", "2"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("a   bbbb\ncc  dddddd\ne\n");
    Ok(())
}

#[test]
fn test_zero_columns_is_one_entry_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a", 1)?;
    create_file(temp.path(), "b", 1)?;

    seqls_cmd()
        .args(["-I", "-c", "0"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("a\nb\n");
    Ok(())
}
