mod common;

use assert_cmd::prelude::*;
use common::{create_file, create_frames, seqls_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_recursive_listing_is_depth_first() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "top.txt", 1)?;
    create_file(temp.path(), "a/inner.txt", 1)?;
    create_frames(&temp.path().join("a/deep"), "f.", ".tif", 2, &[1, 2, 3], 1)?;
    create_file(temp.path(), "b/other.txt", 1)?;

    seqls_cmd()
        .args(["-I", "-r", "."])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(
            ".:\na\nb\ntop.txt\n\n\
             ./a:\ndeep\ninner.txt\n\n\
             ./a/deep:\nf.1-3.tif\n\n\
             ./b:\nother.txt\n",
        );
    Ok(())
}

#[test]
fn test_hidden_entries_are_skipped_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), ".secret", 1)?;
    create_file(temp.path(), ".cache/blob", 1)?;
    create_file(temp.path(), "visible.txt", 1)?;

    seqls_cmd()
        .args(["-I", "-r", "."])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(".:\nvisible.txt\n")
        .stdout(predicate::str::contains("blob").not());

    seqls_cmd()
        .args(["-I", "-r", "-a", "."])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(".:\n.cache\n.secret\nvisible.txt\n\n./.cache:\nblob\n");
    Ok(())
}

#[test]
fn test_multiple_directories_are_labeled() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "one/x.txt", 1)?;
    create_file(temp.path(), "two/y.txt", 1)?;

    seqls_cmd()
        .args(["-I", "two", "one"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("two:\ny.txt\n\none:\nx.txt\n");
    Ok(())
}

#[test]
fn test_empty_subdirectory_prints_label_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    std::fs::create_dir(temp.path().join("empty"))?;

    seqls_cmd()
        .args(["-I", "-r", "."])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(".:\nempty\n\n./empty:\n");
    Ok(())
}
