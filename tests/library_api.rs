// tests/library_api.rs

mod common;

use seqls::config::{ConfigBuilder, SortKey};
use seqls::errors::{Error, Result};
use seqls::{
    execute, list_directory, CancellationToken, DirEntry, EntrySource, ListingKind, LocalFs,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::{tempdir, TempDir};

// --- Test Harness for reducing boilerplate ---

/// A helper struct to manage the environment for a single library API test.
struct TestHarness {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    fn file(&self, path: &str, size: usize) {
        let full_path = self.root.join(path);
        fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        fs::write(full_path, vec![0u8; size]).unwrap();
    }

    fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new().path(self.root.to_str().unwrap())
    }
}

/// A directory tree held in memory, for listings without a filesystem.
#[derive(Default)]
struct MemoryTree {
    dirs: HashMap<PathBuf, Vec<DirEntry>>,
}

impl MemoryTree {
    fn with_dir(mut self, path: &str, children: Vec<DirEntry>) -> Self {
        self.dirs.insert(PathBuf::from(path), children);
        self
    }
}

impl EntrySource for MemoryTree {
    fn list_children(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        self.dirs.get(dir).cloned().ok_or_else(|| Error::NotFound {
            path: dir.display().to_string(),
        })
    }

    fn stat(&self, path: &Path) -> Result<DirEntry> {
        if self.dirs.contains_key(path) {
            return Ok(DirEntry::directory(path));
        }
        Err(Error::NotFound {
            path: path.display().to_string(),
        })
    }
}

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

#[test]
fn test_list_directory_from_disk() {
    let harness = TestHarness::new();
    for frame in 1..=4 {
        harness.file(&format!("comp.{:04}.exr", frame), 250);
    }
    harness.file("comp.0010.exr", 250);
    harness.file("notes.md", 3);

    let config = harness.builder().build().unwrap();
    let entries = list_directory(&LocalFs, &harness.root, &config).unwrap();

    assert_eq!(entries.len(), 2);
    let seq = &entries[0];
    assert_eq!(seq.name, "comp.1-4,10.exr");
    assert_eq!(seq.size, 1250);
    let sequence = seq.sequence().expect("should be a sequence");
    assert_eq!(sequence.len(), 5);
    assert_eq!(sequence.member_names()[4], "comp.0010.exr");
    for name in sequence.member_names() {
        assert!(harness.root.join(name).exists());
    }
    assert_eq!(entries[1].kind, ListingKind::File);
}

#[test]
fn test_sequence_metadata_from_members() {
    let tree = MemoryTree::default().with_dir(
        "/show",
        vec![
            DirEntry::file("/show/bg.10.tif", 100)
                .with_modified(at(50))
                .with_owner("ana"),
            DirEntry::file("/show/bg.11.tif", 200)
                .with_modified(at(90))
                .with_owner("ben"),
            DirEntry::file("/show/bg.12.tif", 300).with_modified(at(70)),
        ],
    );
    let config = ConfigBuilder::new().path("/show").build().unwrap();
    let entries = list_directory(&tree, Path::new("/show"), &config).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "bg.10-12.tif");
    assert_eq!(entries[0].size, 600);
    assert_eq!(entries[0].modified, at(90));
    assert_eq!(entries[0].owner, "ana");
    assert_eq!(entries[0].path, PathBuf::from("/show/bg.10-12.tif"));
}

#[test]
fn test_execute_partial_failure() {
    let tree = MemoryTree::default()
        .with_dir("/a", vec![DirEntry::file("/a/one.txt", 1)])
        .with_dir("/c", vec![DirEntry::file("/c/three.txt", 1)]);
    let config = ConfigBuilder::new()
        .paths(["/a", "/b", "/c"])
        .show_info(false)
        .sort(SortKey::Name)
        .build()
        .unwrap();

    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    let report = execute(
        &tree,
        &config,
        &CancellationToken::new(),
        &mut out,
        &mut diagnostics,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "/a:\none.txt\n\n/c:\nthree.txt\n"
    );
    assert_eq!(
        String::from_utf8(diagnostics).unwrap(),
        "seqls: /b: No such file or directory\n"
    );
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.listings_written, 2);
}

#[test]
fn test_execute_interrupted_before_first_directory() {
    let harness = TestHarness::new();
    harness.file("a.txt", 1);
    let config = harness.builder().build().unwrap();

    let token = CancellationToken::new();
    token.cancel();
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    let result = execute(&LocalFs, &config, &token, &mut out, &mut diagnostics);

    assert!(matches!(result, Err(Error::Interrupted)));
    assert!(out.is_empty());
}

#[test]
fn test_range_expression_parses_display_form() {
    let harness = TestHarness::new();
    for frame in [1, 2, 3, 5, 7, 8, 9] {
        harness.file(&format!("f.{}.png", frame), 1);
    }
    let config = harness.builder().build().unwrap();
    let entries = list_directory(&LocalFs, &harness.root, &config).unwrap();
    let sequence = entries[0].sequence().unwrap();

    let rendered = sequence.frames.to_string();
    assert_eq!(rendered, "1-3,5,7-9");
    let parsed: seqls::RangeExpression = rendered.parse().unwrap();
    assert_eq!(parsed, sequence.frames);
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_do_not_stop_the_run() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let harness = TestHarness::new();
    let odd = harness.root.join("a");
    fs::create_dir(&odd).unwrap();
    fs::write(odd.join(OsStr::from_bytes(b"s\xff.1.png")), b"x").unwrap();
    fs::write(odd.join(OsStr::from_bytes(b"s\xfe.1.png")), b"x").unwrap();
    harness.file("b/ok.txt", 1);

    let config = ConfigBuilder::new()
        .paths([
            odd.to_str().unwrap().to_string(),
            harness.root.join("b").to_str().unwrap().to_string(),
        ])
        .show_info(false)
        .build()
        .unwrap();

    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    let report = execute(
        &LocalFs,
        &config,
        &CancellationToken::new(),
        &mut out,
        &mut diagnostics,
    )
    .unwrap();

    assert!(!report.has_failures());
    assert!(diagnostics.is_empty());
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("s\u{FFFD}.1.png\n").count(), 2);
    assert!(out.ends_with("ok.txt\n"));
}
