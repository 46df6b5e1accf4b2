// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn seqls_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("seqls"));
    // Keep stderr free of debug logging so diagnostics can be matched.
    cmd.env("RUST_LOG", "seqls=warn");
    cmd
}

/// Writes `size` bytes to `dir/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, size: usize) -> std::io::Result<()> {
    let path = dir.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, vec![b'x'; size])
}

/// Creates the frames `prefix{n:0padding$}suffix` for every `n` in `frames`.
#[allow(dead_code)]
pub fn create_frames(
    dir: &Path,
    prefix: &str,
    suffix: &str,
    padding: usize,
    frames: &[u64],
    size: usize,
) -> std::io::Result<()> {
    for frame in frames {
        let name = format!("{}{:0width$}{}", prefix, frame, suffix, width = padding);
        create_file(dir, &name, size)?;
    }
    Ok(())
}
