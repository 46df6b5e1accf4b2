// src/discovery/entry_processor.rs

use crate::core_types::{DirEntry, EntryKind};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// Builds a `DirEntry` snapshot from a path and its metadata.
///
/// Anything that is not a directory (regular files, symlinks, devices) is
/// listed as a file. A missing modification time falls back to the epoch.
pub(crate) fn entry_from_metadata(path: &Path, metadata: &Metadata) -> DirEntry {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };
    DirEntry {
        name,
        path: path.to_path_buf(),
        kind,
        size: metadata.len(),
        owner: owner_of(metadata),
        permissions: permissions_of(metadata),
        modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
    }
}

#[cfg(unix)]
fn owner_of(metadata: &Metadata) -> String {
    use std::os::unix::fs::MetadataExt;
    owners::name_of(metadata.uid())
}

#[cfg(not(unix))]
fn owner_of(_metadata: &Metadata) -> String {
    String::new()
}

#[cfg(unix)]
fn permissions_of(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn permissions_of(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

#[cfg(unix)]
mod owners {
    use once_cell::sync::Lazy;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uzers::get_user_by_uid;

    /// Cache for uid to user name resolution.
    static OWNER_CACHE: Lazy<Mutex<HashMap<u32, String>>> = Lazy::new(|| Mutex::new(HashMap::new()));

    /// Resolves a uid to a user name, falling back to the numeric id.
    pub(super) fn name_of(uid: u32) -> String {
        if let Ok(cache) = OWNER_CACHE.lock() {
            if let Some(name) = cache.get(&uid) {
                return name.clone();
            }
        }
        let name = get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string());
        if let Ok(mut cache) = OWNER_CACHE.lock() {
            cache.insert(uid, name.clone());
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_entry_from_file_metadata() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("shot.0001.exr");
        fs::write(&file_path, "12345")?;
        let entry = entry_from_metadata(&file_path, &fs::metadata(&file_path)?);
        assert_eq!(entry.name, "shot.0001.exr");
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.size, 5);
        assert_eq!(entry.path, file_path);
        assert!(entry.modified > SystemTime::UNIX_EPOCH);
        #[cfg(unix)]
        assert!(!entry.owner.is_empty());
        Ok(())
    }

    #[test]
    fn test_entry_from_dir_metadata() -> std::io::Result<()> {
        let temp = tempdir()?;
        let dir_path = temp.path().join("assets");
        fs::create_dir(&dir_path)?;
        let entry = entry_from_metadata(&dir_path, &fs::metadata(&dir_path)?);
        assert_eq!(entry.kind, EntryKind::Directory);
        assert_eq!(entry.name, "assets");
        Ok(())
    }
}
