//! Shared file plumbing: atomic writes and path expansion.

use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` to `path` atomically.
///
/// Atomic save: write to a temp file in the same directory, then rename
/// over the target, so a crash mid-write leaves the previous file intact
/// rather than a truncated one. The parent directory is created if it does
/// not exist.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    // `parent()` is Some("") for bare relative filenames; nothing to create.
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, contents)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Expand a leading `~/` to the user's home directory in a path string.
pub fn expand_home_dir(path: &str) -> String {
    if let Some(suffix) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(suffix).to_string_lossy().to_string();
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("settings.txt");

        write_atomic(&path, "hello\n").expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_atomic_replaces_existing_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("settings.txt");

        write_atomic(&path, "first\n").expect("write should succeed");
        write_atomic(&path, "second\n").expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("settings.txt");

        write_atomic(&path, "content").expect("write should succeed");

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("settings.txt")]);
    }

    #[test]
    fn test_write_atomic_creates_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("dir").join("settings.txt");

        write_atomic(&path, "content").expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_expand_home_dir() {
        if let Some(home) = dirs::home_dir() {
            let expanded = expand_home_dir("~/settings/.env");
            assert_eq!(
                expanded,
                home.join("settings/.env").to_string_lossy().to_string()
            );
        }
        // Paths without a ~/ prefix pass through untouched.
        assert_eq!(expand_home_dir("./relative/.env"), "./relative/.env");
        assert_eq!(expand_home_dir("/absolute/.env"), "/absolute/.env");
    }
}
