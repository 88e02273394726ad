use std::fs;
use std::path::Path;
use crate::core::library::{LibraryError, LibraryResult};

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn read_all(path: &Path) -> LibraryResult<String> {
    fs::read_to_string(path).map_err(|err| storage_error("read", path, err))
}

// Writes the whole content, truncating whatever was there and creating missing parent
// directories first.
pub fn write_all(path: &Path, content: &str) -> LibraryResult<()> {
    ensure_parent_dirs(path)?;
    fs::write(path, content).map_err(|err| storage_error("write", path, err))
}

pub fn ensure_parent_dirs(path: &Path) -> LibraryResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            fs::create_dir_all(dir).map_err(|err| storage_error("create directories for", path, err))
        }
        _ => Ok(()),
    }
}

// Deleting a file that is already gone counts as success.
pub fn delete(path: &Path) -> LibraryResult<()> {
    if !exists(path) {
        return Ok(());
    }
    fs::remove_file(path).map_err(|err| storage_error("delete", path, err))
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> LibraryError {
    LibraryError::storage(
        format!("failed to {} {}: {}", action, path.display(), err).as_str(),
        Some(path.display().to_string()))
}
