use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::list::TaskList;
use crate::parse::{parse_list, serialize_list};

/// Directory under `$HOME` that holds the list files.
const DATA_DIR: &str = ".local/share/tick";
/// Extension appended to the list name.
const LIST_EXT: &str = "todo";

/// Error type for list I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ListIoError {
    #[error("cannot locate the data directory: $HOME is not set")]
    NoHome,
    #[error("could not create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of loading a list file.
#[derive(Debug)]
pub struct LoadedList {
    pub list: TaskList,
    /// Malformed lines skipped during parsing.
    pub dropped: Vec<String>,
    /// True when the file could not be opened: a brand-new list, not an
    /// error, and distinct from an existing empty list.
    pub is_new: bool,
}

/// Resolve the data directory, creating it with restrictive permissions if
/// it does not exist yet.
pub fn ensure_data_dir() -> Result<PathBuf, ListIoError> {
    let home = env::var("HOME").map_err(|_| ListIoError::NoHome)?;
    let dir = Path::new(&home).join(DATA_DIR);
    if !dir.is_dir() {
        create_dir_restricted(&dir).map_err(|e| ListIoError::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
    }
    Ok(dir)
}

#[cfg(unix)]
fn create_dir_restricted(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_dir_restricted(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

/// Path of the file backing the named list.
pub fn list_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(format!("{}.{}", name, LIST_EXT))
}

/// Load a list from `path`. An unopenable file is not an error: it means the
/// list is brand new. Malformed lines are skipped, logged to the recovery
/// log, and returned so the UI can mention them.
pub fn load_list(data_dir: &Path, path: &Path) -> LoadedList {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            return LoadedList {
                list: TaskList::new(),
                dropped: Vec::new(),
                is_new: true,
            };
        }
    };

    let (list, dropped) = parse_list(&source);
    if !dropped.is_empty() {
        recovery::log_recovery(
            data_dir,
            RecoveryEntry {
                timestamp: chrono::Utc::now(),
                category: RecoveryCategory::Parser,
                description: "skipped malformed lines".to_string(),
                fields: vec![("Source".to_string(), path.display().to_string())],
                body: dropped.join("\n"),
            },
        );
    }

    LoadedList {
        list,
        dropped,
        is_new: false,
    }
}

/// Save a list back to disk. On failure the in-memory list stays the source
/// of truth; the serialized content is captured in the recovery log and a
/// typed error is returned for the caller to report.
pub fn save_list(data_dir: &Path, path: &Path, list: &TaskList) -> Result<(), ListIoError> {
    let content = serialize_list(list);
    if let Err(e) = recovery::atomic_write(path, content.as_bytes()) {
        recovery::log_recovery(
            data_dir,
            RecoveryEntry {
                timestamp: chrono::Utc::now(),
                category: RecoveryCategory::Write,
                description: "list write failed".to_string(),
                fields: vec![
                    ("Target".to_string(), path.display().to_string()),
                    ("Error".to_string(), e.to_string()),
                ],
                body: content,
            },
        );
        return Err(ListIoError::WriteError {
            path: path.to_path_buf(),
            source: e,
        });
    }
    Ok(())
}
