//! Artifact store helpers for the shared documentation workdir.
//!
//! One flat directory holds transient JSON inputs and durable HTML
//! outputs; per-key isolation comes from the deterministic file names,
//! not from any directory-level lock.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Write `content` to `dir/file_name`, creating the directory when absent
/// (logged, not an error) and overwriting any previous file of that name.
pub fn write(dir: &Path, file_name: &str, content: &str) -> io::Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        info!(dir = %dir.display(), "created credential api workdir");
    }
    let path = dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}

/// Whether the named artifact is present in `dir`.
pub fn exists(dir: &Path, file_name: &str) -> bool {
    dir.join(file_name).exists()
}

/// Best-effort removal of a transient artifact. A removal failure is
/// logged, never escalated.
pub fn remove_quiet(path: &Path) {
    if !path.exists() {
        return;
    }
    match fs::remove_file(path) {
        Ok(()) => info!(file = %path.display(), "deleted temp file"),
        Err(err) => warn!(file = %path.display(), %err, "deleting temp file failed"),
    }
}
