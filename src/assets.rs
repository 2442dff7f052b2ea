//! Static asset materialization.
//!
//! Mirrors the static asset tree (stylesheets, scripts, images) into the
//! output directory, preserving relative paths. Assets are copied byte for
//! byte — no minification, hashing, or rewriting.
//!
//! Traversal order carries no meaning; files are independent. Any I/O failure
//! during the walk, directory creation, or copy aborts the run with an
//! [`AssetError`] naming the offending path. Files already copied are left in
//! place — there is no rollback, matching the rest of the pipeline.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
#[error("failed to copy assets at {path}: {source}")]
pub struct AssetError {
    pub path: PathBuf,
    source: std::io::Error,
}

impl AssetError {
    fn new(path: &Path, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Recursively mirror `src` into `dst`. Returns the number of files copied.
///
/// Directory creation is idempotent, so `dst` (or parts of it) may already
/// exist from a previous run.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    let mut copied = 0;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            AssetError {
                source: e.into(),
                path,
            }
        })?;

        // WalkDir yields paths under src, so strip_prefix cannot fail here.
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let dest = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| AssetError::new(&dest, e))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| AssetError::new(parent, e))?;
            }
            fs::copy(entry.path(), &dest).map_err(|e| AssetError::new(entry.path(), e))?;
            copied += 1;
        }
    }

    Ok(copied)
}
