//! Profile loading.
//!
//! Reads the JSON profile document and decodes it into a [`Profile`]. Both
//! failure modes are fatal to the run: either the source can't be read
//! ([`LoadError::SourceUnavailable`]) or it can't be decoded
//! ([`LoadError::MalformedData`]). There is no best-effort or partial decode
//! — a profile either loads completely or not at all.

use crate::profile::Profile;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read profile data {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse profile data {path}: {source}")]
    MalformedData {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and decode the profile document at `path`.
pub fn load(path: &Path) -> Result<Profile, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| LoadError::MalformedData {
        path: path.to_path_buf(),
        source,
    })
}
