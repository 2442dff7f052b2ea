//! Generation pipeline orchestration.
//!
//! A [`Generator`] runs the three phases of a build in order:
//!
//! ```text
//! 1. load_data      portfolio.json        → Profile
//! 2. render_site    Profile + template    → dist/index.html
//! 3. copy_assets    static/               → dist/
//! ```
//!
//! Phases form an explicit state machine
//! (`Uninitialized → DataLoaded → Rendered → Complete`, or `Failed` from any
//! state) so an out-of-order call is a well-defined [`GenerateError::NotLoaded`]
//! instead of a render over empty data. Nothing is retried and a generator is
//! not resumable: one instance, one run, per process.
//!
//! There is no transactional guarantee across phases. If rendering succeeds
//! and the asset copy then fails, `index.html` and any assets already copied
//! stay on disk.

use crate::assets::{self, AssetError};
use crate::load::{self, LoadError};
use crate::profile::Profile;
use crate::render::{self, RenderError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Assets(#[from] AssetError),
    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("profile data not loaded")]
    NotLoaded,
}

/// Pipeline state. Advances strictly forward; any phase error parks the
/// generator in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    DataLoaded,
    Rendered,
    Complete,
    Failed,
}

/// One generation run: owns the configured paths and, once loaded, the
/// profile for the duration of the run.
pub struct Generator {
    data_path: PathBuf,
    template_path: PathBuf,
    static_dir: PathBuf,
    output_dir: PathBuf,
    profile: Option<Profile>,
    state: State,
}

impl Generator {
    pub fn new(
        data_path: &Path,
        template_path: &Path,
        static_dir: &Path,
        output_dir: &Path,
    ) -> Self {
        Self {
            data_path: data_path.to_path_buf(),
            template_path: template_path.to_path_buf(),
            static_dir: static_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            profile: None,
            state: State::Uninitialized,
        }
    }

    /// Phase 1: read and decode the profile document.
    pub fn load_data(&mut self) -> Result<(), GenerateError> {
        self.guard(State::Uninitialized)?;
        match load::load(&self.data_path) {
            Ok(profile) => {
                self.profile = Some(profile);
                self.state = State::DataLoaded;
                Ok(())
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Phase 2: render the template against the loaded profile and write
    /// `index.html` into the output directory.
    pub fn render_site(&mut self) -> Result<(), GenerateError> {
        self.guard(State::DataLoaded)?;
        // The guard holds, so the profile is present.
        let profile = self.profile.as_ref().ok_or(GenerateError::NotLoaded)?;

        let html = match render::render(profile, &self.template_path) {
            Ok(html) => html,
            Err(e) => return self.fail(e.into()),
        };

        if let Err(source) = fs::create_dir_all(&self.output_dir) {
            let path = self.output_dir.clone();
            return self.fail(GenerateError::OutputWrite { path, source });
        }

        let index_path = self.output_dir.join("index.html");
        if let Err(source) = fs::write(&index_path, html) {
            return self.fail(GenerateError::OutputWrite {
                path: index_path,
                source,
            });
        }

        self.state = State::Rendered;
        Ok(())
    }

    /// Phase 3: mirror the static asset tree into the output directory.
    /// Returns the number of files copied.
    pub fn copy_assets(&mut self) -> Result<usize, GenerateError> {
        self.guard(State::Rendered)?;
        match assets::copy_tree(&self.static_dir, &self.output_dir) {
            Ok(copied) => {
                self.state = State::Complete;
                Ok(copied)
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Run the full pipeline. The first failing phase halts the run and its
    /// error is returned as-is.
    pub fn run(&mut self) -> Result<usize, GenerateError> {
        self.load_data()?;
        self.render_site()?;
        self.copy_assets()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The loaded profile, if phase 1 has completed.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    fn guard(&self, expected: State) -> Result<(), GenerateError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GenerateError::NotLoaded)
        }
    }

    fn fail<T>(&mut self, error: GenerateError) -> Result<T, GenerateError> {
        self.state = State::Failed;
        Err(error)
    }
}
