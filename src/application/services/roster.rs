//! Roster service
//!
//! Loads roster files into hierarchies and writes hierarchies back.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Hierarchy, Roster, RosterBuilder};
use crate::infrastructure::traits::FileSystem;

/// Service for reading and writing TOML roster files.
pub struct RosterService {
    fs: Arc<dyn FileSystem>,
}

impl RosterService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and build the hierarchy described by the roster at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Hierarchy> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::NotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read roster", path)?;
        let roster = Self::parse(&content, path)?;
        debug!("load: {} entries in {}", roster.staff.len(), path.display());
        Ok(RosterBuilder::new().build(&roster)?)
    }

    pub fn parse(content: &str, path: &Path) -> ApplicationResult<Roster> {
        toml::from_str(content).map_err(|e| ApplicationError::Roster {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write `hierarchy` to `path`, replacing the previous content.
    #[instrument(level = "debug", skip(self, hierarchy))]
    pub fn save(&self, path: &Path, hierarchy: &Hierarchy) -> ApplicationResult<()> {
        let roster = Roster::from_hierarchy(hierarchy)?;
        let content = toml::to_string_pretty(&roster).map_err(|e| ApplicationError::Roster {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.fs
            .write(path, &content)
            .with_path_context("write roster", path)
    }
}
