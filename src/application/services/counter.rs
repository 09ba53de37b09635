//! Character counting service

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::CharCount;
use crate::infrastructure::traits::FileSystem;

pub struct CharCountService {
    fs: Arc<dyn FileSystem>,
}

impl CharCountService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Count `e`/`E` characters and all characters in the file at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn count(&self, path: &Path) -> ApplicationResult<CharCount> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::NotFound(path.to_path_buf()));
        }
        let text = self
            .fs
            .read_to_string(path)
            .with_path_context("read", path)?;
        let count = CharCount::tally(&text);
        debug!("count: {:?}", count);
        Ok(count)
    }
}
