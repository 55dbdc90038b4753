//! Config file reading.

use crate::error::{ConfigError, Result};
use crate::{parse, ConfigMap};
use std::path::Path;
use tracing::debug;

/// Read a config file as UTF-8 text and parse it into a mapping.
pub fn load(path: &Path) -> Result<ConfigMap> {
    debug!(path = %path.display(), "reading config file");

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse::parse(&content, path)
}
