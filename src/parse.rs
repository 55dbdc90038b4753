//! Config content parsing.
//!
//! Config files are UTF-8 JSON whose top-level value must be an object.
//! The content is inert data; nothing from the host application is exposed
//! to it during parsing.

use crate::error::{ConfigError, Result};
use crate::ConfigMap;
use serde_json::Value;
use std::path::Path;

/// Parse config file content into a key-value mapping.
///
/// `path` is attached to errors for context; the file is not touched here.
pub fn parse(content: &str, path: &Path) -> Result<ConfigMap> {
    let value: Value = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::Schema {
            path: path.to_path_buf(),
        }),
    }
}
