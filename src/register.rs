//! Merge engine and the shared configuration handle.
//!
//! `register` resolves the config file paths, loads whichever layers exist,
//! combines them (default < primary file < mode file), and writes the
//! result into the host's shared configuration in place, so references
//! handed out earlier observe the update.

use crate::error::{ConfigError, Result};
use crate::merge::overlay_all;
use crate::paths::{self, ConfigOptions, EnvSource, ProcessEnv, ENV_APP, ENV_CONFIG};
use crate::{load, ConfigMap};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Stable handle to the application-wide configuration mapping.
///
/// Cloning is cheap and every clone refers to the same mapping; `register`
/// replaces keys through the handle without replacing the mapping itself.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<ConfigMap>>,
}

impl SharedConfig {
    /// An empty shared mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read(|map| map.get(key).cloned())
    }

    /// Snapshot of the full mapping at this moment.
    pub fn snapshot(&self) -> ConfigMap {
        self.read(Clone::clone)
    }

    pub fn is_empty(&self) -> bool {
        self.read(ConfigMap::is_empty)
    }

    pub fn len(&self) -> usize {
        self.read(ConfigMap::len)
    }

    /// Whether two handles refer to the same mapping.
    pub fn same_handle(&self, other: &SharedConfig) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn read<T>(&self, f: impl FnOnce(&ConfigMap) -> T) -> T {
        match self.inner.read() {
            Ok(map) => f(&map),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Merge `layer` in, overriding existing keys per top-level key.
    fn apply(&self, layer: ConfigMap) {
        let mut map = match self.inner.write() {
            Ok(map) => map,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (key, value) in layer {
            map.insert(key, value);
        }
    }
}

/// Host application surface consumed by `register`.
pub trait ConfigHost {
    /// Application home directory; relative config paths resolve against it.
    fn home_dir(&self) -> &Path;

    /// Environment label (e.g. `development`, `production`) selecting the
    /// optional override file.
    fn mode(&self) -> &str;

    /// Declared application name, decamelized into the config file stem.
    fn app_name(&self) -> Option<&str> {
        None
    }

    /// The application-wide configuration handle. Implementations create it
    /// on first use and return the same handle on every call.
    fn shared_config(&self) -> &SharedConfig;
}

/// Load the host's configuration and merge it into its shared mapping.
///
/// Reads the process environment for overrides; see [`register_with_env`]
/// for injected environments.
pub fn register(host: &dyn ConfigHost, options: &ConfigOptions) -> Result<SharedConfig> {
    register_with_env(host, options, &ProcessEnv)
}

/// Like [`register`], with an explicit environment source.
pub fn register_with_env(
    host: &dyn ConfigHost,
    options: &ConfigOptions,
    env: &dyn EnvSource,
) -> Result<SharedConfig> {
    let declared = env.var(ENV_APP);
    let stem = paths::app_stem(env, declared.as_deref().or_else(|| host.app_name()));

    let env_config = env.var(ENV_CONFIG);
    let resolved = paths::resolve(
        options,
        env_config.as_deref(),
        &stem,
        host.home_dir(),
        host.mode(),
    );
    debug!(
        primary = %resolved.primary.display(),
        mode_specific = ?resolved.mode_specific,
        "resolved config paths"
    );

    let primary_exists = resolved.primary.is_file();
    if !primary_exists && options.default.is_none() && resolved.mode_specific.is_none() {
        return Err(ConfigError::Missing {
            path: resolved.primary,
        });
    }

    // Precedence, lowest to highest: default < primary file < mode file.
    let mut layers: Vec<ConfigMap> = Vec::new();
    if let Some(default) = &options.default {
        layers.push(default.clone());
    }
    if primary_exists {
        layers.push(load::load(&resolved.primary)?);
    }
    if let Some(mode_path) = &resolved.mode_specific {
        layers.push(load::load(mode_path)?);
    }

    let shared = host.shared_config();
    shared.apply(overlay_all(layers));
    Ok(shared.clone())
}
