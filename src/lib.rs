//! Layered application configuration.
//!
//! Loads a JSON config file, optionally layered with a mode-specific
//! override file and a programmatic default, and merges the layers into a
//! single shared mapping owned by the host application:
//! 1. **Default** - `ConfigOptions::default` (lowest precedence)
//! 2. **Primary file** - `<home>/<app>.<ext>` (default ext `conf`)
//! 3. **Mode file** - `<home>/<app>.<mode>.<ext>`, if it exists (highest)
//!
//! ## Merge Strategy
//! Layers combine per top-level key: higher layers override lower ones,
//! values are replaced wholesale (no recursive merging).
//!
//! ## Environment Variables
//! - `LAYERCONF_CONFIG` - Default config file path (used when
//!   `ConfigOptions::file` is not set)
//! - `LAYERCONF_APP` - Declared application name for filename derivation
//!
//! Both are consumed through [`EnvSource`], so tests can inject values
//! instead of touching the process environment.

pub mod error;
pub mod load;
pub mod merge;
pub mod parse;
pub mod paths;
pub mod register;

pub use error::{ConfigError, Result};
pub use load::load;
pub use parse::parse;
pub use paths::{ConfigOptions, EnvSource, ProcessEnv, ResolvedPaths, ENV_APP, ENV_CONFIG};
pub use register::{register, register_with_env, ConfigHost, SharedConfig};

/// A configuration mapping: string keys to arbitrary JSON values.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;
