//! Config file path resolution.
//!
//! Picks the primary config file from explicit option, environment
//! variable, or a name derived from the application, then locates the
//! optional mode-specific variant next to it. Relative paths resolve
//! against the application home directory.

use crate::ConfigMap;
use heck::ToSnakeCase;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit default config file path.
pub const ENV_CONFIG: &str = "LAYERCONF_CONFIG";

/// Environment variable naming the declared application name, used for
/// filename derivation.
pub const ENV_APP: &str = "LAYERCONF_APP";

/// Source of process-environment lookups.
///
/// Core logic never reads the process environment directly; `register`
/// passes a source in, so tests can inject values.
pub trait EnvSource {
    /// Look up an environment variable.
    fn var(&self, key: &str) -> Option<String>;

    /// Path of the running executable.
    fn current_exe(&self) -> Option<PathBuf>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn current_exe(&self) -> Option<PathBuf> {
        std::env::current_exe().ok()
    }
}

/// Options accepted by `load`, `parse`, and `register`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    /// Explicit config file path, overriding discovery.
    pub file: Option<PathBuf>,
    /// File extension used when deriving a filename (default `conf`).
    pub ext: Option<String>,
    /// Lowest-precedence layer, beneath both config files.
    pub default: Option<ConfigMap>,
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Extension appended to the derived application name.
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    /// Default mapping layered beneath the config files.
    pub fn with_default(mut self, default: ConfigMap) -> Self {
        self.default = Some(default);
        self
    }
}

/// Config file paths resolved for one registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Absolute path of the primary config file. Not checked for existence.
    pub primary: PathBuf,
    /// Absolute path of the mode-specific file. Present only if the file
    /// exists on disk.
    pub mode_specific: Option<PathBuf>,
}

/// Derive the filename stem for the application.
///
/// Prefers the declared application name (decamelized), falling back to the
/// running executable's file name with its extension stripped.
pub fn app_stem(env: &dyn EnvSource, declared: Option<&str>) -> String {
    if let Some(name) = declared {
        return name.to_snake_case();
    }

    env.current_exe()
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| "config".to_string())
}

/// Resolve the primary and mode-specific config file paths.
///
/// Primary filename precedence: `options.file`, then `env_config_path`,
/// then `<app_stem>.<ext>`. The mode-specific variant exists only when the
/// primary file name carries an extension and the variant file is actually
/// on disk; the check happens here, not in the loader.
pub fn resolve(
    options: &ConfigOptions,
    env_config_path: Option<&str>,
    app_stem: &str,
    home_dir: &Path,
    mode: &str,
) -> ResolvedPaths {
    let file = options
        .file
        .clone()
        .or_else(|| env_config_path.map(PathBuf::from))
        .unwrap_or_else(|| {
            let ext = options.ext.as_deref().unwrap_or("conf");
            PathBuf::from(format!("{app_stem}.{ext}"))
        });

    let primary = absolutize(file, home_dir);

    let mode_specific = mode_variant(&primary, mode).filter(|path| path.is_file());

    ResolvedPaths {
        primary,
        mode_specific,
    }
}

fn absolutize(file: PathBuf, home_dir: &Path) -> PathBuf {
    if file.is_absolute() {
        file
    } else {
        home_dir.join(file)
    }
}

/// `<stem>.<ext>` becomes `<stem>.<mode>.<ext>`. A file name without an
/// extension (including dotfiles) has no mode variant.
fn mode_variant(primary: &Path, mode: &str) -> Option<PathBuf> {
    let ext = primary.extension()?.to_str()?;
    let stem = primary.file_stem()?.to_str()?;
    Some(primary.with_file_name(format!("{stem}.{mode}.{ext}")))
}
