use std::path::{is_separator, Path, PathBuf};

use crate::config::Config;
use crate::error::InstallError;

/// Destination root of the host's static files, e.g. `/srv/static/`.
///
/// The raw string is kept so messages echo exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPath(String);

impl StaticPath {
    /// Only checks the trailing separator; existence and permissions are left to the
    /// filesystem calls that follow.
    pub fn parse(raw: &str) -> Result<Self, InstallError> {
        match raw.chars().last() {
            Some(c) if is_separator(c) => Ok(Self(raw.to_owned())),
            _ => Err(InstallError::InvalidPath {
                path: raw.to_owned(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// All resolved paths one run touches.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    /// Bundled assets, read only (e.g. plugins/MzkVisualizer/assets/)
    pub source_dir: PathBuf,
    /// Shared by every plugin of the host, never removed (e.g. /srv/static/plugins/)
    pub plugins_dir: PathBuf,
    /// Owned by this plugin (e.g. /srv/static/plugins/MzkVisualizer/)
    pub target_dir: PathBuf,
    /// The static path and `target_dir` spelled the way the user typed them, for messages
    pub static_display: String,
    pub target_display: String,
}

impl InstallPaths {
    pub fn resolve(cfg: &Config, static_path: &StaticPath) -> Self {
        let plugins_dir = static_path.as_path().join("plugins");
        let target_dir = plugins_dir.join(&cfg.plugin.name);
        let target_display = format!("{}plugins/{}/", static_path.as_str(), cfg.plugin.name);

        let paths = Self {
            source_dir: cfg.assets_dir(),
            plugins_dir,
            target_dir,
            static_display: static_path.as_str().to_owned(),
            target_display,
        };
        tracing::debug!(
            source = %paths.source_dir.display(),
            plugins = %paths.plugins_dir.display(),
            target = %paths.target_dir.display(),
            "resolved install paths"
        );
        paths
    }
}
