use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::error::InstallError;

pub const PLUGIN_NAME: &str = "MzkVisualizer";
pub const PLUGIN_VERSION: &str = "0.8.1";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub plugin: Plugin,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Plugin {
    /// Directory name used under `<static>/plugins/`.
    pub name: String,
    pub version: String,
    /// Bundled asset tree. Relative paths resolve against the working directory.
    /// Defaults to `plugins/<name>/assets/` when unset.
    pub assets_dir: Option<String>,
}

impl Default for Plugin {
    fn default() -> Self {
        Self {
            name: PLUGIN_NAME.into(),
            version: PLUGIN_VERSION.into(),
            assets_dir: None,
        }
    }
}

impl Config {
    /// Built-in defaults unless an override file is given. A given file must exist.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let Some(p) = path else {
            return Ok(Config::default());
        };
        let file = PathBuf::from(shellexpand::tilde(p).into_owned());
        let s = fs::read_to_string(&file)
            .with_context(|| format!("reading config at {}", file.display()))?;
        let cfg = Self::from_toml(&s)
            .with_context(|| format!("parsing config at {}", file.display()))?;
        tracing::debug!(path = %file.display(), plugin = %cfg.plugin.name, "config loaded");
        Ok(cfg)
    }

    fn from_toml(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s)?;
        let name = cfg.plugin.name.trim();
        // the name becomes a single path component under plugins/
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(InstallError::Config {
                reason: format!("plugin name '{}' is not a valid directory name", cfg.plugin.name),
            }
            .into());
        }
        Ok(cfg)
    }

    /// Asset source directory as configured, `~` expanded.
    pub fn assets_dir(&self) -> PathBuf {
        match &self.plugin.assets_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).into_owned()),
            None => PathBuf::from("plugins").join(&self.plugin.name).join("assets"),
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "> ManaZeakPluginInstall for {} - Version {}",
            self.plugin.name, self.plugin.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_bundled_plugin() {
        let cfg = Config::load_or_default(None).unwrap();
        assert_eq!(cfg.plugin.name, "MzkVisualizer");
        assert_eq!(cfg.assets_dir(), Path::new("plugins/MzkVisualizer/assets"));
        assert_eq!(
            cfg.banner(),
            "> ManaZeakPluginInstall for MzkVisualizer - Version 0.8.1"
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let td = tempdir().unwrap();
        let file = td.path().join("install.toml");
        fs::write(&file, "[plugin]\nname = \"MzkWorldMap\"\n").unwrap();

        let cfg = Config::load_or_default(Some(file.to_str().unwrap())).unwrap();
        assert_eq!(cfg.plugin.name, "MzkWorldMap");
        assert_eq!(cfg.plugin.version, PLUGIN_VERSION);
        assert_eq!(cfg.assets_dir(), Path::new("plugins/MzkWorldMap/assets"));
    }

    #[test]
    fn explicit_assets_dir_wins() {
        let cfg = Config::from_toml("[plugin]\nassets_dir = \"/opt/mzk/assets/\"\n").unwrap();
        assert_eq!(cfg.assets_dir(), Path::new("/opt/mzk/assets/"));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_names() {
        let err = Config::from_toml("[plugin]\nnmae = \"x\"\n").unwrap_err();
        assert!(err.downcast_ref::<toml::de::Error>().is_some());

        for bad in ["../etc", ""] {
            let err = Config::from_toml(&format!("[plugin]\nname = {:?}\n", bad)).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<InstallError>(),
                Some(InstallError::Config { .. })
            ));
        }
    }

    #[test]
    fn missing_override_file_keeps_io_error() {
        let td = tempdir().unwrap();
        let missing = td.path().join("nope.toml");
        let err = Config::load_or_default(Some(missing.to_str().unwrap())).unwrap_err();

        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        let msg = format!("{:#}", err);
        assert!(msg.starts_with("reading config at "), "{msg}");
        assert!(msg.contains("nope.toml"), "{msg}");
    }

    #[test]
    fn malformed_file_names_the_file() {
        let td = tempdir().unwrap();
        let file = td.path().join("broken.toml");
        fs::write(&file, "[plugin\n").unwrap();

        let err = Config::load_or_default(Some(file.to_str().unwrap())).unwrap_err();
        assert!(err.downcast_ref::<toml::de::Error>().is_some());
        assert!(format!("{:#}", err).starts_with("parsing config at "));
    }
}
