//! Kernel configuration, loaded from `config.toml`.
//!
//! ```toml
//! name = "dosh"
//! root = "/home/amy/dosh"        # holds devices/<category>/<drive>/
//! trash_dir = "user/trashbin"    # relative to the root of A:
//!
//! [aliases]
//! cls = "echo"
//! ```

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::vfs::DEFAULT_TRASH_DIR;

/// Configuration for a [`Kernel`](crate::Kernel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// System name shown in the prompt and banners.
    #[serde(default = "default_name")]
    pub name: String,

    /// System root containing `devices/`.
    #[serde(default = "paths::data_dir")]
    pub root: PathBuf,

    /// Trash directory, relative to the root of drive `A:`.
    #[serde(default = "default_trash_dir")]
    pub trash_dir: String,

    /// Extra aliases (alias → command). Override the built-in ones.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_name() -> String {
    "dosh".to_string()
}

fn default_trash_dir() -> String {
    DEFAULT_TRASH_DIR.to_string()
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            root: paths::data_dir(),
            trash_dir: default_trash_dir(),
            aliases: BTreeMap::new(),
        }
    }
}

impl KernelConfig {
    /// Load from the default config path, or defaults if no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "dosh").context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Use a different system root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// `<root>/devices`
    pub fn devices_dir(&self) -> PathBuf {
        self.root.join("devices")
    }

    /// Reject settings that would place the trash outside drive `A:`.
    pub fn validate(&self) -> Result<()> {
        let trash = Path::new(&self.trash_dir);
        if self.trash_dir.trim_matches('/').is_empty() {
            bail!("trash_dir must name a directory below the root of A:");
        }
        if trash.is_absolute() || trash.components().any(|c| !matches!(c, Component::Normal(_))) {
            bail!("trash_dir must be a plain relative path, got {:?}", self.trash_dir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosh_testutil::TestRoot;

    #[test]
    fn defaults() {
        let config = KernelConfig::default();
        assert_eq!(config.name, "dosh");
        assert_eq!(config.trash_dir, "user/trashbin");
        assert!(config.aliases.is_empty());
        assert!(config.devices_dir().ends_with("dosh/devices"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: KernelConfig = toml::from_str(
            r#"
            name = "retro"

            [aliases]
            cls = "echo"
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "retro");
        assert_eq!(config.trash_dir, "user/trashbin");
        assert_eq!(config.aliases.get("cls").map(String::as_str), Some("echo"));
    }

    #[test]
    fn load_from_file() {
        let root = TestRoot::new();
        let path = root.path().join("config.toml");
        std::fs::write(&path, "root = \"/srv/dosh\"\ntrash_dir = \"recycle\"\n").unwrap();

        let config = KernelConfig::load_from(&path).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/dosh"));
        assert_eq!(config.trash_dir, "recycle");

        std::fs::write(&path, "name = [").unwrap();
        let err = KernelConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn trash_dir_must_stay_inside_a() {
        for bad in ["/abs", "../out", "user/../../x", "", "/"] {
            let config = KernelConfig {
                trash_dir: bad.to_string(),
                ..KernelConfig::default()
            };
            assert!(config.validate().is_err(), "{bad:?} accepted");
        }
    }
}
