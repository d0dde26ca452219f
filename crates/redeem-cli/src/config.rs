//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `REDEEM_<SECTION>__<KEY>`, e.g. `REDEEM_DEFAULTS__USER=1`
//! 3. The file passed with `--config`
//! 4. `.redeem.toml` in the current directory
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".redeem.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where catalog and inventory records come from.
    pub data: DataConfig,
    /// Fallbacks for omitted arguments.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Data file or directory. `None` selects the built-in sample dataset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// User id used when `--user` is omitted.
    pub user: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Listing format when `--format` is omitted: `table`, `list` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "table".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every source, highest priority last.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. The implicit user and local files are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(config_file, &Self::config_path(), Path::new(LOCAL_CONFIG_FILE))
    }

    fn load_from(
        config_file: Option<&PathBuf>,
        user_file: &Path,
        local_file: &Path,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::from(user_file).format(FileFormat::Toml).required(false))
            .add_source(File::from(local_file).format(FileFormat::Toml).required(false));

        if let Some(path) = config_file {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("REDEEM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize::<Self>()
            .context("invalid configuration")?;

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.redeem.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "redeem", "redeem")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load_with(user: &str, local: &str, explicit: Option<&str>) -> anyhow::Result<AppConfig> {
        let temp = TempDir::new().unwrap();
        let user_file = temp.path().join("user.toml");
        let local_file = temp.path().join("local.toml");
        fs::write(&user_file, user).unwrap();
        fs::write(&local_file, local).unwrap();

        let explicit_file = explicit.map(|content| {
            let path = temp.path().join("explicit.toml");
            fs::write(&path, content).unwrap();
            path
        });

        AppConfig::load_from(explicit_file.as_ref(), &user_file, &local_file)
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data.path, None);
        assert_eq!(cfg.defaults.user, None);
        assert_eq!(cfg.output.format, "table");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn empty_sources_give_defaults() {
        assert_eq!(load_with("", "", None).unwrap(), AppConfig::default());
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let cfg = load_with(
            "[defaults]\nuser = 1\n[output]\nformat = \"list\"\n",
            "[defaults]\nuser = 2\n",
            Some("[data]\npath = \"catalog.toml\"\n"),
        )
        .unwrap();

        assert_eq!(cfg.defaults.user, Some(2));
        assert_eq!(cfg.output.format, "list");
        assert_eq!(cfg.data.path, Some(PathBuf::from("catalog.toml")));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let result = AppConfig::load_from(
            Some(&missing),
            &temp.path().join("a.toml"),
            &temp.path().join("b.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        assert!(load_with("[defaults\nuser = ", "", None).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert_eq!(load_with("", "", Some(&raw)).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
