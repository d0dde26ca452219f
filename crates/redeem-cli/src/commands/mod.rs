//! Command handlers.
//!
//! Each submodule translates parsed arguments into service calls and renders
//! the result. Wiring shared by several commands lives here.

pub mod completions;
pub mod config;
pub mod courses;
pub mod eligible;
pub mod init;
pub mod tokens;

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use redeem_adapters::{DataLoader, InMemoryCatalog, InMemoryInventory};
use redeem_core::domain::UserId;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Where the catalog and inventory come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sample,
    Path(PathBuf),
}

impl DataSource {
    /// `--data` wins over `data.path`; neither selects the sample dataset.
    pub fn resolve(global: &GlobalArgs, config: &AppConfig) -> Self {
        global
            .data
            .clone()
            .or_else(|| config.data.path.clone())
            .map_or(Self::Sample, Self::Path)
    }

    /// Build both providers from this source.
    #[instrument(skip_all, fields(source = ?self))]
    pub fn open(&self) -> CliResult<(InMemoryCatalog, InMemoryInventory)> {
        let providers = match self {
            Self::Sample => {
                debug!("Using built-in sample data");
                (InMemoryCatalog::with_sample()?, InMemoryInventory::with_sample()?)
            }
            Self::Path(path) => DataLoader::new(path).load()?.into_providers()?,
        };

        info!(
            courses = providers.0.len(),
            tokens = providers.1.len(),
            "Data loaded"
        );
        Ok(providers)
    }
}

/// `--user` if given, else `defaults.user` from config.
pub fn resolve_user(explicit: Option<u64>, config: &AppConfig) -> CliResult<UserId> {
    explicit
        .or(config.defaults.user)
        .map(UserId::new)
        .ok_or(CliError::MissingUser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(data: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            data: data.map(PathBuf::from),
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn data_flag_overrides_config() {
        let mut config = AppConfig::default();
        config.data.path = Some(PathBuf::from("from-config.toml"));

        assert_eq!(
            DataSource::resolve(&global(Some("flag.toml")), &config),
            DataSource::Path(PathBuf::from("flag.toml"))
        );
        assert_eq!(
            DataSource::resolve(&global(None), &config),
            DataSource::Path(PathBuf::from("from-config.toml"))
        );
        assert_eq!(
            DataSource::resolve(&global(None), &AppConfig::default()),
            DataSource::Sample
        );
    }

    #[test]
    fn sample_source_opens() {
        let (catalog, inventory) = DataSource::Sample.open().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(inventory.len(), 5);
    }

    #[test]
    fn user_falls_back_to_config() {
        let mut config = AppConfig::default();
        assert!(matches!(resolve_user(None, &config), Err(CliError::MissingUser)));

        config.defaults.user = Some(7);
        assert_eq!(resolve_user(None, &config).unwrap(), UserId::new(7));
        assert_eq!(resolve_user(Some(1), &config).unwrap(), UserId::new(1));
    }
}
