//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use heritage_cache::FileStore;
use heritage_commerce::catalog::Catalog;
use heritage_commerce::Storefront;

use crate::config::{HeritageConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: HeritageConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (HeritageConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (HeritageConfig::load(&path)?, Some(path)),
                None => (HeritageConfig::default(), None),
            },
        };

        tracing::debug!(config = ?config_path, "configuration loaded");
        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory the session state lives in.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(&self.cwd, &self.config.storage.dir)
    }

    /// Open the storefront over the configured storage directory.
    pub fn open_storefront(&self) -> Result<Storefront<FileStore>> {
        let settings = self.config.storefront_settings()?;
        let dir = self.storage_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open storage: {}", dir.display()))?;
        Ok(Storefront::open_with(store, Catalog::builtin().clone(), settings))
    }
}

/// Find a config file in the directory tree, starting at `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
