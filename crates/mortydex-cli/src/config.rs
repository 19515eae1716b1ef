//! Runtime configuration resolved from flags, environment and platform dirs.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use mortydex_core::{ApiUrl, CharacterList};
use mortydex_file::FileStore;
use mortydex_http::HttpSource;

use crate::cli::Cli;
use crate::output::CliNotifier;

/// The list aggregator as the CLI wires it.
pub type List = CharacterList<HttpSource, FileStore>;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiUrl,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api = ApiUrl::new(&cli.api_url).context("Invalid API URL")?;
        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        debug!(api = %api, data_dir = %data_dir.display(), "Resolved configuration");
        Ok(Self { api, data_dir })
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }

    pub fn source(&self) -> HttpSource {
        HttpSource::new(self.api.clone())
    }

    /// A list that reports notices on the terminal.
    pub fn list(&self) -> List {
        CharacterList::with_notifier(self.source(), self.store(), Arc::new(CliNotifier))
    }
}

/// Platform data directory, e.g. `~/.local/share/mortydex`.
fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "mortydex").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.to_path_buf())
}
