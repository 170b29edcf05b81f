//! # Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! data_dir: /home/me/.local/share/hashpad
//! show_input: true
//! record_history: true
//! ```
//!
//! Command-line flags take precedence over the file. Without either, the
//! history lives under the platform data directory (`dirs::data_dir()`).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use hashpad_core::{FileStore, HistoryStore};
use hashpad_crypto::Sha256Provider;

use crate::session::HashSession;

/// Directory name under the platform data directory.
const APP_DIR_NAME: &str = "hashpad";

/// Contents of the YAML config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the history file is kept.
    pub data_dir: Option<PathBuf>,
    /// Echo the hashed text alongside results.
    pub show_input: bool,
    /// Append successful hashes to the history log.
    pub record_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            show_input: false,
            record_history: true,
        }
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse config YAML. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Resolved settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub data_dir: PathBuf,
    pub show_input: bool,
    pub record_history: bool,
}

impl AppContext {
    /// Merge the config file with command-line overrides.
    pub fn resolve(config: &Config, data_dir_flag: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir_flag.or_else(|| config.data_dir.clone()) {
            Some(dir) => dir,
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR_NAME))
                .context("could not determine a data directory; pass --data-dir")?,
        };
        Ok(Self {
            data_dir,
            show_input: config.show_input,
            record_history: config.record_history,
        })
    }

    /// A session over the on-disk history, hashing with SHA-256.
    pub fn open_session(&self) -> HashSession<FileStore> {
        tracing::debug!(data_dir = %self.data_dir.display(), "opening session");
        HashSession::new(
            Arc::new(Sha256Provider::new()),
            HistoryStore::new(FileStore::new(&self.data_dir)),
        )
        .with_history_recording(self.record_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn parses_all_fields() {
        let cfg = Config::parse("data_dir: /tmp/hp\nshow_input: true\nrecord_history: false\n")
            .unwrap();
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/hp")));
        assert!(cfg.show_input);
        assert!(!cfg.record_history);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::parse("show_input: true\n").unwrap();
        assert!(cfg.record_history);
        assert_eq!(cfg.data_dir, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::parse("algorithm: md5\n").is_err());
    }

    #[test]
    fn flag_overrides_config_data_dir() {
        let cfg = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let ctx = AppContext::resolve(&cfg, Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(ctx.data_dir, PathBuf::from("/from/flag"));

        let ctx = AppContext::resolve(&cfg, None).unwrap();
        assert_eq!(ctx.data_dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashpad.yaml");
        std::fs::write(&path, "show_input: true\n").unwrap();
        assert!(Config::load(&path).unwrap().show_input);
    }
}
