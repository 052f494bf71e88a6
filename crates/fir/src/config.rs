//! User settings, read from `settings.toml`.
//!
//! Looked up at `$FIR_CONFIG`, falling back to `<config dir>/fir/settings.toml`:
//! ```toml
//! scope = "work"      # profile used when `--scope` is absent
//! log_level = "info"  # tracing filter when no verbosity flag is given
//! pretty = true       # pretty output without `--pretty`
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{GlobalOptions, OutputMode};

pub const ENV_VAR: &str = "FIR_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub scope: Option<String>,
    pub log_level: Option<String>,
    pub pretty: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

impl Settings {
    /// Loads the settings file, or defaults when there is none.
    pub fn load() -> Result<Settings, ConfigError> {
        match Settings::default_path() {
            Some(path) => Settings::load_from(&path),
            None => Ok(Settings::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(it) => it,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file");
                return Ok(Settings::default());
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };
        toml::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|it| it.join("fir").join("settings.toml"))
    }

    /// The profile to run against: `--scope` first, then the settings file.
    pub fn scope<'a>(&'a self, globals: &'a GlobalOptions) -> Option<&'a str> {
        globals.scope.as_deref().or(self.scope.as_deref())
    }

    pub fn output_mode(&self, globals: &GlobalOptions) -> OutputMode {
        if self.pretty {
            OutputMode::Pretty
        } else {
            globals.output_mode()
        }
    }
}
