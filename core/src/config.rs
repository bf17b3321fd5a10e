// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::AgendaError;

/// The name of the application.
pub const APP_NAME: &str = "agenda";

/// Default name of the exported file.
pub const DEFAULT_EXPORT_FILE: &str = "pedidos.csv";

/// Configuration for the agenda.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted orders. When unset, the platform state directory is
    /// used; when that cannot be resolved either, orders are kept in memory only.
    pub state_dir: Option<PathBuf>,

    /// Default file name for exports.
    pub export_file: Option<PathBuf>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), AgendaError> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(expand_path(a).map_err(|e| {
                    AgendaError::Config(format!("Failed to expand state directory path: {e}"))
                })?)
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        if let Some(a) = &self.export_file {
            self.export_file = Some(expand_path(a)?);
        }

        Ok(())
    }

    /// The file an export is written to when no path is given.
    pub fn export_path(&self) -> PathBuf {
        self.export_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE))
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, AgendaError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| AgendaError::Config("Invalid path".to_string()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, AgendaError> {
    dirs::home_dir()
        .ok_or_else(|| AgendaError::Config("User-specific home directory not found".to_string()))
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, AgendaError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir
        .ok_or_else(|| AgendaError::Config("User-specific config directory not found".to_string()))
}

fn get_state_dir() -> Result<PathBuf, AgendaError> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir
        .ok_or_else(|| AgendaError::Config("User-specific state directory not found".to_string()))
}
