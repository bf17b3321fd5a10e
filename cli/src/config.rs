// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use agenda_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const AGENDA_CONFIG_ENV: &str = "AGENDA_CONFIG";

/// Resolves and parses the configuration file.
///
/// An explicit path, from `--config` or `AGENDA_CONFIG`, must exist. The default file is
/// optional and defaults apply when it is missing.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(AGENDA_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !fs::try_exists(&config).await.unwrap_or(false) {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config file");
    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
