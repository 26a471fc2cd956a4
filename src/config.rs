use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::{Result, ScoutError, PREFERENCES_FILE, SCOUT_FOLDER};

pub const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";
/// Overrides `base_url` when set.
pub const BASE_URL_ENV: &str = "PROFILE_SCOUT_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Site hosting the `/profiles/<id>` pages
    pub base_url: Url,
    /// Preferences file holding the remembered ids
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            store_path: PathBuf::from(SCOUT_FOLDER).join(PREFERENCES_FILE),
        }
    }
}

fn default_base_url() -> Url {
    // Constant input, cannot fail.
    Url::parse(DEFAULT_BASE_URL).unwrap()
}

impl Config {
    /// Load the configuration from `path`, or start from the defaults
    /// when no path is given. The environment is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                log::debug!("reading config from {}", path.display());
                let text = fs::read_to_string(path)?;
                serde_json::from_str(&text).map_err(|e| {
                    ScoutError::Config(format!("{}: {}", path.display(), e))
                })?
            }
            None => Config::default(),
        };

        if let Ok(raw) = env::var(BASE_URL_ENV) {
            config.base_url = Url::parse(&raw)?;
            log::info!("base url overridden by {}", BASE_URL_ENV);
        }
        Ok(config)
    }
}
