use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_DB_PATH: &str = "db.json";
pub const DEFAULT_OBJECT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origin: Option<String>,
    pub storage: StorageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origin: None,
            storage: StorageConfig::default(),
        }
    }
}

/// Where the document lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Local JSON file, cached in process
    File { path: PathBuf },
    /// Remote object, fetched on every operation
    Object {
        url: String,
        #[serde(default)]
        bearer_token: Option<String>,
        #[serde(default = "default_object_timeout")]
        timeout_secs: u64,
    },
    /// Process memory only
    Memory,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File {
            path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

fn default_object_timeout() -> u64 {
    DEFAULT_OBJECT_TIMEOUT_SECS
}

impl ServerConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid server configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Defaults, or the YAML file at `path` when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Layer `overrides` on top of this configuration.
    ///
    /// Within one layer `memory` beats an object URL, which beats a file path.
    /// A token on its own updates an object backend chosen by an earlier layer;
    /// an object URL keeps the token and timeout already configured for it.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(origin) = &overrides.cors_origin {
            self.cors_origin = Some(origin.clone());
        }

        if overrides.memory {
            self.storage = StorageConfig::Memory;
        } else if let Some(new_url) = &overrides.object_url {
            self.storage = match std::mem::take(&mut self.storage) {
                StorageConfig::Object {
                    bearer_token,
                    timeout_secs,
                    ..
                } => StorageConfig::Object {
                    url: new_url.clone(),
                    bearer_token,
                    timeout_secs,
                },
                _ => StorageConfig::Object {
                    url: new_url.clone(),
                    bearer_token: None,
                    timeout_secs: DEFAULT_OBJECT_TIMEOUT_SECS,
                },
            };
        } else if let Some(path) = &overrides.db {
            self.storage = StorageConfig::File { path: path.clone() };
        }

        if let (Some(token), StorageConfig::Object { bearer_token, .. }) =
            (&overrides.object_token, &mut self.storage)
        {
            *bearer_token = Some(token.clone());
        }
    }
}

/// One layer of settings given outside the YAML file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
    pub db: Option<PathBuf>,
    pub object_url: Option<String>,
    pub object_token: Option<String>,
    pub memory: bool,
}

impl Overrides {
    /// Read the `TODOQL_*` variables out of `vars`.
    pub fn from_env_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut overrides = Self::default();
        for (key, value) in vars {
            match key.as_str() {
                "TODOQL_PORT" => {
                    overrides.port = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid TODOQL_PORT: {}", value))?,
                    );
                }
                "TODOQL_DB_PATH" => overrides.db = Some(PathBuf::from(value)),
                "TODOQL_OBJECT_URL" => overrides.object_url = Some(value),
                "TODOQL_OBJECT_TOKEN" => overrides.object_token = Some(value),
                _ => {}
            }
        }
        Ok(overrides)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_env_vars(std::env::vars())
    }
}
