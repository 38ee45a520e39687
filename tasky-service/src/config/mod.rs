use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MONGO_URI: &str = "mongodb://mongo:27017/tasky";
pub const DEFAULT_MONGO_DATABASE: &str = "tasky";
pub const DEFAULT_WIZ_FILE_PATH: &str = "/app/wizexercise.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct TaskyConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub wiz_file: WizFileConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// The single file exposed by `GET /wiz-file`. Set by the operator at
/// startup; requests have no way to choose another path.
#[derive(Debug, Clone, Deserialize)]
pub struct WizFileConfig {
    pub path: PathBuf,
}

impl TaskyConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Builds the service config from `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(
        common: core_config::Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let is_prod = lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()) == "prod";
        let get_env = |key: &str, default: Option<&str>| resolve(key, lookup(key), default, is_prod);

        Ok(TaskyConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGO_URI", Some(DEFAULT_MONGO_URI))?,
                database: get_env("MONGO_DATABASE", Some(DEFAULT_MONGO_DATABASE))?,
            },
            wiz_file: WizFileConfig {
                path: get_env("WIZ_FILE_PATH", Some(DEFAULT_WIZ_FILE_PATH))?.into(),
            },
        })
    }
}

fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match value {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
