use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Loads `.env`, the optional `configuration` file and `APP__*` variables.
    /// A plain `PORT` variable wins over all of them.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_sources(
            config::Environment::with_prefix("APP").separator("__"),
            std::env::var(PORT_ENV).ok(),
        )
    }

    fn from_sources(
        environment: config::Environment,
        port: Option<String>,
    ) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(environment)
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_3000() {
        assert_eq!(Config::default().port, 3000);
    }

    #[test]
    fn deserializes_port_from_string_source() {
        let config: Config = Cfg::builder()
            .set_override("port", "4100")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.port, 4100);
    }

    fn app_environment(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        config::Environment::with_prefix("APP")
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn port_variable_beats_app_prefixed_port() {
        let config =
            Config::from_sources(app_environment(&[("APP__PORT", "4000")]), Some("5000".into()))
                .unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn app_prefixed_port_applies_without_port_variable() {
        let config = Config::from_sources(app_environment(&[("APP__PORT", "4000")]), None).unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn unset_port_defaults_to_3000() {
        let config = Config::from_sources(app_environment(&[]), None).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn unparsable_port_is_a_config_error() {
        let err = Config::from_sources(app_environment(&[]), Some("http".into())).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn missing_port_falls_back_to_default() {
        let config: Config = Cfg::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(config.port, 3000);
    }
}
