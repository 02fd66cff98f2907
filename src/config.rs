use std::env;

use tracing::Level;

use crate::error::{invalid_config_error, Error};
use crate::printer::Format;

pub const LOG_VAR: &str = "RIDESHARE_LOG";
pub const FORMAT_VAR: &str = "RIDESHARE_FORMAT";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: Level,
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            format: Format::Text,
        }
    }
}

impl Config {
    /// Reads settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_vars(optional_var(LOG_VAR)?, optional_var(FORMAT_VAR)?)
    }

    pub fn from_vars(log: Option<String>, format: Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Some(log) = log {
            config.log_level = log
                .trim()
                .parse()
                .map_err(|_| invalid_config_error(LOG_VAR, &log))?;
        }

        if let Some(format) = format {
            config.format = format.parse()?;
        }

        Ok(config)
    }
}

fn optional_var(key: &str) -> Result<Option<String>, Error> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[test]
fn defaults_test() {
    let config = Config::from_vars(None, None).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.log_level, Level::WARN);
    assert_eq!(config.format, Format::Text);
}

#[test]
fn from_vars_test() {
    let config = Config::from_vars(Some("debug".into()), Some("json".into())).unwrap();

    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.format, Format::Json);
}

#[test]
fn invalid_vars_test() {
    let err = Config::from_vars(Some("loud".into()), None).unwrap_err();
    assert_eq!(err.code, 100);
    assert!(err.message.contains(LOG_VAR));

    let err = Config::from_vars(None, Some("xml".into())).unwrap_err();
    assert_eq!(err.code, 100);
    assert!(err.message.contains(FORMAT_VAR));
}
