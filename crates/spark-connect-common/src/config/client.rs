use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::config::loader::deserialize_non_empty_string;
use crate::error::{CommonError, CommonResult};

const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// The prefix of environment variables that override the client configuration.
/// Nested keys are separated by `__`, e.g. `SPARK_CONNECT__REMOTE`.
pub const CLIENT_CONFIG_ENV_PREFIX: &str = "SPARK_CONNECT__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub remote: String,
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub user_id: Option<String>,
    pub user_agent: String,
}

impl ClientConfig {
    /// Loads the built-in defaults merged with environment variable overrides.
    pub fn load() -> CommonResult<Self> {
        Self::defaults()
            .admerge(
                Env::prefixed(CLIENT_CONFIG_ENV_PREFIX)
                    .map(|p| p.as_str().replace("__", ".").into()),
            )
            .extract()
            .map_err(|e| CommonError::invalid(e.to_string()))
    }

    /// Loads the built-in defaults only, ignoring the environment.
    pub fn load_defaults() -> CommonResult<Self> {
        Self::defaults()
            .extract()
            .map_err(|e| CommonError::invalid(e.to_string()))
    }

    fn defaults() -> Figment {
        Figment::from(Toml::string(DEFAULT_CONFIG))
    }
}
