use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::errors::SdkError;

/// Resolved SDK configuration.
///
/// Sources, lowest to highest precedence: built-in defaults, an optional
/// `driftwatch.toml` in the working directory, then `DRIFTWATCH_*`
/// environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the platform API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout applied by the default transport.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from defaults, file and environment.
    pub fn load() -> Result<Self, SdkError> {
        Ok(Self::figment().extract()?)
    }

    /// Start from an explicit base URL, keeping the remaining defaults.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(Toml::file("driftwatch.toml"))
            .merge(Env::prefixed("DRIFTWATCH_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        figment::Jail::expect_with(|_| {
            let config = ClientConfig::load().unwrap();
            assert_eq!(config.base_url, "http://localhost:9000");
            assert_eq!(config.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "driftwatch.toml",
                r#"
                    base_url = "https://monitoring.internal"
                    timeout_secs = 10
                "#,
            )?;
            jail.set_env("DRIFTWATCH_TIMEOUT_SECS", "5");

            let config = ClientConfig::load().unwrap();
            assert_eq!(config.base_url, "https://monitoring.internal");
            assert_eq!(config.timeout_secs, 5);
            Ok(())
        });
    }
}
