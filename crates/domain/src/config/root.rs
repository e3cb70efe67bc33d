use super::blocking::BlockingConfig;
use super::errors::ConfigError;
use super::lists::ListsConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::telemetry::TelemetryConfig;
use super::upstream::UpstreamConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Top-level configuration, loaded from a TOML file with CLI overrides
/// applied on top. Every section has working defaults, so an absent file
/// yields a usable config.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub blocking: BlockingConfig,

    #[serde(default)]
    pub lists: ListsConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values the CLI may override after the file is parsed.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_bind: Option<String>,
    pub http_bind: Option<String>,
    pub upstream: Option<String>,
    pub blocking_mode: Option<String>,
    pub lists_dir: Option<String>,
}

impl Config {
    /// Load configuration from `path` (when given) and apply CLI overrides.
    ///
    /// A missing path is not an error; defaults are used.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let text = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: p.to_string(),
                    source,
                })?;
                toml::from_str(&text).map_err(|source| ConfigError::Parse {
                    path: p.to_string(),
                    source,
                })?
            }
            None => Config::default(),
        };

        if let Some(bind) = overrides.dns_bind {
            config.server.dns_bind = bind;
        }
        if let Some(bind) = overrides.http_bind {
            config.server.http_bind = bind;
        }
        if let Some(upstream) = overrides.upstream {
            config.upstream.address = upstream;
        }
        if let Some(mode) = overrides.blocking_mode {
            config.blocking.mode = mode.parse().map_err(ConfigError::Invalid)?;
        }
        if let Some(dir) = overrides.lists_dir {
            config.lists.directory = dir.into();
        }

        Ok(config)
    }

    /// Reject configurations that cannot possibly run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server
            .dns_bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid(format!("bad dns_bind: {}", self.server.dns_bind)))?;
        self.server
            .http_bind
            .parse::<SocketAddr>()
            .map_err(|_| {
                ConfigError::Invalid(format!("bad http_bind: {}", self.server.http_bind))
            })?;
        self.upstream
            .address
            .parse::<SocketAddr>()
            .map_err(|_| {
                ConfigError::Invalid(format!("bad upstream address: {}", self.upstream.address))
            })?;
        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Invalid("upstream timeout must be non-zero".into()));
        }
        if self.telemetry.recent_cap == 0 {
            return Err(ConfigError::Invalid("recent_cap must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlockingMode;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::load(None, CliOverrides::default()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.upstream.address, "1.1.1.1:53");
        assert_eq!(config.server.http_bind, "127.0.0.1:8081");
        assert_eq!(config.telemetry.recent_cap, 500);
    }

    #[test]
    fn test_cli_overrides_win() {
        let overrides = CliOverrides {
            dns_bind: Some("127.0.0.1:5353".into()),
            blocking_mode: Some("nxdomain".into()),
            ..Default::default()
        };
        let config = Config::load(None, overrides).unwrap();
        assert_eq!(config.server.dns_bind, "127.0.0.1:5353");
        assert_eq!(config.blocking.mode, BlockingMode::Nxdomain);
    }

    #[test]
    fn test_parse_toml_sections() {
        let text = r#"
            [upstream]
            address = "9.9.9.9:53"
            timeout_secs = 2

            [blocking]
            mode = "null"
            unknown_device = "global"
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.upstream.address, "9.9.9.9:53");
        assert_eq!(config.blocking.mode, BlockingMode::Null);
    }

    #[test]
    fn test_validate_rejects_bad_bind() {
        let mut config = Config::default();
        config.server.dns_bind = "not-an-addr".into();
        assert!(config.validate().is_err());
    }
}
