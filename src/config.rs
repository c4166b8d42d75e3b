use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use thiserror::Error;

use crate::domain::invoice::default_gst_rate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gst_rate: BigDecimal,
    pub coupons_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port: u16 = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "port number",
                value,
            })?,
            None => 8080,
        };

        let gst_rate = match lookup("GST_RATE") {
            Some(value) => match BigDecimal::from_str(value.trim()) {
                Ok(rate) if rate >= BigDecimal::from(0) && rate < BigDecimal::from(1) => rate,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "GST_RATE",
                        expected: "fraction between 0 and 1",
                        value,
                    })
                }
            },
            None => default_gst_rate(),
        };

        let coupons_file = lookup("COUPONS_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            gst_rate,
            coupons_file,
        })
    }
}
