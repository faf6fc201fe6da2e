//! Typed settings read from a [`GateConfigSnapshot`].
//!
//! | key | default |
//! |---|---|
//! | `paginate.default` | 10 |
//! | `paginate.max` | 100 |
//! | `auth.jwt.secret` | required |
//! | `auth.jwt.algorithm` | `HS256` |
//! | `auth.jwt.issuer` | `callgate` |
//! | `auth.jwt.audience` | `callgate-api` (comma separated) |
//! | `auth.jwt.expires_in` | `7days` |
//! | `auth.accesskey.min_expire` | `1day` |
//! | `log.filter` | `info` |

use std::time::Duration;

use callgate_auth::{AuthOptions, JwtAlgorithm, OptionsError};
use callgate_core::{ConfigError, GateConfigSnapshot, Pagination};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("invalid duration for `{key}`: {value:?}")]
    Duration { key: String, value: String },
    #[error("paginate.default ({default}) must be between 1 and paginate.max ({max})")]
    Pagination { default: u64, max: u64 },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub pagination: Pagination,
    pub auth: AuthOptions,
    pub log_filter: String,
}

impl Settings {
    pub fn from_config(config: &GateConfigSnapshot) -> Result<Self, SettingsError> {
        let defaults = Pagination::default();
        let pagination = Pagination {
            default_size: config.parse_or("paginate.default", defaults.default_size)?,
            max_size: config.parse_or("paginate.max", defaults.max_size)?,
        };
        if pagination.default_size == 0 || pagination.default_size > pagination.max_size {
            return Err(SettingsError::Pagination {
                default: pagination.default_size,
                max: pagination.max_size,
            });
        }

        let mut auth = AuthOptions::default();
        auth.jwt.secret = Some(config.require("auth.jwt.secret")?.to_string());
        if let Some(raw) = config.get("auth.jwt.algorithm") {
            auth.jwt.algorithm = raw.parse::<JwtAlgorithm>().map_err(|_| ConfigError::Invalid {
                key: "auth.jwt.algorithm".to_string(),
                value: raw.to_string(),
            })?;
        }
        if let Some(issuer) = config.get_string("auth.jwt.issuer") {
            auth.jwt.issuer = issuer;
        }
        if let Some(raw) = config.get("auth.jwt.audience") {
            auth.jwt.audience = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(d) = duration(config, "auth.jwt.expires_in")? {
            auth.jwt.expires_in = d;
        }
        if let Some(d) = duration(config, "auth.accesskey.min_expire")? {
            auth.accesskey.min_expire = d;
        }
        auth.validate()?;

        Ok(Self {
            pagination,
            auth,
            log_filter: config.get_string("log.filter").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[derive(Deserialize)]
struct HumanDuration(#[serde(with = "humantime_serde")] Duration);

fn duration(config: &GateConfigSnapshot, key: &str) -> Result<Option<Duration>, SettingsError> {
    let Some(raw) = config.get(key) else {
        return Ok(None);
    };
    serde_json::from_value::<HumanDuration>(serde_json::Value::String(raw.to_string()))
        .map(|d| Some(d.0))
        .map_err(|_| SettingsError::Duration {
            key: key.to_string(),
            value: raw.to_string(),
        })
}
