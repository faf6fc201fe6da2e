//! # Configuration
//!
//! A minimal string key/value store. Typed settings are read from a
//! [`GateConfigSnapshot`] by the crates that own them.
//!
//! ```rust
//! use callgate_core::GateConfig;
//!
//! let mut config = GateConfig::new();
//! config.set("paginate.default", "10");
//! assert_eq!(config.snapshot().get_u64("paginate.default"), Some(10));
//! ```
//!
//! Environment overrides use a prefix and `__` as the key separator:
//!
//! ```bash
//! export CALLGATE__PAGINATE__DEFAULT=25   # paginate.default = 25
//! ```

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration key `{0}`")]
    Missing(String),
    #[error("invalid value for `{key}`: {value:?}")]
    Invalid { key: String, value: String },
}

#[derive(Debug, Default, Clone)]
pub struct GateConfig {
    values: HashMap<String, String>,
}

impl GateConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Load `PREFIX__A__B=value` as `a.b = value`.
    pub fn load_env(&mut self, prefix: &str) {
        self.load_vars(prefix, std::env::vars());
    }

    pub fn load_vars<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                self.set(normalized, value);
            }
        }
    }

    pub fn snapshot(&self) -> GateConfigSnapshot {
        GateConfigSnapshot::new(self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GateConfigSnapshot {
    map: HashMap<String, String>,
}

impl GateConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.parse::<usize>().ok())
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.parse::<bool>().ok())
    }

    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    /// Absent keys yield `default`; present but unparsable keys are an error.
    pub fn parse_or<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}
