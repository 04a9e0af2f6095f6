//! Runtime configuration from environment variables.
//!
//! - `BINGO_POOL_MAX`: inclusive upper bound of the number pool (default 80)
//! - `BINGO_SEED`: RNG seed (default: derived from the system clock)
//! - `BINGO_REVEAL_MS`: milliseconds between revealed calls (default 50)
//! - `BINGO_LOG_PATH`: write logs to this file (default: logging off)
//!
//! Unset or empty variables take their default; set but unparsable ones are
//! an error so typos do not silently fall back.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::ConfigError;
use crate::types::{DEFAULT_POOL_MAX, REVEAL_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub pool_max: u32,
    pub seed: u32,
    pub reveal_interval_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            pool_max: parse_var("BINGO_POOL_MAX", get("BINGO_POOL_MAX"))?
                .unwrap_or(DEFAULT_POOL_MAX),
            seed: parse_var("BINGO_SEED", get("BINGO_SEED"))?.unwrap_or_else(clock_seed),
            reveal_interval_ms: parse_var("BINGO_REVEAL_MS", get("BINGO_REVEAL_MS"))?
                .unwrap_or(REVEAL_INTERVAL_MS),
            log_path: get("BINGO_LOG_PATH").map(PathBuf::from),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pool_max: DEFAULT_POOL_MAX,
            seed: 1,
            reveal_interval_ms: REVEAL_INTERVAL_MS,
            log_path: None,
        }
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.parse()
                .map_err(|_| ConfigError::InvalidEnv { key, value: v })
        })
        .transpose()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[("BINGO_SEED", "9")])).unwrap();
        assert_eq!(cfg.pool_max, 80);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.reveal_interval_ms, 50);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BINGO_POOL_MAX", "90"),
            ("BINGO_SEED", "1234"),
            ("BINGO_REVEAL_MS", " 20 "),
            ("BINGO_LOG_PATH", "/tmp/bingo.log"),
        ]))
        .unwrap();

        assert_eq!(
            cfg,
            AppConfig {
                pool_max: 90,
                seed: 1234,
                reveal_interval_ms: 20,
                log_path: Some(PathBuf::from("/tmp/bingo.log")),
            }
        );
    }

    #[test]
    fn empty_values_fall_back() {
        let cfg =
            AppConfig::from_lookup(lookup(&[("BINGO_POOL_MAX", ""), ("BINGO_LOG_PATH", "  ")]))
                .unwrap();
        assert_eq!(cfg.pool_max, 80);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn garbage_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("BINGO_POOL_MAX", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv {
                key: "BINGO_POOL_MAX",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn pool_size_is_not_validated_here() {
        // The game rejects small pools when it is constructed.
        let cfg = AppConfig::from_lookup(lookup(&[("BINGO_POOL_MAX", "10")])).unwrap();
        assert_eq!(cfg.pool_max, 10);
    }
}
