use crate::utils::{DEFAULT_CARD_LENGTH, DEFAULT_MAX_ATTEMPTS};
use anyhow::{Context, Result, anyhow};
use std::{ops::RangeInclusive, path::PathBuf};

pub const CARD_LENGTH_RANGE: RangeInclusive<usize> = 12..=19;
pub const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub is_dev: bool,
    pub log_dir: PathBuf,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub card_length: usize,
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            card_length: DEFAULT_CARD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let log_dir = lookup("LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Ok(Self {
            is_dev,
            log_dir,
            generator: GeneratorConfig::from_lookup(&lookup)?,
        })
    }
}

impl GeneratorConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let card_length = match lookup("CARD_LENGTH") {
            Some(raw) => raw
                .parse::<usize>()
                .context("CARD_LENGTH must be a valid integer")?,
            None => DEFAULT_CARD_LENGTH,
        };

        if !CARD_LENGTH_RANGE.contains(&card_length) {
            return Err(anyhow!(
                "CARD_LENGTH must be between {} and {}, got {card_length}",
                CARD_LENGTH_RANGE.start(),
                CARD_LENGTH_RANGE.end(),
            ));
        }

        let max_attempts = match lookup("GENERATOR_MAX_ATTEMPTS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("GENERATOR_MAX_ATTEMPTS must be a valid u32 integer")?,
            None => DEFAULT_MAX_ATTEMPTS,
        };

        if max_attempts == 0 {
            return Err(anyhow!("GENERATOR_MAX_ATTEMPTS must be greater than 0"));
        }

        Ok(Self {
            card_length,
            max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(env(&[])).unwrap();

        assert!(!config.is_dev);
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
        assert_eq!(config.generator, GeneratorConfig::default());
        assert_eq!(config.generator.card_length, 16);
        assert_eq!(config.generator.max_attempts, 1000);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(env(&[
            ("DEV_MODE", "1"),
            ("LOG_DIR", "/tmp/cardgen"),
            ("CARD_LENGTH", "19"),
            ("GENERATOR_MAX_ATTEMPTS", "50"),
        ]))
        .unwrap();

        assert!(config.is_dev);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/cardgen"));
        assert_eq!(config.generator.card_length, 19);
        assert_eq!(config.generator.max_attempts, 50);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Config::from_lookup(env(&[("CARD_LENGTH", "11")])).is_err());
        assert!(Config::from_lookup(env(&[("CARD_LENGTH", "abc")])).is_err());
        assert!(Config::from_lookup(env(&[("GENERATOR_MAX_ATTEMPTS", "0")])).is_err());
        assert!(Config::from_lookup(env(&[("GENERATOR_MAX_ATTEMPTS", "-3")])).is_err());
    }
}
