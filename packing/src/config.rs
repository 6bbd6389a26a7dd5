//! Configuration management for the packing list.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Malformed values are ignored and the default is used instead.

use crate::list::PackingList;
use crate::reducer::PackingEnvironment;
use crate::state::PackingState;
use crate::types::SortMode;
use serde::{Deserialize, Serialize};
use std::env;

/// Default `RUST_LOG` filter
pub const DEFAULT_LOG_FILTER: &str = "far_away=info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log output format (`FAR_AWAY_LOG_FORMAT`)
    pub log_format: LogFormat,
    /// Initial sort mode (`FAR_AWAY_SORT`)
    pub sort: SortMode,
    /// Start with the demo items (`FAR_AWAY_SEED_SAMPLE`)
    pub seed_sample: bool,
    /// Accept blank descriptions on submit (`FAR_AWAY_ALLOW_BLANK`)
    pub allow_blank_descriptions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            sort: SortMode::Input,
            seed_sample: false,
            allow_blank_descriptions: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            log_format: lookup("FAR_AWAY_LOG_FORMAT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_format),
            sort: lookup("FAR_AWAY_SORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.sort),
            seed_sample: lookup("FAR_AWAY_SEED_SAMPLE")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.seed_sample),
            allow_blank_descriptions: lookup("FAR_AWAY_ALLOW_BLANK")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.allow_blank_descriptions),
        }
    }

    /// State the store starts from
    #[must_use]
    pub fn initial_state(&self) -> PackingState {
        let list = if self.seed_sample {
            PackingList::sample()
        } else {
            PackingList::new()
        };
        PackingState::with_list(list).with_sort(self.sort)
    }

    /// Production environment honouring this configuration
    #[must_use]
    pub fn environment(&self) -> PackingEnvironment {
        PackingEnvironment::production().with_blank_descriptions(self.allow_blank_descriptions)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_state(), PackingState::new());
        assert!(config.environment().allow_blank_descriptions);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("FAR_AWAY_LOG_FORMAT", "JSON"),
            ("FAR_AWAY_SORT", "packed"),
            ("FAR_AWAY_SEED_SAMPLE", "yes"),
            ("FAR_AWAY_ALLOW_BLANK", "0"),
        ]);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.sort, SortMode::Packed);
        assert!(config.seed_sample);
        assert!(!config.allow_blank_descriptions);

        let state = config.initial_state();
        assert_eq!(state.list, PackingList::sample());
        assert_eq!(state.sort, SortMode::Packed);
        assert!(!config.environment().allow_blank_descriptions);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("FAR_AWAY_LOG_FORMAT", "xml"),
            ("FAR_AWAY_SORT", "size"),
            ("FAR_AWAY_SEED_SAMPLE", "maybe"),
            ("FAR_AWAY_ALLOW_BLANK", ""),
        ]);
        assert_eq!(config, Config::default());
    }
}
