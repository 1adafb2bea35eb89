use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigResult};

/// Synchronization strategy for the digit trie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrieStrategy {
    /// One initialize-once cell per slot
    #[default]
    #[serde(rename = "fine_grained")]
    FineGrained,

    /// One lock per node guarding all of its slots
    #[serde(rename = "coarse_grained")]
    CoarseGrained,
}

impl TrieStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrieStrategy::FineGrained => "fine_grained",
            TrieStrategy::CoarseGrained => "coarse_grained",
        }
    }
}

impl fmt::Display for TrieStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrieStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fine_grained" | "finegrained" | "fine" => Ok(TrieStrategy::FineGrained),
            "coarse_grained" | "coarsegrained" | "coarse" => Ok(TrieStrategy::CoarseGrained),
            _ => Err(ConfigError::InvalidValue {
                field: "strategy".to_string(),
                value: s.to_string(),
                reason: "expected fine_grained or coarse_grained".to_string(),
            }),
        }
    }
}

/// Phone number set configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetConfig {
    pub strategy: TrieStrategy,
    /// Threads used for bulk loading
    pub workers: usize,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            strategy: TrieStrategy::default(),
            workers: default_workers(),
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl SetConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: SetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workers".to_string(),
                value: self.workers.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SetConfig::default();
        assert_eq!(config.strategy, TrieStrategy::FineGrained);
        assert!(config.workers >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&TrieStrategy::CoarseGrained).unwrap();
        assert_eq!(json, "\"coarse_grained\"");

        let strategy: TrieStrategy = serde_json::from_str("\"fine_grained\"").unwrap();
        assert_eq!(strategy, TrieStrategy::FineGrained);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Fine".parse::<TrieStrategy>().unwrap(), TrieStrategy::FineGrained);
        assert_eq!(
            "coarse_grained".parse::<TrieStrategy>().unwrap(),
            TrieStrategy::CoarseGrained
        );
        assert!("global".parse::<TrieStrategy>().is_err());
        assert_eq!(TrieStrategy::CoarseGrained.to_string(), "coarse_grained");
    }

    #[test]
    fn test_from_json_str() {
        let config =
            SetConfig::from_json_str(r#"{"strategy": "coarse_grained", "workers": 3}"#).unwrap();
        assert_eq!(config.strategy, TrieStrategy::CoarseGrained);
        assert_eq!(config.workers, 3);

        let config = SetConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SetConfig::default());
    }

    #[test]
    fn test_from_json_str_rejects_invalid() {
        assert!(matches!(
            SetConfig::from_json_str(r#"{"workers": 0}"#),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            SetConfig::from_json_str(r#"{"strategy": "global"}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
