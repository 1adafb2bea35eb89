use super::{ConfigResult, SetConfig, TrieStrategy};

/// Builder for SetConfig that wraps the config itself
#[derive(Debug, Clone, Default)]
pub struct SetConfigBuilder {
    config: SetConfig,
}

impl SetConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership
    pub fn from_config(config: SetConfig) -> Self {
        Self { config }
    }

    pub fn strategy(mut self, strategy: TrieStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn maybe_workers(mut self, workers: Option<usize>) -> Self {
        if let Some(workers) = workers {
            self.config.workers = workers;
        }
        self
    }

    pub fn build(self) -> ConfigResult<SetConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> SetConfig {
        self.config
    }
}
