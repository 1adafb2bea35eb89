//! Factory for creating phone number sets

use std::sync::Arc;

use super::{ConcurrentDigitTrie, LockedDigitTrie, PhoneNumberSet};
use crate::config::{SetConfig, TrieStrategy};

/// Factory for creating set instances
pub struct TrieFactory;

impl TrieFactory {
    /// Create a set from configuration
    pub fn create_from_config(config: &SetConfig) -> Arc<dyn PhoneNumberSet> {
        Self::create(config.strategy)
    }

    pub fn create(strategy: TrieStrategy) -> Arc<dyn PhoneNumberSet> {
        match strategy {
            TrieStrategy::FineGrained => Arc::new(ConcurrentDigitTrie::new()),
            TrieStrategy::CoarseGrained => Arc::new(LockedDigitTrie::new()),
        }
    }

    /// Create a set by strategy name
    pub fn create_by_name(name: &str) -> Option<Arc<dyn PhoneNumberSet>> {
        name.parse::<TrieStrategy>().ok().map(Self::create)
    }
}
