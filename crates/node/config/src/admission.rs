//! Admission pool configuration.

use serde::{Deserialize, Serialize};
use txrank_txpool::{DEFAULT_POOL_LIMIT, PoolConfig};

/// Default number of transactions retained.
pub const DEFAULT_LIMIT: usize = DEFAULT_POOL_LIMIT;

/// Admission pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdmissionConfig {
    /// Maximum number of transactions retained and emitted.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }
}

impl AdmissionConfig {
    /// Builds the runtime pool configuration.
    pub const fn pool_config(&self) -> PoolConfig {
        PoolConfig::new().with_limit(self.limit)
    }
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}
