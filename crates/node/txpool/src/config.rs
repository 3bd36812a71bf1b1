//! Transaction pool configuration.

/// Default number of transactions retained by the pool.
pub const DEFAULT_POOL_LIMIT: usize = 5000;

/// Configuration for the transaction pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of transactions retained.
    pub limit: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolConfig {
    /// Creates a new pool configuration with default values.
    pub const fn new() -> Self {
        Self { limit: DEFAULT_POOL_LIMIT }
    }

    /// Sets the maximum number of transactions retained.
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit() {
        assert_eq!(PoolConfig::default().limit, DEFAULT_POOL_LIMIT);
        assert_eq!(PoolConfig::default(), PoolConfig::new());
    }

    #[test]
    fn with_limit_overrides() {
        assert_eq!(PoolConfig::new().with_limit(7).limit, 7);
    }
}
