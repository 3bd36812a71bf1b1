//! Transaction pool implementation.

use tracing::{debug, trace};
use txrank_domain::CandidateTx;

use crate::{
    config::PoolConfig,
    heap::{Admission, BoundedHeap, DrainDescending},
    ordering::ByScore,
};

/// Running totals of pool admission decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Transactions admitted, including those that displaced another.
    pub admitted: u64,
    /// Transactions evicted to make room for a higher fee.
    pub evicted: u64,
    /// Transactions turned away because the pool was full of higher fees.
    pub rejected: u64,
}

impl PoolStats {
    /// Returns the total number of transactions offered to the pool.
    pub const fn offered(&self) -> u64 {
        self.admitted + self.rejected
    }
}

/// A pool retaining the highest-fee transactions up to a fixed limit.
#[derive(Debug)]
pub struct TransactionPool {
    heap: BoundedHeap<CandidateTx, ByScore>,
    stats: PoolStats,
}

impl TransactionPool {
    /// Creates a new transaction pool with the given configuration.
    pub fn new(config: PoolConfig) -> Self {
        Self { heap: BoundedHeap::new(config.limit, ByScore), stats: PoolStats::default() }
    }

    /// Offers a transaction to the pool.
    ///
    /// When the pool is full the transaction is admitted only if its fee is
    /// strictly higher than the lowest fee held, in which case that lowest-fee
    /// transaction is evicted and returned.
    pub fn insert(&mut self, tx: CandidateTx) -> Admission<CandidateTx> {
        let admission = self.heap.push(tx);
        match &admission {
            Admission::Admitted => {
                self.stats.admitted += 1;
            }
            Admission::Evicted(evicted) => {
                self.stats.admitted += 1;
                self.stats.evicted += 1;
                trace!(id = evicted.id(), fee = evicted.fee(), "evicted transaction");
            }
            Admission::Rejected(rejected) => {
                self.stats.rejected += 1;
                trace!(id = rejected.id(), fee = rejected.fee(), "rejected transaction");
            }
        }
        admission
    }

    /// Consumes the pool, yielding transactions from highest to lowest fee.
    pub fn drain_descending(self) -> DrainDescending<CandidateTx, ByScore> {
        debug!(
            len = self.heap.len(),
            admitted = self.stats.admitted,
            evicted = self.stats.evicted,
            rejected = self.stats.rejected,
            "draining transaction pool"
        );
        self.heap.drain_descending()
    }

    /// Returns the lowest fee currently held.
    pub fn min_fee(&self) -> Option<f64> {
        self.heap.peek_min().map(CandidateTx::fee)
    }

    /// Returns the configured limit.
    pub fn limit(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the admission counters.
    pub const fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Returns the number of transactions in the pool.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the pool contains no transactions.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for TransactionPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}
