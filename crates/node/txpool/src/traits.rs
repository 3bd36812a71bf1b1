//! Traits for items ranked by the pool.

use txrank_domain::CandidateTx;

/// An item carrying a numeric score.
pub trait Scored {
    /// Returns the score; higher scores are retained preferentially.
    fn score(&self) -> f64;
}

impl Scored for CandidateTx {
    fn score(&self) -> f64 {
        self.fee()
    }
}

impl Scored for f64 {
    fn score(&self) -> f64 {
        *self
    }
}
