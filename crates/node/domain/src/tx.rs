//! Candidate transactions.

use std::fmt;

use crate::{FeeError, calculate_fee};

/// A decoded transaction competing for a place in the pool.
///
/// The raw gas and fee-per-gas tokens are kept verbatim, label included, so the
/// record can be written back exactly as it was read. The fee is computed once
/// at construction and cannot change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateTx {
    id: String,
    raw_gas: String,
    raw_fee_per_gas: String,
    gas: f64,
    fee_per_gas: f64,
    signature: String,
    fee: f64,
}

impl CandidateTx {
    /// Creates a candidate, computing its fee from the parsed operands.
    pub fn new(
        id: impl Into<String>,
        raw_gas: impl Into<String>,
        raw_fee_per_gas: impl Into<String>,
        gas: f64,
        fee_per_gas: f64,
        signature: impl Into<String>,
    ) -> Result<Self, FeeError> {
        let fee = calculate_fee(gas, fee_per_gas)?;
        Ok(Self {
            id: id.into(),
            raw_gas: raw_gas.into(),
            raw_fee_per_gas: raw_fee_per_gas.into(),
            gas,
            fee_per_gas,
            signature: signature.into(),
            fee,
        })
    }

    /// Transaction identifier (first token).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Original gas token.
    pub fn raw_gas(&self) -> &str {
        &self.raw_gas
    }

    /// Original fee-per-gas token.
    pub fn raw_fee_per_gas(&self) -> &str {
        &self.raw_fee_per_gas
    }

    /// Parsed gas amount.
    pub const fn gas(&self) -> f64 {
        self.gas
    }

    /// Parsed fee per gas.
    pub const fn fee_per_gas(&self) -> f64 {
        self.fee_per_gas
    }

    /// Signature (fourth token).
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Fee used to rank this transaction.
    pub const fn fee(&self) -> f64 {
        self.fee
    }
}

/// Formats the record as its four original tokens joined by single spaces.
impl fmt::Display for CandidateTx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.id, self.raw_gas, self.raw_fee_per_gas, self.signature)
    }
}
