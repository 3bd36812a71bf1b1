//! Decoding and fee calculation errors.

use std::fmt;

use thiserror::Error;

/// The numeric field of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// The gas amount (second token).
    Gas,
    /// The fee paid per unit of gas (third token).
    FeePerGas,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gas => f.write_str("gas amount"),
            Self::FeePerGas => f.write_str("gas fees"),
        }
    }
}

/// Errors produced while computing a fee.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeeError {
    /// One of the operands is negative and neither is zero.
    #[error("cannot be less than zero: gas {gas}, fee per gas {fee_per_gas}")]
    NegativeOperand {
        /// Gas operand.
        gas: f64,
        /// Fee per gas operand.
        fee_per_gas: f64,
    },
}

/// Errors produced while decoding an input line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The line has fewer than four tokens.
    #[error("invalid line in transaction file: expected 4 tokens, got {tokens}")]
    Malformed {
        /// Number of tokens found.
        tokens: usize,
    },

    /// A numeric token could not be parsed after stripping its label.
    #[error("parsing {field}: invalid number in {token:?}")]
    NumericFormat {
        /// Which field failed.
        field: NumericField,
        /// The raw token, label included.
        token: String,
    },

    /// The fee could not be computed from the decoded operands.
    #[error("parsing fees for gas: {0}")]
    Fee(#[from] FeeError),
}
