//! Line decoding.

use tracing::trace;

use crate::{CandidateTx, DecodeError, NumericField};

/// Default label width of the gas token (`gas:`).
pub const DEFAULT_GAS_LABEL_WIDTH: usize = 4;

/// Default label width of the fee-per-gas token (`feePerGas:`).
pub const DEFAULT_FEE_PER_GAS_LABEL_WIDTH: usize = 10;

const TOKENS_PER_LINE: usize = 4;

/// How the label in front of a numeric token is separated from the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// Strip a fixed number of characters from each numeric token.
    FixedWidth {
        /// Characters stripped from the gas token.
        gas: usize,
        /// Characters stripped from the fee-per-gas token.
        fee_per_gas: usize,
    },
    /// The label ends at the first occurrence of the separator.
    Delimited(char),
    /// The label is the leading run of ASCII letters, optionally followed by `:` or `=`.
    Alphabetic,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::FixedWidth {
            gas: DEFAULT_GAS_LABEL_WIDTH,
            fee_per_gas: DEFAULT_FEE_PER_GAS_LABEL_WIDTH,
        }
    }
}

impl LabelFormat {
    /// Returns the numeric remainder of `token`, or `None` if the label cannot be removed.
    fn strip<'a>(&self, token: &'a str, field: NumericField) -> Option<&'a str> {
        match *self {
            Self::FixedWidth { gas, fee_per_gas } => {
                let width = match field {
                    NumericField::Gas => gas,
                    NumericField::FeePerGas => fee_per_gas,
                };
                // Count characters, not bytes, so a multi-byte label never splits a code point.
                token.char_indices().nth(width).map(|(idx, _)| &token[idx..])
            }
            Self::Delimited(sep) => token.split_once(sep).map(|(_, value)| value),
            Self::Alphabetic => {
                let rest = token.trim_start_matches(|c: char| c.is_ascii_alphabetic());
                Some(rest.strip_prefix([':', '=']).unwrap_or(rest))
            }
        }
    }
}

/// Configuration for [`TxDecoder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Label handling for the two numeric tokens.
    pub label_format: LabelFormat,
}

impl DecoderConfig {
    /// Creates a decoder configuration using fixed width labels.
    pub const fn new() -> Self {
        Self {
            label_format: LabelFormat::FixedWidth {
                gas: DEFAULT_GAS_LABEL_WIDTH,
                fee_per_gas: DEFAULT_FEE_PER_GAS_LABEL_WIDTH,
            },
        }
    }

    /// Sets the label format.
    pub const fn with_label_format(mut self, label_format: LabelFormat) -> Self {
        self.label_format = label_format;
        self
    }
}

/// Decodes input lines into [`CandidateTx`] records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TxDecoder {
    config: DecoderConfig,
}

impl TxDecoder {
    /// Creates a decoder with the given configuration.
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder configuration.
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one line and computes its fee.
    pub fn decode(&self, line: &str) -> Result<CandidateTx, DecodeError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() > TOKENS_PER_LINE {
            trace!(extra = tokens.len() - TOKENS_PER_LINE, "ignoring trailing tokens");
        }

        let [id, raw_gas, raw_fee_per_gas, signature, ..] = tokens[..] else {
            return Err(DecodeError::Malformed { tokens: tokens.len() });
        };
        let gas = self.parse_numeric(raw_gas, NumericField::Gas)?;
        let fee_per_gas = self.parse_numeric(raw_fee_per_gas, NumericField::FeePerGas)?;

        CandidateTx::new(id, raw_gas, raw_fee_per_gas, gas, fee_per_gas, signature)
            .map_err(DecodeError::from)
    }

    fn parse_numeric(&self, token: &str, field: NumericField) -> Result<f64, DecodeError> {
        self.config
            .label_format
            .strip(token, field)
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .ok_or_else(|| DecodeError::NumericFormat { field, token: token.to_string() })
    }
}
