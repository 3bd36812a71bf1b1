//! Label handling for the numeric input tokens.

use serde::{Deserialize, Serialize};
use txrank_domain::{
    DEFAULT_FEE_PER_GAS_LABEL_WIDTH, DEFAULT_GAS_LABEL_WIDTH, DecoderConfig, LabelFormat,
};

/// Default gas label width (`gas:`).
pub const DEFAULT_GAS_WIDTH: usize = DEFAULT_GAS_LABEL_WIDTH;

/// Default fee-per-gas label width (`feePerGas:`).
pub const DEFAULT_FEE_PER_GAS_WIDTH: usize = DEFAULT_FEE_PER_GAS_LABEL_WIDTH;

/// Default label separator used in delimited mode.
pub const DEFAULT_SEPARATOR: char = ':';

/// How labels are removed from the numeric tokens.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Strip `gas_width` and `fee_per_gas_width` characters.
    #[default]
    FixedWidth,
    /// Strip everything up to and including `separator`.
    Delimited,
    /// Strip leading ASCII letters and an optional `:` or `=`.
    Alphabetic,
}

/// Label handling configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelConfig {
    /// Label mode.
    #[serde(default)]
    pub format: LabelMode,

    /// Gas label width in fixed width mode.
    #[serde(default = "default_gas_width")]
    pub gas_width: usize,

    /// Fee-per-gas label width in fixed width mode.
    #[serde(default = "default_fee_per_gas_width")]
    pub fee_per_gas_width: usize,

    /// Separator in delimited mode.
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            format: LabelMode::default(),
            gas_width: DEFAULT_GAS_WIDTH,
            fee_per_gas_width: DEFAULT_FEE_PER_GAS_WIDTH,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl LabelConfig {
    /// Returns the decoder label format described by this configuration.
    pub const fn label_format(&self) -> LabelFormat {
        match self.format {
            LabelMode::FixedWidth => LabelFormat::FixedWidth {
                gas: self.gas_width,
                fee_per_gas: self.fee_per_gas_width,
            },
            LabelMode::Delimited => LabelFormat::Delimited(self.separator),
            LabelMode::Alphabetic => LabelFormat::Alphabetic,
        }
    }

    /// Builds the runtime decoder configuration.
    pub const fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::new().with_label_format(self.label_format())
    }
}

const fn default_gas_width() -> usize {
    DEFAULT_GAS_WIDTH
}

const fn default_fee_per_gas_width() -> usize {
    DEFAULT_FEE_PER_GAS_WIDTH
}

const fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label_config_matches_decoder_default() {
        let config = LabelConfig::default();
        assert_eq!(config.format, LabelMode::FixedWidth);
        assert_eq!(config.label_format(), LabelFormat::default());
        assert_eq!(config.decoder_config(), DecoderConfig::default());
    }

    #[test]
    fn test_delimited_mode() {
        let config: LabelConfig =
            toml::from_str("format = \"delimited\"\nseparator = \"=\"").expect("deserialize");
        assert_eq!(config.label_format(), LabelFormat::Delimited('='));
    }

    #[test]
    fn test_fixed_width_override() {
        let config: LabelConfig =
            serde_json::from_str(r#"{"gas_width": 3, "fee_per_gas_width": 9}"#).expect("json");
        assert_eq!(config.label_format(), LabelFormat::FixedWidth { gas: 3, fee_per_gas: 9 });
    }

    #[test]
    fn test_alphabetic_mode() {
        let config: LabelConfig = serde_json::from_str(r#"{"format": "alphabetic"}"#).unwrap();
        assert_eq!(config.label_format(), LabelFormat::Alphabetic);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(toml::from_str::<LabelConfig>("format = \"regex\"").is_err());
    }
}
