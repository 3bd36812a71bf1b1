//! Input and output locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default transaction input file.
pub const DEFAULT_INPUT_PATH: &str = "data/transactions.txt";

/// Default prioritized output file.
pub const DEFAULT_OUTPUT_PATH: &str = "data/prioritized-transactions.txt";

/// File locations read and written by a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IoConfig {
    /// Transaction file to read, one record per line.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// File receiving the retained transactions, highest fee first.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self { input: default_input(), output: default_output() }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_io_config() {
        let config = IoConfig::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn test_io_config_partial_defaults() {
        let config: IoConfig =
            serde_json::from_str(r#"{"input": "in.txt"}"#).expect("deserialize");
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn test_io_config_toml_roundtrip() {
        let config =
            IoConfig { input: PathBuf::from("a/in.txt"), output: PathBuf::from("b/out.txt") };
        let serialized = toml::to_string(&config).expect("serialize toml");
        let deserialized: IoConfig = toml::from_str(&serialized).expect("deserialize toml");
        assert_eq!(config, deserialized);
    }
}
