//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur when loading or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to parse JSON configuration.
    #[error("failed to parse JSON config: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The config file extension is neither TOML nor JSON.
    #[error("unsupported config format for {0}: expected .toml or .json")]
    UnknownFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::RankConfig;

    #[test]
    fn test_missing_config_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("txrank.toml");

        let err = RankConfig::load(Some(&path)).unwrap_err();
        let ConfigError::Read { path: failed, source } = &err else {
            panic!("expected read error, got {err:?}");
        };
        assert_eq!(failed, &path);
        assert_eq!(source.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("failed to read config file"));
        assert!(err.to_string().contains("txrank.toml"));
    }

    #[test]
    fn test_unknown_format_display() {
        let err = ConfigError::UnknownFormat(PathBuf::from("txrank.yaml"));
        assert_eq!(
            err.to_string(),
            "unsupported config format for txrank.yaml: expected .toml or .json"
        );
    }

    #[test]
    fn test_unclosed_toml_array_is_parse_error() {
        let err = RankConfig::from_toml_str("[admission]\nlimit = [1").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
        assert!(err.to_string().starts_with("failed to parse TOML config"));
    }

    #[test]
    fn test_negative_json_limit_is_parse_error() {
        let err = RankConfig::from_json_str(r#"{"admission": {"limit": -1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::JsonParse(_)));
        assert!(err.to_string().starts_with("failed to parse JSON config"));
    }

    #[test]
    fn test_config_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
    }
}
