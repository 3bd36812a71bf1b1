//! Top-level run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AdmissionConfig, ConfigError, IoConfig, LabelConfig};

/// Complete configuration for a prioritization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankConfig {
    /// Input and output files.
    #[serde(default)]
    pub io: IoConfig,

    /// Admission pool settings.
    #[serde(default)]
    pub admission: AdmissionConfig,

    /// Label handling for the numeric tokens.
    #[serde(default)]
    pub labels: LabelConfig,
}

impl RankConfig {
    /// Loads configuration from `path`, or returns the defaults when no path is given.
    ///
    /// Files ending in `.json` are parsed as JSON and files ending in `.toml`
    /// as TOML; any other extension is rejected.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnknownFormat(path.to_path_buf())),
        };
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::PathBuf};

    use txrank_domain::LabelFormat;

    use super::*;
    use crate::{DEFAULT_INPUT_PATH, DEFAULT_LIMIT, LabelMode};

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = RankConfig::load(None).expect("defaults");
        assert_eq!(config, RankConfig::default());
        assert_eq!(config.admission.limit, DEFAULT_LIMIT);
        assert_eq!(config.io.input, PathBuf::from(DEFAULT_INPUT_PATH));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RankConfig::from_toml_str(
            r#"
            [admission]
            limit = 10

            [labels]
            format = "alphabetic"
            "#,
        )
        .expect("parse");
        assert_eq!(config.admission.limit, 10);
        assert_eq!(config.labels.format, LabelMode::Alphabetic);
        assert_eq!(config.io, IoConfig::default());
    }

    #[test]
    fn test_from_json_full() {
        let config = RankConfig::from_json_str(
            r#"{
                "io": {"input": "in.txt", "output": "out.txt"},
                "admission": {"limit": 2},
                "labels": {"format": "delimited", "separator": "="}
            }"#,
        )
        .expect("parse");
        assert_eq!(config.io.output, PathBuf::from("out.txt"));
        assert_eq!(config.admission.pool_config().limit, 2);
        assert_eq!(config.labels.label_format(), LabelFormat::Delimited('='));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = RankConfig::default();
        config.admission.limit = 77;
        config.labels.format = LabelMode::Delimited;
        let serialized = toml::to_string(&config).expect("serialize");
        assert_eq!(RankConfig::from_toml_str(&serialized).expect("parse"), config);
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("tempfile");
        writeln!(file, "[admission]\nlimit = 42").expect("write");
        let config = RankConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.admission.limit, 42);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().expect("tempfile");
        write!(file, r#"{{"io": {{"input": "x.txt"}}}}"#).expect("write");
        let config = RankConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.io.input, PathBuf::from("x.txt"));
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().expect("tempfile");
        let err = RankConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RankConfig::load(Some(Path::new("/nonexistent/txrank.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("tempfile");
        writeln!(file, "[admission]\nlimit = \"many\"").expect("write");
        let err = RankConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
