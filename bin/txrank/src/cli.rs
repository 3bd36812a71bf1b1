use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use txrank_config::{LabelMode, RankConfig};
use txrank_runner::Prioritizer;

#[derive(Parser, Debug)]
#[command(name = "txrank")]
#[command(about = "Keep the highest-fee transactions from a transaction file")]
pub(crate) struct Cli {
    /// Path to the transaction file to parse.
    #[arg(long = "intnx", visible_alias = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Upper limit for the number of transactions to return.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Path of the prioritized transaction file to write.
    #[arg(long = "outtnx", visible_alias = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Split numeric tokens at this separator instead of fixed width labels.
    #[arg(long, value_name = "CHAR")]
    pub label_separator: Option<char>,

    /// TOML or JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub(crate) fn load_config(&self) -> eyre::Result<RankConfig> {
        let mut config = RankConfig::load(self.config.as_deref())?;

        if let Some(ref input) = self.input {
            config.io.input = input.clone();
        }
        if let Some(ref output) = self.output {
            config.io.output = output.clone();
        }
        if let Some(limit) = self.limit {
            config.admission.limit = limit;
        }
        if let Some(separator) = self.label_separator {
            config.labels.format = LabelMode::Delimited;
            config.labels.separator = separator;
        }

        Ok(config)
    }

    pub(crate) fn run(self) -> eyre::Result<()> {
        let config = self.load_config()?;
        tracing::debug!(?config, "Full configuration");

        let summary = Prioritizer::from_config(&config)
            .run(&config.io.input, &config.io.output)
            .wrap_err("prioritizing transactions")?;

        tracing::info!(lines = summary.lines, written = summary.written, "Finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use txrank_config::{DEFAULT_INPUT_PATH, DEFAULT_LIMIT};

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_come_from_config() {
        let cli = Cli::parse_from(["txrank"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.admission.limit, DEFAULT_LIMIT);
        assert_eq!(config.io.input, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.labels.format, LabelMode::FixedWidth);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "txrank",
            "--intnx",
            "in.txt",
            "--outtnx",
            "out.txt",
            "--limit",
            "7",
            "--label-separator",
            "=",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.io.input, PathBuf::from("in.txt"));
        assert_eq!(config.io.output, PathBuf::from("out.txt"));
        assert_eq!(config.admission.limit, 7);
        assert_eq!(config.labels.format, LabelMode::Delimited);
        assert_eq!(config.labels.separator, '=');
    }

    #[test]
    fn aliases_are_accepted() {
        let cli = Cli::parse_from(["txrank", "--input", "a.txt", "--output", "b.txt"]);
        assert_eq!(cli.input, Some(PathBuf::from("a.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("b.txt")));
    }
}
