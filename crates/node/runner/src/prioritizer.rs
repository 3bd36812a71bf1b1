//! The ingest, admit and emit loop.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info, trace, warn};
use txrank_config::RankConfig;
use txrank_domain::TxDecoder;
use txrank_txpool::{PoolConfig, PoolStats, TransactionPool};

use crate::{FileSink, LineSink, RunnerError};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read and decoded.
    pub lines: usize,
    /// Pool admission counters.
    pub stats: PoolStats,
    /// Lines written to the output.
    pub written: usize,
}

/// Decodes transactions, keeps the highest fees and emits them in descending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prioritizer {
    decoder: TxDecoder,
    pool: PoolConfig,
}

impl Prioritizer {
    /// Creates a prioritizer from a decoder and pool configuration.
    pub const fn new(decoder: TxDecoder, pool: PoolConfig) -> Self {
        Self { decoder, pool }
    }

    /// Creates a prioritizer from a run configuration.
    pub const fn from_config(config: &RankConfig) -> Self {
        Self::new(TxDecoder::new(config.labels.decoder_config()), config.admission.pool_config())
    }

    /// Returns the pool configuration.
    pub const fn pool_config(&self) -> &PoolConfig {
        &self.pool
    }

    /// Reads every line from `reader` into a fresh pool.
    ///
    /// Stops at the first line that cannot be read or decoded.
    pub fn ingest<R: BufRead>(&self, reader: R) -> Result<(TransactionPool, usize), RunnerError> {
        let mut pool = TransactionPool::new(self.pool);
        let mut lines = 0;

        for (idx, line) in reader.lines().enumerate() {
            let number = idx + 1;
            let line = line.map_err(|source| RunnerError::Read { line: number, source })?;
            let tx = self
                .decoder
                .decode(&line)
                .map_err(|source| RunnerError::Decode { line: number, source })?;
            trace!(line = number, id = tx.id(), fee = tx.fee(), "decoded transaction");
            pool.insert(tx);
            lines = number;
        }

        debug!(lines, retained = pool.len(), "ingestion complete");
        Ok((pool, lines))
    }

    /// Drains `pool` into `sink`, highest fee first, and returns the number of lines written.
    pub fn emit<S: LineSink>(
        &self,
        pool: TransactionPool,
        sink: &mut S,
    ) -> Result<usize, RunnerError> {
        let mut written = 0;
        for tx in pool.drain_descending() {
            sink.write_record(&tx).map_err(RunnerError::Write)?;
            written += 1;
        }
        sink.finish().map_err(RunnerError::Write)?;
        Ok(written)
    }

    /// Runs a full pass from `input` to `output`.
    ///
    /// The output file is only created when at least one transaction is retained.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, RunnerError> {
        info!(input = %input.display(), limit = self.pool.limit, "prioritizing transactions");

        let file = File::open(input)
            .map_err(|source| RunnerError::OpenInput { path: input.to_path_buf(), source })?;
        let (pool, lines) = self.ingest(BufReader::new(file))?;
        let stats = pool.stats();

        if pool.is_empty() {
            warn!(lines, output = %output.display(), "no transactions retained, skipping output");
            return Ok(RunSummary { lines, stats, written: 0 });
        }

        let mut sink = FileSink::create(output)?;
        let written = self.emit(pool, &mut sink)?;

        info!(
            lines,
            written,
            evicted = stats.evicted,
            rejected = stats.rejected,
            output = %output.display(),
            "wrote prioritized transactions"
        );
        Ok(RunSummary { lines, stats, written })
    }
}
