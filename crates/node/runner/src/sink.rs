//! Output sinks for drained transactions.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use txrank_domain::CandidateTx;

use crate::RunnerError;

/// Consumes transactions in the order they are drained from the pool.
pub trait LineSink {
    /// Writes one transaction as a single output line.
    fn write_record(&mut self, tx: &CandidateTx) -> io::Result<()>;

    /// Flushes any buffered output.
    fn finish(&mut self) -> io::Result<()>;
}

/// A sink writing lines to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_record(&mut self, tx: &CandidateTx) -> io::Result<()> {
        writeln!(self.writer, "{tx}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// A buffered sink writing to a file, truncating any previous contents.
#[derive(Debug)]
pub struct FileSink {
    inner: WriterSink<BufWriter<File>>,
}

impl FileSink {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, RunnerError> {
        let file = File::create(path)
            .map_err(|source| RunnerError::CreateOutput { path: path.to_path_buf(), source })?;
        Ok(Self { inner: WriterSink::new(BufWriter::new(file)) })
    }
}

impl LineSink for FileSink {
    fn write_record(&mut self, tx: &CandidateTx) -> io::Result<()> {
        self.inner.write_record(tx)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.finish()
    }
}
