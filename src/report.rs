//! Report rendering.
//!
//! A report is rendered once and the same bytes are written to every
//! destination in turn.
//!
//! # Example
//!
//! ```rust
//! use bytes::Bytes;
//! use kmertop::{cli::OutputFormat, counter::count_with_len, rank::top_n, report::render};
//!
//! let ranked = top_n(count_with_len(&[Bytes::from_static(b"AAAAA")], 3), 5);
//! let text = render(&ranked, OutputFormat::Text)?;
//!
//! assert_eq!(text, b"The top 5 most common 3-mers are:\nAAA 1\n");
//! # Ok::<(), kmertop::error::KmerTopError>(())
//! ```

use std::{
    fs::File,
    io::{stdout, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{cli::OutputFormat, error::KmerTopError, rank::RankedList};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Where a report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output.
    Console,
    /// A file, created or truncated on write.
    File(PathBuf),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Console => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Writes one rendered report to a list of destinations.
#[derive(Debug, Clone, Default)]
pub struct ReportSink {
    destinations: Vec<Destination>,
    format: OutputFormat,
}

impl ReportSink {
    /// Creates a sink with no destinations.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            destinations: Vec::new(),
            format,
        }
    }

    /// Adds standard output as a destination.
    #[must_use]
    pub fn console(mut self) -> Self {
        self.destinations.push(Destination::Console);
        self
    }

    /// Adds a report file as a destination.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.destinations.push(Destination::File(path.into()));
        self
    }

    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Renders `ranked` and writes it to every destination, in order.
    ///
    /// Every report file is created before any destination receives a byte,
    /// so a file that cannot be opened leaves stdout untouched.
    ///
    /// # Errors
    ///
    /// Returns [`KmerTopError::Write`] if stdout fails,
    /// [`KmerTopError::ReportWrite`] if a report file cannot be created or
    /// written, and [`KmerTopError::Json`] if JSON rendering fails.
    pub fn render(&self, ranked: &RankedList) -> Result<(), KmerTopError> {
        let report = render(ranked, self.format)?;

        let mut files = self
            .destinations
            .iter()
            .filter_map(|destination| match destination {
                Destination::File(path) => Some(ReportFile::create(path)),
                Destination::Console => None,
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        for destination in &self.destinations {
            #[cfg(feature = "tracing")]
            debug!(%destination, bytes = report.len(), "Writing report");

            match destination {
                Destination::Console => {
                    let mut out = stdout().lock();
                    out.write_all(&report)?;
                    out.flush()?;
                }
                Destination::File(_) => {
                    if let Some(file) = files.next() {
                        file.write(&report)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// A report file opened ahead of writing.
struct ReportFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ReportFile {
    fn create(path: &Path) -> Result<Self, KmerTopError> {
        let file = File::create(path).map_err(|source| KmerTopError::ReportWrite {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    fn write(mut self, report: &[u8]) -> Result<(), KmerTopError> {
        self.writer
            .write_all(report)
            .and_then(|()| self.writer.flush())
            .map_err(|source| KmerTopError::ReportWrite {
                source,
                path: self.path,
            })
    }
}

/// Renders `ranked` in `format`.
///
/// # Errors
///
/// Returns [`KmerTopError::Json`] if JSON serialization fails.
pub fn render(ranked: &RankedList, format: OutputFormat) -> Result<Vec<u8>, KmerTopError> {
    let mut buf = Vec::new();
    write_report(&mut buf, ranked, format)?;
    Ok(buf)
}

/// Writes `ranked` in `format` to any writer.
///
/// # Errors
///
/// Returns [`KmerTopError::Write`] on I/O failure and
/// [`KmerTopError::Json`] if JSON serialization fails.
pub fn write_report<W: Write>(
    mut writer: W,
    ranked: &RankedList,
    format: OutputFormat,
) -> Result<(), KmerTopError> {
    match format {
        OutputFormat::Text => {
            writeln!(
                writer,
                "The top {} most common {}-mers are:",
                ranked.top(),
                ranked.k()
            )?;
            for entry in ranked {
                writeln!(writer, "{} {}", entry.kmer, entry.count)?;
            }
        }
        OutputFormat::Tsv => {
            writeln!(writer, "# k={} top={}", ranked.k(), ranked.top())?;
            for entry in ranked {
                writeln!(writer, "{}\t{}", entry.kmer, entry.count)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, ranked)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
