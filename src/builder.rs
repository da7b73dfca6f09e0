//! Builder pattern API for ranking k-mers from library code.
//!
//! # Example
//!
//! ```rust,no_run
//! use kmertop::builder::KmerRanker;
//!
//! let ranked = KmerRanker::new()
//!     .k(7)?
//!     .top(10)
//!     .rank("genome.fa")?;
//!
//! for entry in &ranked {
//!     println!("{} {}", entry.kmer, entry.count);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{io::Write, path::Path};

use bytes::Bytes;

use crate::{
    cli::OutputFormat,
    counter::count,
    error::{BuilderError, KmerLengthError},
    input::Input,
    kmer::KmerLength,
    rank::{top_n, RankedList, DEFAULT_TOP_N},
    report::write_report,
    run::top_kmers,
};

/// A builder for configuring k-mer ranking.
///
/// Use [`KmerRanker::new()`] to create a builder, configure it, then call
/// [`rank()`](KmerRanker::rank), [`rank_sequences()`](KmerRanker::rank_sequences)
/// or [`rank_to_writer()`](KmerRanker::rank_to_writer).
#[derive(Debug, Clone)]
pub struct KmerRanker {
    k: Option<KmerLength>,
    top: usize,
    strict: bool,
    format: OutputFormat,
}

impl Default for KmerRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl KmerRanker {
    /// Creates a builder with default settings.
    ///
    /// Default settings:
    /// - `k`: None (must be set before ranking)
    /// - `top`: 5
    /// - `strict`: false (lenient FASTA parsing)
    /// - `format`: text
    #[must_use]
    pub const fn new() -> Self {
        Self {
            k: None,
            top: DEFAULT_TOP_N,
            strict: false,
            format: OutputFormat::Text,
        }
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is outside 3-8.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmertop::builder::KmerRanker;
    ///
    /// assert!(KmerRanker::new().k(5).is_ok());
    /// assert!(KmerRanker::new().k(9).is_err());
    /// ```
    pub fn k(mut self, k: usize) -> Result<Self, KmerLengthError> {
        self.k = Some(KmerLength::new(k)?);
        Ok(self)
    }

    /// Sets the k-mer length from a pre-validated `KmerLength`.
    #[must_use]
    pub fn k_validated(mut self, k: KmerLength) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets how many k-mers to keep.
    #[must_use]
    pub fn top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Rejects input whose first non-empty line is not a header.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the output format for [`rank_to_writer()`](Self::rank_to_writer).
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Ranks the k-mers of a FASTA file (`-` reads stdin).
    ///
    /// # Errors
    ///
    /// Returns an error if `k` has not been set or the file cannot be read
    /// (or, in strict mode, is not FASTA).
    pub fn rank<P: AsRef<Path>>(&self, path: P) -> Result<RankedList, BuilderError> {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        let input = Input::from_path(path.as_ref());
        Ok(top_kmers(&input, k, self.top, self.strict)?)
    }

    /// Ranks the k-mers of sequences already in memory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bytes::Bytes;
    /// use kmertop::builder::KmerRanker;
    ///
    /// let ranked = KmerRanker::new()
    ///     .k(3)?
    ///     .rank_sequences(&[Bytes::from_static(b"AAAAA")])?;
    /// assert_eq!(ranked.entries()[0].count, 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn rank_sequences(&self, sequences: &[Bytes]) -> Result<RankedList, BuilderError> {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        Ok(top_n(count(sequences, k), self.top))
    }

    /// Ranks a FASTA file and writes the report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` has not been set, the file cannot be read, or
    /// the report cannot be written.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kmertop::builder::KmerRanker;
    /// use kmertop::cli::OutputFormat;
    /// use std::fs::File;
    ///
    /// KmerRanker::new()
    ///     .k(6)?
    ///     .format(OutputFormat::Json)
    ///     .rank_to_writer("genome.fa", File::create("top.json")?)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn rank_to_writer<P, W>(&self, path: P, writer: W) -> Result<RankedList, BuilderError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let ranked = self.rank(path)?;
        write_report(writer, &ranked, self.format)?;
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let ranker = KmerRanker::new();
        assert!(ranker.k.is_none());
        assert_eq!(ranker.top, 5);
        assert!(!ranker.strict);
        assert_eq!(ranker.format, OutputFormat::Text);
    }

    #[test]
    fn rank_without_k_fails() {
        let err = KmerRanker::new()
            .rank_sequences(&[Bytes::from_static(b"ACGT")])
            .unwrap_err();
        assert!(matches!(err, BuilderError::KmerLengthNotSet));
    }

    #[test]
    fn rank_sequences_respects_top() {
        let seqs = [Bytes::from_static(b"ACGTTGCA")];
        let ranked = KmerRanker::new()
            .k_validated(KmerLength::new(3).unwrap())
            .top(2)
            .rank_sequences(&seqs)
            .unwrap();
        let kmers: Vec<String> = ranked.iter().map(|e| e.kmer.to_string()).collect();
        assert_eq!(kmers, ["ACG", "CGT"]);
    }

    #[test]
    fn rank_to_writer_renders_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b">a\nAAAAA\n").unwrap();

        let mut out = Vec::new();
        KmerRanker::new()
            .k(3)
            .unwrap()
            .format(OutputFormat::Tsv)
            .rank_to_writer(file.path(), &mut out)
            .unwrap();
        assert_eq!(out, b"# k=3 top=5\nAAA\t1\n");
    }
}
