//! Error types for kmertop.
//!
//! Every fallible operation in the library returns [`KmerTopError`] (or
//! [`BuilderError`] when going through the builder API), so callers can match
//! on the failure kind instead of inspecting messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmertop operations.
#[derive(Debug, Error)]
pub enum KmerTopError {
    /// K-mer length is outside the valid range (3-8).
    #[error("invalid k-mer length {k}: must be between {min} and {max}")]
    InvalidKmerLength { k: usize, min: u8, max: u8 },

    /// Failed to open or read the sequence input.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Input does not look like FASTA (strict mode only).
    #[error("'{path}' is not a FASTA file (line {line}): {details}")]
    InvalidFormat {
        details: String,
        line: usize,
        path: PathBuf,
    },

    /// Failed to write the report to the console or a caller-supplied writer.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the report file.
    #[error("failed to write report file '{path}': {source}")]
    ReportWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be between {min} and {max}")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
    /// Minimum valid k-mer length.
    pub min: u8,
    /// Maximum valid k-mer length.
    pub max: u8,
}

impl From<std::io::Error> for KmerTopError {
    fn from(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}

impl From<serde_json::Error> for KmerTopError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

impl From<KmerLengthError> for KmerTopError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength {
            k: err.k,
            min: err.min,
            max: err.max,
        }
    }
}

/// Errors that can occur when using the builder API.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// K-mer length was not set before calling a ranking method.
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Invalid k-mer length provided.
    #[error(transparent)]
    KmerLength(#[from] KmerLengthError),

    /// Error reading, parsing or reporting.
    #[error(transparent)]
    KmerTop(#[from] KmerTopError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmer_length_error_display() {
        let err = KmerLengthError {
            k: 9,
            min: 3,
            max: 8,
        };
        assert_eq!(
            err.to_string(),
            "k-mer length 9 is out of range: must be between 3 and 8"
        );
    }

    #[test]
    fn kmertop_error_from_kmer_length_error() {
        let err: KmerTopError = KmerLengthError {
            k: 2,
            min: 3,
            max: 8,
        }
        .into();
        assert!(matches!(err, KmerTopError::InvalidKmerLength { k: 2, .. }));
    }

    #[test]
    fn invalid_format_display_names_file_and_line() {
        let err = KmerTopError::InvalidFormat {
            details: "expected '>' header".to_string(),
            line: 1,
            path: PathBuf::from("reads.txt"),
        };
        assert_eq!(
            err.to_string(),
            "'reads.txt' is not a FASTA file (line 1): expected '>' header"
        );
    }

    #[test]
    fn io_error_converts_to_write_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: KmerTopError = io.into();
        assert!(matches!(err, KmerTopError::Write { .. }));
    }

    #[test]
    fn builder_error_is_transparent() {
        let err: BuilderError = KmerLengthError {
            k: 12,
            min: 3,
            max: 8,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "k-mer length 12 is out of range: must be between 3 and 8"
        );
    }
}
