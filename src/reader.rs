//! FASTA parsing.
//!
//! The parser is line based and lenient: header lines (`>` in the first
//! column) separate records, every other line is trimmed and appended to the
//! current record. Text before the first header is kept as a record of its
//! own, and records without sequence lines are dropped. Pass `strict = true`
//! to reject input whose first non-empty line is not a header.

use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use bytes::{Bytes, BytesMut};

use crate::{error::KmerTopError, input::Input};

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

/// First byte of a FASTA header line.
pub const RECORD_MARKER: u8 = b'>';

/// Reads every sequence from `input`, in file order.
///
/// # Errors
///
/// Returns [`KmerTopError::SequenceRead`] if the input cannot be opened or
/// read, and [`KmerTopError::InvalidFormat`] in strict mode when the input
/// does not start with a header line.
///
/// # Example
///
/// ```rust,no_run
/// use kmertop::{input::Input, reader::read};
/// use std::path::Path;
///
/// let sequences = read(&Input::from_path(Path::new("genome.fa")), false)?;
/// println!("{} records", sequences.len());
/// # Ok::<(), kmertop::error::KmerTopError>(())
/// ```
pub fn read(input: &Input, strict: bool) -> Result<Vec<Bytes>, KmerTopError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("read_fasta", input = %input).entered();

    let path = input.display_path();
    let reader = input.open().map_err(|source| KmerTopError::SequenceRead {
        source,
        path: path.clone(),
    })?;
    parse(reader, strict, &path)
}

/// Parses FASTA text held in memory.
///
/// # Errors
///
/// Returns [`KmerTopError::InvalidFormat`] in strict mode when the text does
/// not start with a header line.
///
/// # Example
///
/// ```rust
/// use kmertop::reader::parse_str;
///
/// let sequences = parse_str(">one\nACGT\nAC\n>two\nTTTT\n", false)?;
/// assert_eq!(sequences, ["ACGTAC", "TTTT"]);
/// # Ok::<(), kmertop::error::KmerTopError>(())
/// ```
pub fn parse_str(text: &str, strict: bool) -> Result<Vec<Bytes>, KmerTopError> {
    parse(text.as_bytes(), strict, Path::new("<memory>"))
}

/// Parses FASTA text from any buffered reader.
///
/// `source` only labels errors.
///
/// # Errors
///
/// Returns [`KmerTopError::SequenceRead`] on I/O failure and
/// [`KmerTopError::InvalidFormat`] in strict mode when the first non-empty
/// line is not a header.
pub fn parse<R: BufRead>(
    mut reader: R,
    strict: bool,
    source: &Path,
) -> Result<Vec<Bytes>, KmerTopError> {
    let mut sequences = Vec::new();
    let mut current = BytesMut::new();
    let mut line = Vec::new();
    let mut line_no = 0;
    let mut seen_content = false;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| read_error(e, source))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        if line.first() == Some(&RECORD_MARKER) {
            seen_content = true;
            flush(&mut current, &mut sequences);
            continue;
        }

        let bases = line.trim_ascii();
        if bases.is_empty() {
            continue;
        }
        if strict && !seen_content {
            return Err(KmerTopError::InvalidFormat {
                details: format!(
                    "expected a '>' header line, found {:?}",
                    String::from_utf8_lossy(bases)
                ),
                line: line_no,
                path: source.to_path_buf(),
            });
        }
        seen_content = true;
        current.extend_from_slice(bases);
    }
    flush(&mut current, &mut sequences);

    #[cfg(feature = "tracing")]
    debug!(sequences = sequences.len(), lines = line_no, "Read sequences");

    Ok(sequences)
}

fn flush(current: &mut BytesMut, sequences: &mut Vec<Bytes>) {
    if !current.is_empty() {
        sequences.push(current.split().freeze());
    }
}

fn read_error(source: std::io::Error, path: &Path) -> KmerTopError {
    KmerTopError::SequenceRead {
        source,
        path: PathBuf::from(path),
    }
}
