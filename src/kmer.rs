//! K-mer value types.
//!
//! [`KmerLength`] is a validated window length; [`Kmer`] is a single window
//! taken from a sequence, cheap to clone and usable as a map key.

use std::{borrow::Borrow, fmt};

use bytes::Bytes;
use serde::{Serialize, Serializer};

use crate::error::KmerLengthError;

/// Smallest k accepted by [`KmerLength::new`].
pub const MIN_K: u8 = 3;
/// Largest k accepted by [`KmerLength::new`].
pub const MAX_K: u8 = 8;

/// A k-mer length known to lie within `MIN_K..=MAX_K`.
///
/// # Example
///
/// ```rust
/// use kmertop::kmer::KmerLength;
///
/// let k = KmerLength::new(7)?;
/// assert_eq!(k.get(), 7);
/// assert!(KmerLength::new(2).is_err());
/// assert!(KmerLength::new(9).is_err());
/// # Ok::<(), kmertop::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Validates `k` against the supported range.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is below [`MIN_K`] or above [`MAX_K`].
    pub const fn new(k: usize) -> Result<Self, KmerLengthError> {
        if k < MIN_K as usize || k > MAX_K as usize {
            return Err(KmerLengthError {
                k,
                min: MIN_K,
                max: MAX_K,
            });
        }
        Ok(Self(k))
    }

    /// Returns the length as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

/// A fixed-length window of a sequence.
///
/// Windows share the sequence buffer, so building one never copies bases.
/// Ordering is byte-wise, which for nucleotide text is lexicographic.
/// Displayed text escapes bytes outside printable ASCII (`\xNN`), so two
/// distinct k-mers never print the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kmer(Bytes);

impl Kmer {
    /// Borrows the k-mer's bases.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bases in the k-mer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a zero-length k-mer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<[u8]> for Kmer {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for Kmer {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<&'static str> for Kmer {
    fn from(s: &'static str) -> Self {
        Self(Bytes::from_static(s.as_bytes()))
    }
}

impl From<String> for Kmer {
    fn from(s: String) -> Self {
        Self(Bytes::from(s))
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

impl Serialize for Kmer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
