//! Top-N selection over a [`FrequencyTally`].
//!
//! Entries are ordered by count, highest first. Equal counts are ordered by
//! k-mer, ascending, so a given input always produces the same ranking.

use std::cmp::Reverse;

use serde::Serialize;

use crate::{counter::FrequencyTally, kmer::Kmer};

/// Number of entries reported when no limit is given.
pub const DEFAULT_TOP_N: usize = 5;

/// A k-mer with the number of sequences it occurs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KmerCount {
    pub kmer: Kmer,
    pub count: u32,
}

/// The highest-ranked entries of a tally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedList {
    k: usize,
    top: usize,
    #[serde(rename = "kmers")]
    entries: Vec<KmerCount>,
}

impl RankedList {
    /// Window length of the ranked k-mers.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Limit the list was selected with.
    #[must_use]
    pub const fn top(&self) -> usize {
        self.top
    }

    #[must_use]
    pub fn entries(&self) -> &[KmerCount] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KmerCount> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a KmerCount;
    type IntoIter = std::slice::Iter<'a, KmerCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Returns the `n` k-mers found in the most sequences.
///
/// Fewer than `n` entries are returned when the tally is smaller.
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use kmertop::{counter::count_with_len, rank::top_n};
///
/// let tally = count_with_len(&[Bytes::from_static(b"ATAT"), Bytes::from_static(b"ATAA")], 2);
/// let ranked = top_n(tally, 5);
///
/// let text: Vec<_> = ranked.iter().map(|e| (e.kmer.to_string(), e.count)).collect();
/// assert_eq!(
///     text,
///     [("AT".to_string(), 2), ("TA".to_string(), 2), ("AA".to_string(), 1)]
/// );
/// ```
#[must_use]
pub fn top_n(tally: FrequencyTally, n: usize) -> RankedList {
    let k = tally.k();
    let mut entries: Vec<KmerCount> = tally
        .into_iter()
        .map(|(kmer, count)| KmerCount { kmer, count })
        .collect();

    if n < entries.len() {
        entries.select_nth_unstable_by(n, ranking);
        entries.truncate(n);
    }
    entries.sort_unstable_by(ranking);

    RankedList { k, top: n, entries }
}

fn ranking(a: &KmerCount, b: &KmerCount) -> std::cmp::Ordering {
    (Reverse(a.count), &a.kmer).cmp(&(Reverse(b.count), &b.kmer))
}
