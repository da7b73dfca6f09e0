//! Per-sequence k-mer tallying.
//!
//! The tally counts *sequences*, not occurrences: a k-mer found anywhere in a
//! sequence adds exactly one to its entry, however often it repeats inside
//! that sequence.
//!
//! # Example
//!
//! ```rust
//! use bytes::Bytes;
//! use kmertop::{counter::count, kmer::KmerLength};
//!
//! let sequences = [Bytes::from_static(b"AAAAA"), Bytes::from_static(b"CAAAC")];
//! let tally = count(&sequences, KmerLength::new(3)?);
//!
//! assert_eq!(tally.get("AAA"), Some(2));
//! assert_eq!(tally.get("CAA"), Some(1));
//! # Ok::<(), kmertop::error::KmerLengthError>(())
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::kmer::{Kmer, KmerLength};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Number of sequences each k-mer occurs in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTally {
    counts: FxHashMap<Kmer, u32>,
    k: usize,
    sequences: usize,
}

impl FrequencyTally {
    /// Sequence count for `kmer`, or `None` if it never occurred.
    pub fn get(&self, kmer: impl AsRef<[u8]>) -> Option<u32> {
        self.counts.get(kmer.as_ref()).copied()
    }

    /// Number of distinct k-mers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Window length the tally was built with.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Number of sequences scanned, including those shorter than `k`.
    #[must_use]
    pub const fn sequences_scanned(&self) -> usize {
        self.sequences
    }

    /// Iterates over `(kmer, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Kmer, u32)> + '_ {
        self.counts.iter().map(|(kmer, &count)| (kmer, count))
    }

    /// Converts the tally into a map keyed by k-mer text.
    ///
    /// Keys use [`Kmer`]'s display form, so bytes outside printable ASCII
    /// are escaped and distinct k-mers keep distinct keys.
    #[must_use]
    pub fn into_hashmap(self) -> HashMap<String, u32> {
        self.counts
            .into_iter()
            .map(|(kmer, count)| (kmer.to_string(), count))
            .collect()
    }
}

impl IntoIterator for FrequencyTally {
    type Item = (Kmer, u32);
    type IntoIter = std::collections::hash_map::IntoIter<Kmer, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Incremental k-mer counter, fed one sequence at a time.
///
/// The per-sequence set is cleared, not reallocated, between sequences.
#[derive(Debug)]
pub struct KmerCounter {
    seen: FxHashSet<Kmer>,
    tally: FrequencyTally,
}

impl KmerCounter {
    /// Creates a counter for a validated k-mer length.
    #[must_use]
    pub fn new(k: KmerLength) -> Self {
        Self::with_len(k.get())
    }

    /// Creates a counter for any window length.
    ///
    /// A length of zero produces no k-mers.
    #[must_use]
    pub fn with_len(k: usize) -> Self {
        Self {
            seen: FxHashSet::default(),
            tally: FrequencyTally {
                k,
                ..FrequencyTally::default()
            },
        }
    }

    /// Adds one sequence to the tally.
    pub fn add_sequence(&mut self, seq: &Bytes) {
        let k = self.tally.k;
        self.tally.sequences += 1;

        if k == 0 || seq.len() < k {
            #[cfg(feature = "tracing")]
            trace!(len = seq.len(), k, "Sequence shorter than k, skipped");
            return;
        }

        for i in 0..=seq.len() - k {
            self.seen.insert(Kmer::from(seq.slice(i..i + k)));
        }

        #[cfg(feature = "tracing")]
        trace!(len = seq.len(), distinct = self.seen.len(), "Counted sequence");

        for kmer in self.seen.drain() {
            *self.tally.counts.entry(kmer).or_insert(0) += 1;
        }
    }

    /// Consumes the counter and returns the tally.
    #[must_use]
    pub fn finish(self) -> FrequencyTally {
        #[cfg(feature = "tracing")]
        debug!(
            sequences = self.tally.sequences,
            distinct_kmers = self.tally.len(),
            k = self.tally.k,
            "Tally complete"
        );

        self.tally
    }
}

/// Tallies, for every k-mer, how many of `sequences` contain it.
#[must_use]
pub fn count(sequences: &[Bytes], k: KmerLength) -> FrequencyTally {
    count_with_len(sequences, k.get())
}

/// Like [`count`], for an unvalidated window length.
#[must_use]
pub fn count_with_len(sequences: &[Bytes], k: usize) -> FrequencyTally {
    let mut counter = KmerCounter::with_len(k);
    for seq in sequences {
        counter.add_sequence(seq);
    }
    counter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(items: &[&'static str]) -> Vec<Bytes> {
        items.iter().map(|s| Bytes::from_static(s.as_bytes())).collect()
    }

    #[test]
    fn homopolymer_counts_once() {
        let tally = count_with_len(&seqs(&["AAAAA"]), 3);
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.get("AAA"), Some(1));
    }

    #[test]
    fn counts_sequences_not_occurrences() {
        let tally = count_with_len(&seqs(&["ATAT", "ATAA"]), 2);
        assert_eq!(tally.get("AT"), Some(2));
        assert_eq!(tally.get("TA"), Some(2));
        assert_eq!(tally.get("AA"), Some(1));
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn short_sequences_are_skipped() {
        let tally = count_with_len(&seqs(&["AC", "ACGT", ""]), 3);
        assert_eq!(tally.get("ACG"), Some(1));
        assert_eq!(tally.get("CGT"), Some(1));
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.sequences_scanned(), 3);
    }

    #[test]
    fn sequence_of_exactly_k_has_one_window() {
        let tally = count_with_len(&seqs(&["GATTACA"]), 7);
        assert_eq!(tally.get("GATTACA"), Some(1));
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn zero_length_window_counts_nothing() {
        assert!(count_with_len(&seqs(&["ACGT"]), 0).is_empty());
    }

    #[test]
    fn empty_input_is_empty_tally() {
        let tally = count_with_len(&[], 4);
        assert!(tally.is_empty());
        assert_eq!(tally.k(), 4);
    }

    #[test]
    fn state_resets_between_sequences() {
        let mut counter = KmerCounter::with_len(3);
        counter.add_sequence(&Bytes::from_static(b"CCCCCC"));
        counter.add_sequence(&Bytes::from_static(b"GGG"));
        counter.add_sequence(&Bytes::from_static(b"CCC"));
        let tally = counter.finish();
        assert_eq!(tally.get("CCC"), Some(2));
        assert_eq!(tally.get("GGG"), Some(1));
    }

    #[test]
    fn lowercase_is_a_different_kmer() {
        let tally = count_with_len(&seqs(&["acgt", "ACGT"]), 4);
        assert_eq!(tally.get("acgt"), Some(1));
        assert_eq!(tally.get("ACGT"), Some(1));
    }

    #[test]
    fn into_hashmap_uses_text_keys() {
        let map = count_with_len(&seqs(&["ACGA"]), 3).into_hashmap();
        assert_eq!(map.get("ACG"), Some(&1));
        assert_eq!(map.get("CGA"), Some(&1));
    }

    #[test]
    fn into_hashmap_keeps_non_utf8_kmers_apart() {
        let seqs = [
            Bytes::from_static(b"\xC3AA"),
            Bytes::from_static(b"\xC4AA"),
        ];
        let map = count_with_len(&seqs, 3).into_hashmap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("\\xc3AA"), Some(&1));
        assert_eq!(map.get("\\xc4AA"), Some(&1));
    }
}
