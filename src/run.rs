//! The read → count → rank → report pipeline.

use std::{fmt::Debug, path::Path};

use crate::{
    config::Config,
    counter::{count, FrequencyTally},
    error::KmerTopError,
    input::Input,
    kmer::KmerLength,
    rank::{top_n, RankedList},
    reader::read,
};

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

/// Runs the whole pipeline and writes the report to every configured
/// destination.
///
/// Nothing is written unless reading, counting and ranking succeed and
/// every report file can be created.
///
/// # Errors
///
/// Returns the first read, format or write error encountered.
pub fn run(config: &Config) -> Result<RankedList, KmerTopError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("run", input = %config.input, k = config.k.get()).entered();

    let ranked = top_kmers(&config.input, config.k, config.top, config.strict)?;
    config.sink().render(&ranked)?;

    #[cfg(feature = "tracing")]
    info!(reported = ranked.len(), "Report written");

    Ok(ranked)
}

/// Reads `input` and returns its `n` most widespread k-mers.
///
/// # Errors
///
/// Returns [`KmerTopError::SequenceRead`] or, with `strict`,
/// [`KmerTopError::InvalidFormat`].
pub fn top_kmers(
    input: &Input,
    k: KmerLength,
    n: usize,
    strict: bool,
) -> Result<RankedList, KmerTopError> {
    let tally = tally_input(input, k, strict)?;
    Ok(top_n(tally, n))
}

/// Counts, for each k-mer, the number of sequences in a FASTA file that
/// contain it.
///
/// # Errors
///
/// Returns an error if:
/// - `k` is outside the valid range (3-8)
/// - The file cannot be read
///
/// # Example
///
/// ```rust,no_run
/// use kmertop::run::count_kmers;
///
/// let tally = count_kmers("genome.fa", 5)?;
/// println!("{} distinct 5-mers", tally.len());
/// # Ok::<(), kmertop::error::KmerTopError>(())
/// ```
pub fn count_kmers<P>(path: P, k: usize) -> Result<FrequencyTally, KmerTopError>
where
    P: AsRef<Path> + Debug,
{
    // Validate before touching the file
    let k = KmerLength::new(k)?;
    tally_input(&Input::File(path.as_ref().to_path_buf()), k, false)
}

fn tally_input(
    input: &Input,
    k: KmerLength,
    strict: bool,
) -> Result<FrequencyTally, KmerTopError> {
    let sequences = read(input, strict)?;

    #[cfg(feature = "tracing")]
    info!(sequences = sequences.len(), k = k.get(), "Counting k-mers");

    let tally = count(&sequences, k);

    #[cfg(feature = "tracing")]
    info!(distinct_kmers = tally.len(), "Counting complete");

    Ok(tally)
}
