//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::{
    kmer::{KmerLength, MAX_K, MIN_K},
    rank::DEFAULT_TOP_N,
};

/// Report the k-mers shared by the most sequences in a FASTA file.
#[derive(Parser, Debug)]
#[command(name = "kmertop")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file, or '-' for stdin
    pub path: PathBuf,

    /// K-mer length (3-8)
    #[arg(short, long = "kmer-length", value_parser = parse_k)]
    pub k: KmerLength,

    /// Number of k-mers to report
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N, value_parser = parse_top)]
    pub top: usize,

    /// Report file, created or overwritten
    #[arg(short, long, default_value = "kmer_report.txt", conflicts_with = "no_file")]
    pub output: PathBuf,

    /// Only print the report to stdout
    #[arg(long)]
    pub no_file: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Reject input whose first non-empty line is not a '>' header
    #[arg(long)]
    pub strict: bool,

    /// Suppress informational output (only print the report)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Header line, then `<kmer> <count>` per line
    #[default]
    Text,
    /// Tab-separated values (kmer\tcount)
    Tsv,
    /// JSON object with a `kmers` array
    Json,
}

fn parse_k(s: &str) -> Result<KmerLength, String> {
    let k: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    KmerLength::try_from(k)
        .map_err(|_| format!("k-mer length must be between {MIN_K} and {MAX_K}"))
}

fn parse_top(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if n == 0 {
        return Err("must report at least one k-mer".to_string());
    }
    Ok(n)
}
