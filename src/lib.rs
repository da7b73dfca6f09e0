//! # kmertop
//!
//! Finds the k-mers shared by the most sequences in a FASTA file.
//!
//! Each k-mer is scored by the number of *sequences* it occurs in, so a
//! k-mer repeated many times inside one record still counts once for that
//! record. The highest-scoring k-mers are reported, ties broken
//! alphabetically.
//!
//! ## Pipeline
//!
//! 1. [`reader`] parses FASTA into one sequence per record.
//! 2. [`counter`] tallies the sequences each k-mer occurs in.
//! 3. [`rank`] keeps the top N.
//! 4. [`report`] writes the ranking to stdout and/or a report file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kmertop::builder::KmerRanker;
//!
//! let ranked = KmerRanker::new().k(5)?.rank("genome.fa")?;
//! for entry in &ranked {
//!     println!("{} {}", entry.kmer, entry.count);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: structured logging via the `tracing` crate (default)

pub mod builder;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod kmer;
pub mod rank;
pub mod reader;
pub mod report;
pub mod run;
