use std::path::PathBuf;

use crate::{
    cli::{Args, OutputFormat},
    input::Input,
    kmer::KmerLength,
    report::ReportSink,
};

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Input,
    pub k: KmerLength,
    pub top: usize,
    /// Report file; `None` prints to stdout only.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
}

impl Config {
    /// Builds the report sink: always stdout, then the report file if any.
    #[must_use]
    pub fn sink(&self) -> ReportSink {
        let sink = ReportSink::new(self.format).console();
        match &self.output {
            Some(path) => sink.file(path),
            None => sink,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: Input::from_path(&args.path),
            k: args.k,
            top: args.top,
            output: (!args.no_file).then_some(args.output),
            format: args.format,
            strict: args.strict,
        }
    }
}
