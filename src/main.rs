use std::process;

use clap::Parser;
use colored::Colorize;
use kmertop::{cli::Args, config::Config, run::run};

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let args = Args::parse();
    let quiet = args.quiet;
    let config = Config::from(args);

    if !quiet {
        println!("{}: {}", "k-length".bold(), config.k.to_string().blue().bold());
        println!(
            "{}: {}",
            "data".bold(),
            config.input.to_string().underline().bold().blue()
        );
        if let Some(output) = &config.output {
            println!(
                "{}: {}",
                "report".bold(),
                output.display().to_string().blue().bold()
            );
        }
        println!();
    }

    if let Err(e) = run(&config) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
