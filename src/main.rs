use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use hopper::{fs::load_hops_from_path, search::HopGraph, statistics::Stats};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Minimum-hop array traversal
#[derive(Parser, Debug)]
#[command(name = "hopper")]
#[command(about = "Finds a minimum-hop traversal of an array of hop lengths", long_about = None)]
struct Args {
    /// Path to the input file, one non-negative integer per line
    input: PathBuf,

    /// Dump search counters to stderr as JSON after the result line
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    // logs go to stderr so the single result line on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let values = match load_hops_from_path(&args.input) {
        Ok(values) => values,
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let graph = HopGraph::new(values);
    debug!(array_len = graph.len(), "input loaded");

    let mut stats = Stats::new();
    let outcome = graph.shortest_path(&mut stats);

    // "failure" (no traversal exists) is a normal result line, not an error exit
    println!("{outcome}");

    if args.stats {
        eprintln!("{}", stats.to_json());
    }
    ExitCode::SUCCESS
}
