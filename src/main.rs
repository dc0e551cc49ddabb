use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bitsieve::Limit;

#[derive(Parser, Debug)]
#[command(name = "bitsieve", about = "Find all primes up to a limit with a bit-array sieve")]
struct Args {
    /// Inclusive upper bound for the prime search
    #[arg(env = "BITSIEVE_LIMIT", default_value = "1000000", allow_negative_numbers = true)]
    limit: Limit,

    /// Number of times to run the sieve; the fastest run is reported
    #[arg(
        long,
        env = "BITSIEVE_REPEAT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    repeat: u32,

    /// Write the primes to stdout, one per line
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    // Initialize structured logging with env-based filter, defaulting to info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(limit = %args.limit, repeat = args.repeat, "sieving");

    let mut primes = Vec::new();
    let mut fastest = Duration::MAX;
    for run in 1..=args.repeat {
        let start = Instant::now();
        primes = args
            .limit
            .primes()
            .with_context(|| format!("failed to sieve primes up to {}", args.limit))?;
        let elapsed = start.elapsed();
        info!(run, ?elapsed, "run finished");
        fastest = fastest.min(elapsed);
    }

    info!(
        count = primes.len(),
        largest = ?primes.last(),
        ?fastest,
        "found primes"
    );

    if args.print {
        write_primes(io::stdout().lock(), &primes).context("failed to write primes")?;
    }

    Ok(())
}

/// Write one prime per line.
fn write_primes(out: impl Write, primes: &[u64]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for p in primes {
        writeln!(out, "{}", p)?;
    }
    out.flush()
}
