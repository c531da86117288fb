//! Collatz batch runner - memoized step counts for random inputs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use collatzcache::batch::{self, BatchConfig, DEFAULT_CAPACITY};
use collatzcache::report::{self, DEFAULT_OUTPUT};
use collatzcache::StepCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random inputs to process
    count: usize,

    /// Smallest input value (inclusive)
    min: u64,

    /// Largest input value (inclusive)
    max: u64,

    /// Cache capacity (number of memoized inputs)
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// CSV report path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for the input generator (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn batch_config(&self) -> BatchConfig {
        BatchConfig::new(self.count, self.min, self.max).with_capacity(self.capacity)
    }
}

/// Parse arguments, exiting with status 1 on anything but help/version
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    // Logs go to stderr so stdout only carries the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(args.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.batch_config();
    config.validate().context("invalid input. Please try again")?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        count = config.count,
        min = config.min,
        max = config.max,
        capacity = config.capacity,
        seed,
        "Starting batch"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let inputs = batch::generate_inputs(config.count, config.min, config.max, &mut rng)
        .context("failed to generate inputs")?;

    let mut cache = StepCache::new(config.capacity)?;
    let result = batch::run_batch(&inputs, &mut cache).context("batch run failed")?;

    debug!(
        hits = cache.stats().hits(),
        misses = cache.stats().misses(),
        evictions = cache.cache().evictions(),
        cached = cache.len(),
        "Cache state after batch"
    );

    match report::save_csv(&args.output, &inputs, &result.steps) {
        Ok(()) => info!("Wrote {} rows to {}", inputs.len(), args.output.display()),
        Err(e) => warn!("Unable to write {}: {}", args.output.display(), e),
    }

    println!("Cache Hit Percentage: {:.2}%", result.hit_percentage());
    println!("Time taken: {:.2} seconds", result.elapsed_secs());

    Ok(())
}
