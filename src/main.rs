use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use jprime::{IncrementalSieve, SieveConfig, DEFAULT_SEGMENT_LENGTH};

#[derive(Parser, Debug)]
#[command(name = "jprime", version, about = "Prime queries backed by an incremental sieve")]
struct Cli {
    /// Integers sieved per window when extending
    #[arg(long, global = true, env = "JPRIME_SEGMENT_LENGTH", default_value_t = DEFAULT_SEGMENT_LENGTH)]
    segment_length: u64,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report whether each number is prime
    Check {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// List the primes in [low, high]
    Range {
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        low: i64,
        #[arg(allow_negative_numbers = true)]
        high: i64,
    },
    /// Print the zero-based index-th prime
    Nth { index: usize },
}

#[derive(Serialize)]
struct Classification {
    number: i64,
    prime: bool,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SieveConfig::with_segment_length(cli.segment_length);
    let mut sieve = IncrementalSieve::with_config(config).context("invalid sieve configuration")?;
    tracing::debug!(?config, "sieve ready");

    match cli.command {
        Commands::Check { numbers } => {
            let results = numbers
                .iter()
                .map(|&number| Classification {
                    number,
                    prime: sieve.is_prime(number),
                })
                .collect::<Vec<_>>();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in results {
                    let verdict = if result.prime { "prime" } else { "composite" };
                    println!("{}: {}", result.number, verdict);
                }
            }
        }
        Commands::Range { low, high } => {
            let primes = sieve.primes_in_range(low, high);
            if cli.json {
                println!("{}", serde_json::to_string(&primes)?);
            } else {
                for p in primes {
                    println!("{}", p);
                }
            }
        }
        Commands::Nth { index } => {
            let p = sieve
                .nth_prime(index)
                .with_context(|| format!("no prime at index {}", index))?;
            if cli.json {
                println!("{}", serde_json::json!({ "index": index, "prime": p }));
            } else {
                println!("{}", p);
            }
        }
    }

    Ok(())
}
