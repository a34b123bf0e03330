//! mergeinsert-cli - sorts random or given integers with merge-insertion
//!
//! Usage:
//!   mergeinsert-cli [--count N] [--lowest A] [--highest B] [--seed S] [--stats]
//!   mergeinsert-cli [--stats] VALUES...

mod input;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use input::{Source, format_values};

#[derive(Parser, Debug)]
#[command(name = "mergeinsert-cli")]
#[command(about = "Sort integers with the Ford-Johnson merge-insertion algorithm")]
struct Cli {
    /// Values to sort. When omitted, random values are generated.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Number of random values to generate
    #[arg(long, default_value_t = 42)]
    count: usize,

    /// Smallest random value (inclusive)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    lowest: i32,

    /// Largest random value (inclusive)
    #[arg(long, default_value_t = 99, allow_negative_numbers = true)]
    highest: i32,

    /// Seed for the random generator; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the comparison count next to the worst-case bounds
    #[arg(long)]
    stats: bool,
}

impl Cli {
    fn source(&self) -> Source {
        if self.values.is_empty() {
            Source::Random {
                count: self.count,
                lowest: self.lowest,
                highest: self.highest,
            }
        } else {
            Source::Explicit(self.values.clone())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seeding input generator");
    let mut rng = StdRng::seed_from_u64(seed);

    let numbers = cli
        .source()
        .generate(&mut rng)
        .context("could not build the input sequence")?;
    let n = numbers.len();

    println!("before: {}", format_values(&numbers));

    let mut comparisons = 0usize;
    let sorted = mergeinsert::sort_by(numbers, |a, b| {
        comparisons += 1;
        a < b
    });
    tracing::debug!(n, comparisons, "sorted");

    println!("after:  {}", format_values(&sorted));
    println!("sorted?: {}", sorted.is_sorted());

    if cli.stats {
        println!(
            "comparisons: {comparisons} (bound: {}, ford-johnson: {})",
            mergeinsert::comparison_bound(n),
            mergeinsert::ford_johnson_bound(n)
        );
    }

    Ok(())
}
