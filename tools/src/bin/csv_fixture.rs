use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use fixgen_tools::{format_count, format_megabytes, init_tracing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tabular::{generate_file, TabularConfig, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(
    name = "csv-fixture",
    version,
    about = "Generate the 10 MiB CSV test fixture"
)]
struct Cli {
    /// RNG seed for a reproducible run. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = TabularConfig::default();
    let path = Path::new(DEFAULT_OUTPUT_PATH);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(path = %path.display(), seed = ?cli.seed, "csv fixture output resolved");

    println!(
        "Generating CSV file (target: {}MB)...",
        format_megabytes(config.target_bytes, 1)
    );
    let summary = generate_file(path, &config, rng, |progress| {
        println!(
            "  Generated {} rows, {}MB...",
            format_count(progress.rows),
            format_megabytes(progress.bytes, 2)
        );
    })
    .with_context(|| format!("generate {}", path.display()))?;

    println!("✅ Created: {}", path.display());
    println!("   Rows: {}", format_count(summary.rows));
    println!("   Size: {}MB", format_megabytes(summary.bytes, 2));
    Ok(())
}
