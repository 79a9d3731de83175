use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use fixgen_tools::{format_megabytes, init_tracing};
use markup::{generate_file, MarkupConfig, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(
    name = "svg-fixture",
    version,
    about = "Generate the 1 MiB SVG test fixture"
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();
    init_tracing();

    let path = Path::new(DEFAULT_OUTPUT_PATH);
    tracing::debug!(path = %path.display(), "svg fixture output resolved");
    let size = generate_file(path, &MarkupConfig::default())
        .with_context(|| format!("generate {}", path.display()))?;

    println!("✅ Created: {}", path.display());
    println!("   Size: {}MB", format_megabytes(size, 2));
    Ok(())
}
