// File: crates/demo/src/bin/gen_listings.rs
// Summary: Scans a directory of daily CSV files and writes temperature-listings.json with each day's cabin maximum.

use anyhow::{Context, Result};
use std::path::PathBuf;
use temp_core::listings::scan_dir;
use temp_core::IngestConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const OUTPUT: &str = "temperature-listings.json";

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    // usage: gen-listings <DIR> [BASE_URL]
    let mut args = std::env::args().skip(1);
    let dir = PathBuf::from(args.next().context("usage: gen-listings <DIR> [BASE_URL]")?);
    let base_url = args.next().unwrap_or_default();

    let listings = scan_dir(&dir, &base_url, &IngestConfig::default())
        .with_context(|| format!("failed to scan {}", dir.display()))?;

    let out = dir.join(OUTPUT);
    let json = serde_json::to_string_pretty(&listings)?;
    std::fs::write(&out, json).with_context(|| format!("failed to write {}", out.display()))?;
    println!("Wrote {} ({} days)", out.display(), listings.datasets.len());
    Ok(())
}
