// File: crates/demo/src/main.rs
// Summary: Demo loads the listings, selects the newest day, prints its statistics and leaderboard, and renders the chart with a hover readout to SVG.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use temp_core::fetch::load_guesses;
use temp_core::svg::{render_to_file, SvgOptions};
use temp_core::{DashboardConfig, DashboardSession, FsFetcher, HoverReadout, HoverState};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const LISTING_NAMES: [&str; 2] = ["temperature-listings.json", "listings.json"];
const GUESSES: &str = "guesses.json";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    // usage: temp-demo [DATA_DIR] [CONFIG_JSON]
    let mut args = std::env::args().skip(1);
    let data_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("../temp-core/tests/fixtures"));
    let config = match args.next() {
        Some(p) => DashboardConfig::from_path(&p).with_context(|| format!("failed to load config '{p}'"))?,
        None => DashboardConfig::default(),
    };
    info!(data_dir = %data_dir.display(), "starting dashboard demo");

    let listings_name = LISTING_NAMES
        .iter()
        .find(|n| data_dir.join(n).exists())
        .with_context(|| format!("no listings file in {}", data_dir.display()))?;

    let fetcher = FsFetcher::new(&data_dir);
    let mut session = DashboardSession::new(config);
    let latest = session
        .load_listings(&fetcher, listings_name)
        .await
        .with_context(|| format!("failed to load {listings_name}"))?
        .latest()
        .cloned()
        .context("listings contain no datasets")?;

    session
        .select(&fetcher, &latest)
        .await
        .with_context(|| format!("failed to load dataset for {} from {}", latest.date, latest.url))?;
    let view = session.active().context("no active dataset after selection")?;

    let m = &view.metadata;
    println!("Dataset {} ({} samples)", view.dataset.label(), view.dataset.len());
    println!("  start   {}", m.start_timestamp.format("%Y-%m-%d %H:%M:%S %:z"));
    println!("  end     {}", m.end_timestamp.format("%Y-%m-%d %H:%M:%S %:z"));
    println!("  cabin   min {:.2}  max {:.2}  mean {:.2}  median {:.2}  mode {}", m.internal_min, m.internal_max, m.internal_mean, m.internal_median, m.internal_mode);
    println!("  outside max {:.2}", m.external_max);
    println!("  light axis 0..{}", view.chart.light_scale.vmax);
    println!("{}", serde_json::to_string_pretty(m)?);

    if data_dir.join(GUESSES).exists() {
        let guesses = load_guesses(&fetcher, GUESSES).await.context("failed to load guesses")?;
        match session.leaderboard(&guesses) {
            Some(board) => {
                println!("Leaderboard (peak {:.2}):", session.known_maximum().unwrap_or_default());
                for g in &board {
                    println!("  #{} {:<12} {:>7.2}  off by {:.2}", g.rank, g.name, g.guess, g.distance);
                }
            }
            None => warn!(date = %latest.date, "no known maximum for the selected day"),
        }
    }

    // sweep the pointer across the whole surface; keep the readout nearest the plot's middle
    let mut hover = session.hover().context("no chart to hover")?;
    let plot = view.chart.plot;
    let mid_x = plot.width() / 2.0;
    let mut readout: Option<HoverReadout> = None;
    for step in 0..=20 {
        let (x, y) = plot.to_plot(plot.outer_width * step as f64 / 20.0, plot.outer_height / 2.0);
        if !plot.contains(x, y) {
            if hover.is_engaged() {
                hover.pointer_leave(x);
            }
            continue;
        }
        let entering = !hover.is_engaged();
        let state = if entering { hover.pointer_enter(x, y) } else { hover.pointer_move(x, y) };
        if let HoverState::Engaged(r) = state {
            let closer = readout.as_ref().map_or(true, |best| (x - mid_x).abs() < (best.pointer_x - mid_x).abs());
            if closer {
                readout = Some(r.clone());
            }
        }
    }
    if let Some(r) = &readout {
        for l in &r.labels {
            println!("  hover: {}", l.text);
        }
    }

    let out = out_path(view.dataset.label());
    render_to_file(&view.chart, readout.as_ref(), &SvgOptions::default(), &out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// target/out/temperatures_<M-D-YYYY>.svg
fn out_path(label: &str) -> PathBuf {
    let stem = label.replace('/', "-");
    PathBuf::from("target").join("out").join(format!("temperatures_{stem}.svg"))
}
