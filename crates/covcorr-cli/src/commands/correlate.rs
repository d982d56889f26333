//! Cross-correlation command: load two tracks, report the peak lag.

use anyhow::Context;
use clap::Args;
use covcorr_analysis::{Rfft, center, cross_correlate, normalize, padding_length, peak_lag};
use std::path::PathBuf;
use tracing::debug;

use crate::track::load_track;

#[derive(Args)]
pub struct CorrelateArgs {
    /// First coverage track (plain text, one value per position)
    #[arg(value_name = "TRACK_A")]
    track_a: PathBuf,

    /// Second coverage track
    #[arg(value_name = "TRACK_B")]
    track_b: PathBuf,

    /// Centering half-window: keep lags in [-width, width)
    #[arg(short, long)]
    width: Option<usize>,

    /// Explicit padding length (default: smallest power of two holding
    /// the longer track)
    #[arg(long, value_name = "LENGTH")]
    pad_to: Option<usize>,

    /// Write a JSON report to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Print the centered correlation values, one "lag value" pair per line
    #[arg(long)]
    dump: bool,
}

pub fn run(args: CorrelateArgs) -> anyhow::Result<()> {
    println!("Coverage Cross-Correlation");
    println!("==========================");
    println!("  Track A: {}", args.track_a.display());
    println!("  Track B: {}", args.track_b.display());
    println!();

    let track_a = load_track(&args.track_a)?;
    let track_b = load_track(&args.track_b)?;
    debug!(
        len_a = track_a.len(),
        len_b = track_b.len(),
        "loaded coverage tracks"
    );

    let normalized_a = normalize(&track_a)
        .with_context(|| format!("normalizing '{}'", args.track_a.display()))?;
    let normalized_b = normalize(&track_b)
        .with_context(|| format!("normalizing '{}'", args.track_b.display()))?;

    let pad_to = match args.pad_to {
        Some(0) => anyhow::bail!("--pad-to must be positive"),
        Some(explicit) => explicit,
        None => padding_length(track_a.len().max(track_b.len()))?,
    };
    debug!(pad_to, explicit = args.pad_to.is_some(), "padding length");

    let rfft = Rfft::new(pad_to);
    let spectrum_a = rfft
        .forward(&normalized_a)
        .with_context(|| format!("transforming '{}'", args.track_a.display()))?;
    let spectrum_b = rfft
        .forward(&normalized_b)
        .with_context(|| format!("transforming '{}'", args.track_b.display()))?;
    debug!(bins = spectrum_a.len(), "forward transforms complete");

    let cyclic = cross_correlate(&spectrum_a, &spectrum_b)?;
    let centered = center(&cyclic, args.width).context("centering the cross-correlation")?;
    debug!(
        width = ?args.width,
        centered_len = centered.len(),
        "centered cross-correlation"
    );

    println!("Input");
    println!("-----");
    println!("  Track A length: {}", track_a.len());
    println!("  Track B length: {}", track_b.len());
    println!("  Padding length: {}", pad_to);
    println!();

    let zero_index = (centered.len() / 2) as i64;
    println!("Result");
    println!("------");
    println!(
        "  Lags covered: [{}, {})",
        -zero_index,
        centered.len() as i64 - zero_index
    );

    match peak_lag(&centered) {
        Some((lag, value)) => {
            println!("  Peak lag:     {} (correlation {:.3})", lag, value);
            if lag > 0 {
                println!("  Track A is shifted {} positions downstream of track B.", lag);
            } else if lag < 0 {
                println!("  Track A is shifted {} positions upstream of track B.", -lag);
            } else {
                println!("  Tracks are aligned at zero lag.");
            }
        }
        None => println!("  Centered window is empty."),
    }

    if args.dump {
        println!();
        for (i, value) in centered.iter().enumerate() {
            println!("{}\t{:.6}", i as i64 - zero_index, value);
        }
    }

    if let Some(json_path) = args.json {
        let peak = peak_lag(&centered);
        let report = serde_json::json!({
            "track_a": args.track_a.to_string_lossy(),
            "track_b": args.track_b.to_string_lossy(),
            "track_a_length": track_a.len(),
            "track_b_length": track_b.len(),
            "padding_length": pad_to,
            "width": args.width,
            "peak": peak.map(|(lag, value)| {
                serde_json::json!({ "lag": lag, "value": value })
            }),
            "centered": centered,
        });

        std::fs::write(&json_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("writing report to '{}'", json_path.display()))?;
        println!("\nWrote report to {}", json_path.display());
    }

    Ok(())
}
