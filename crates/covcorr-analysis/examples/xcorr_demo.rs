//! Cross-correlation demo: recover a planted shift between two tracks.
//!
//! Run with: cargo run -p covcorr-analysis --example xcorr_demo

use covcorr_analysis::{
    Rfft, center, cross_correlate, normalize, padding_length, peak_lag, std_dev,
};

fn main() {
    // --- Synthesize a coverage track and a shifted replicate ---
    println!("=== Planted Shift Between Two Coverage Tracks ===\n");

    let length = 5000;
    let shift = 42usize;

    let base: Vec<f64> = (0..length)
        .map(|i| {
            let x = i as f64;
            30.0 + 12.0 * (x * 0.017).sin() + 5.0 * (x * 0.0031).cos()
        })
        .collect();

    let mut replicate = vec![30.0; length];
    replicate[shift..].copy_from_slice(&base[..length - shift]);

    println!("Track length: {} positions", length);
    println!("Planted shift: {} positions downstream", shift);
    println!("Baseline coverage: ~30x, std {:.2}", std_dev(&base));

    // --- Run the pipeline step by step ---
    let norm_base = normalize(&base).expect("track is non-constant");
    let norm_replicate = normalize(&replicate).expect("track is non-constant");

    let pad_to = padding_length(length).expect("length is positive");
    println!("\nPadding length: {} (next power of two)", pad_to);

    let rfft = Rfft::new(pad_to);
    let spectrum_base = rfft.forward(&norm_base).expect("fits the padding");
    let spectrum_replicate = rfft.forward(&norm_replicate).expect("fits the padding");
    println!("Spectrum bins: {}", spectrum_base.len());

    let cyclic = cross_correlate(&spectrum_replicate, &spectrum_base).expect("same bin count");

    let width = 100;
    let centered = center(&cyclic, Some(width)).expect("width fits");
    let (lag, value) = peak_lag(&centered).expect("window is non-empty");

    println!("Centering width: +/-{} positions", width);
    println!("\nPeak: lag {} (correlation {:.1})", lag, value);

    // --- Show the correlation around the peak ---
    println!("\nCorrelation around the peak:");
    println!("{:>8} {:>14}", "Lag", "Correlation");
    println!("{:->8} {:->14}", "", "");

    let zero_index = centered.len() / 2;
    let peak_index = (zero_index as i64 + lag) as usize;
    let start = peak_index.saturating_sub(5);
    let end = (peak_index + 6).min(centered.len());
    for i in start..end {
        let marker = if i == peak_index { " <--" } else { "" };
        println!(
            "{:>8} {:>14.1}{}",
            i as i64 - zero_index as i64,
            centered[i],
            marker
        );
    }
}
