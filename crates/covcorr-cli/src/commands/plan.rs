//! Padding length planning command.

use clap::Args;
use covcorr_analysis::{DEFAULT_PAD_LENGTH, padding_length};

#[derive(Args)]
pub struct PlanArgs {
    /// Length of the longest coverage track to be transformed
    #[arg(value_name = "MAX_LENGTH")]
    max_length: usize,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let pad_to = padding_length(args.max_length)?;

    println!("Padding Plan");
    println!("============");
    println!("  Max track length: {}", args.max_length);
    println!("  Padding length:   {} (2^{})", pad_to, pad_to.trailing_zeros());
    println!(
        "  Transform buffer: {:.1} MiB of f64",
        pad_to as f64 * 8.0 / (1024.0 * 1024.0)
    );

    if pad_to > DEFAULT_PAD_LENGTH {
        println!();
        println!(
            "  Note: exceeds the whole-chromosome default of 2^{}.",
            DEFAULT_PAD_LENGTH.trailing_zeros()
        );
    }

    Ok(())
}
