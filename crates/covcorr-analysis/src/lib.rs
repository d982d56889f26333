//! covcorr-analysis - Frequency-domain cross-correlation of genomic coverage tracks
//!
//! This crate detects the positional lag between two coverage signals
//! (replicate consistency, strand shift) by cross-correlating them in
//! the frequency domain:
//!
//! - [`padding`] - power-of-two padding length planning
//! - [`normalize`] - zero-mean, unit-variance coverage rescaling
//! - [`fft`] - real-input forward/inverse transforms
//! - [`xcorr`] - cross-power spectrum and inverse transform
//! - [`center`] - cyclic-to-linear lag reordering and peak scan
//! - [`error`] - the pipeline's closed error taxonomy
//!
//! Every function is a pure transformation: immutable inputs, fresh
//! outputs, no shared state. Independent track pairs can be processed
//! on independent threads without any locking.
//!
//! ## Example Workflow
//!
//! ```rust,ignore
//! use covcorr_analysis::{Rfft, center, cross_correlate, normalize, padding_length, peak_lag};
//!
//! // 1. Normalize both tracks
//! let norm_a = normalize(&track_a)?;
//! let norm_b = normalize(&track_b)?;
//!
//! // 2. Plan one shared padding length over the longer track
//! let pad_to = padding_length(norm_a.len().max(norm_b.len()))?;
//!
//! // 3. Transform both off the same planner
//! let rfft = Rfft::new(pad_to);
//! let spec_a = rfft.forward(&norm_a)?;
//! let spec_b = rfft.forward(&norm_b)?;
//!
//! // 4. Cross-correlate and center around zero lag
//! let cyclic = cross_correlate(&spec_a, &spec_b)?;
//! let centered = center(&cyclic, Some(500))?;
//! let (lag, value) = peak_lag(&centered).unwrap();
//! ```
//!
//! Or collapse steps 1-4 into one call with [`correlate`].

pub mod center;
pub mod error;
pub mod fft;
pub mod normalize;
pub mod padding;
pub mod xcorr;

// Re-export main types
pub use center::{center, peak_lag};
pub use error::AnalysisError;
pub use fft::{Rfft, forward_transform};
pub use normalize::{mean, normalize, std_dev};
pub use padding::{DEFAULT_PAD_LENGTH, padding_length};
pub use xcorr::{correlate, cross_correlate};
