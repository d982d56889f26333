//! Frequency-domain cross-correlation of coverage spectra.
//!
//! The cross-correlation of tracks a and b at lag t is:
//!
//! ```text
//! c[t] = Σ_m a[m + t] · b[m]
//! ```
//!
//! Computing it in the frequency domain exploits the cross-correlation
//! theorem:
//!
//! ```text
//! c = IRFFT( A(f) · conj(B(f)) )
//! ```
//!
//! where A and B are the forward transforms of the zero-padded tracks.
//! For tracks padded to length N this costs O(N log N) instead of the
//! O(N²) time-domain sum, which is the whole reason the pipeline works
//! in the frequency domain.
//!
//! The result is in cyclic order: index 0 is lag 0, index k (k < N/2)
//! is positive lag k, and index N−k is negative lag k. Use
//! [`center`](crate::center::center) for an ascending-lag view.

use rustfft::num_complex::Complex;

use crate::center;
use crate::error::AnalysisError;
use crate::fft::Rfft;
use crate::normalize;
use crate::padding;

/// Cross-correlate two half spectra of identical length.
///
/// Multiplies `spectrum_a` elementwise with the complex conjugate of
/// `spectrum_b` and applies the inverse real-input transform to the
/// resulting cross-power spectrum. The output is a real array of
/// length `2 * (bins - 1)` in cyclic lag order.
///
/// When both spectra derive from similar signals the largest values sit
/// in the zero-lag neighborhood, index 0 and, for periodic signals,
/// index N/2.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if the spectra differ in length, or
/// have fewer than two bins (no even-length real transform produces
/// such a spectrum).
pub fn cross_correlate(
    spectrum_a: &[Complex<f64>],
    spectrum_b: &[Complex<f64>],
) -> Result<Vec<f64>, AnalysisError> {
    if spectrum_a.len() != spectrum_b.len() {
        return Err(AnalysisError::invalid(format!(
            "spectrum lengths differ: {} vs {}",
            spectrum_a.len(),
            spectrum_b.len()
        )));
    }
    if spectrum_a.len() < 2 {
        return Err(AnalysisError::invalid(
            "spectra must have at least two bins",
        ));
    }

    let cross_power: Vec<Complex<f64>> = spectrum_a
        .iter()
        .zip(spectrum_b.iter())
        .map(|(a, b)| a * b.conj())
        .collect();

    let size = 2 * (spectrum_a.len() - 1);
    Rfft::new(size).inverse(&cross_power)
}

/// Full replicate-shift pipeline over two raw coverage tracks.
///
/// Normalizes both tracks, plans one shared power-of-two padding length
/// over the longer track, transforms both off the same planner,
/// cross-correlates the spectra, and centers the result (optionally
/// truncated to ±`width` around zero lag).
///
/// A track that is a downstream-shifted copy of the other peaks at the
/// positive lag equal to the shift; see
/// [`peak_lag`](crate::center::peak_lag).
///
/// # Errors
///
/// Propagates [`AnalysisError::DegenerateInput`] for constant tracks,
/// [`AnalysisError::InvalidInput`] for empty tracks, and
/// [`AnalysisError::WidthTooLarge`] for an oversized centering width.
pub fn correlate(
    track_a: &[f64],
    track_b: &[f64],
    width: Option<usize>,
) -> Result<Vec<f64>, AnalysisError> {
    let normalized_a = normalize::normalize(track_a)?;
    let normalized_b = normalize::normalize(track_b)?;

    let pad_to = padding::padding_length(normalized_a.len().max(normalized_b.len()))?;
    let rfft = Rfft::new(pad_to);

    let spectrum_a = rfft.forward(&normalized_a)?;
    let spectrum_b = rfft.forward(&normalized_b)?;

    let cross_corr = cross_correlate(&spectrum_a, &spectrum_b)?;
    center::center(&cross_corr, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::forward_transform;

    /// Indices of `values` sorted ascending by value.
    fn argsort(values: &[f64]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..values.len()).collect();
        indices.sort_by(|&i, &j| values[i].partial_cmp(&values[j]).unwrap());
        indices
    }

    #[test]
    fn single_component_spectra_yield_cosine_extrema() {
        // One non-zero component each at bin 2: the cross-power
        // spectrum is a single cosine with two cycles over the result.
        let mut spectrum_a = vec![Complex::new(0.0, 0.0); 513];
        spectrum_a[2] = Complex::new(500.0, 0.0);

        let mut spectrum_b = vec![Complex::new(0.0, 0.0); 513];
        spectrum_b[2] = Complex::new(200.0, 0.0);

        let cross_corr = cross_correlate(&spectrum_a, &spectrum_b).unwrap();
        assert_eq!(cross_corr.len(), 1024);

        let order = argsort(&cross_corr);
        let minima: Vec<usize> = order[..2].to_vec();
        let maxima: Vec<usize> = order[order.len() - 2..].to_vec();

        assert!(minima.contains(&256) && minima.contains(&768), "minima: {minima:?}");
        assert!(maxima.contains(&0) && maxima.contains(&512), "maxima: {maxima:?}");
    }

    #[test]
    fn result_length_is_twice_bins_minus_one() {
        let spectrum = vec![Complex::new(1.0, 0.0); 65];
        let cross_corr = cross_correlate(&spectrum, &spectrum).unwrap();
        assert_eq!(cross_corr.len(), 128);
    }

    #[test]
    fn mismatched_spectrum_lengths_are_invalid() {
        let a = vec![Complex::new(0.0, 0.0); 513];
        let b = vec![Complex::new(0.0, 0.0); 257];
        let err = cross_correlate(&a, &b).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));
        assert!(err.to_string().contains("513"), "got: {err}");
    }

    #[test]
    fn autocorrelation_peaks_at_zero_lag() {
        let track: Vec<f64> = (0..300)
            .map(|i| (i as f64 * 0.13).sin() + (i as f64 * 0.041).cos())
            .collect();

        let spectrum = forward_transform(&track, 512).unwrap();
        let autocorr = cross_correlate(&spectrum, &spectrum).unwrap();

        // Cyclic index 0 is lag 0, the unnormalized signal energy.
        let energy: f64 = track.iter().map(|&x| x * x).sum();
        assert!((autocorr[0] - energy).abs() < 1e-6 * energy);

        for (i, &v) in autocorr.iter().enumerate() {
            assert!(
                v.abs() <= autocorr[0] + 1e-9,
                "index {i} ({v}) exceeds zero-lag value {}",
                autocorr[0]
            );
        }
    }

    #[test]
    fn pipeline_recovers_planted_shift() {
        // track_b shifted downstream by 7 into track_a: peak at +7.
        let base: Vec<f64> = (0..400)
            .map(|i| (i as f64 * 0.07).sin() * 3.0 + 10.0)
            .collect();
        let shift = 7usize;

        let track_b = base.clone();
        let mut track_a = vec![10.0; base.len()];
        track_a[shift..].copy_from_slice(&base[..base.len() - shift]);

        let centered = correlate(&track_a, &track_b, Some(50)).unwrap();
        let (lag, value) = center::peak_lag(&centered).unwrap();

        assert_eq!(lag, shift as i64, "peak value {value} at lag {lag}");
        assert!(value > 0.0);
    }

    #[test]
    fn pipeline_on_constant_track_is_degenerate() {
        let constant = vec![3.0; 256];
        let varying: Vec<f64> = (0..256).map(|i| i as f64).collect();
        let err = correlate(&constant, &varying, None).unwrap_err();
        assert_eq!(err, AnalysisError::DegenerateInput);
    }
}
