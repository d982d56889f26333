//! Real-input FFT wrapper around rustfft.
//!
//! Coverage tracks are real-valued, so only the non-redundant half of
//! the spectrum (`size/2 + 1` bins, DC through Nyquist) is kept; the
//! other half is implied by Hermitian symmetry and reconstructed on the
//! inverse path.

use rustfft::{FftPlanner, num_complex::Complex};
use std::sync::Arc;

use crate::error::AnalysisError;

/// Real-input FFT processor for a fixed transform size.
///
/// Caches the forward and inverse rustfft plans so both tracks of a
/// pair are transformed off the same planner. Buffers are allocated
/// per call and dropped with the result.
pub struct Rfft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    ifft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Rfft {
    /// Plan forward and inverse transforms of length `size`.
    ///
    /// `size` may be any length >= 1; powers of two (see
    /// [`padding_length`](crate::padding::padding_length)) are fastest.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);

        Self { fft, ifft, size }
    }

    /// Transform size this processor was planned for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of spectrum bins produced by [`forward`](Self::forward):
    /// `size/2 + 1`.
    pub fn bins(&self) -> usize {
        self.size / 2 + 1
    }

    /// Zero-pad `signal` to the transform size and compute its forward
    /// real-input DFT.
    ///
    /// The signal's values occupy indices `[0, signal.len())` of the
    /// padded buffer; the remainder is zeros. No normalization is
    /// applied; rescaling the coverage beforehand is the caller's
    /// responsibility. Returns the first `size/2 + 1` complex
    /// coefficients.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] if the signal is longer than the
    /// transform size.
    pub fn forward(&self, signal: &[f64]) -> Result<Vec<Complex<f64>>, AnalysisError> {
        if signal.len() > self.size {
            return Err(AnalysisError::invalid(format!(
                "padding length {} is shorter than the signal length {}",
                self.size,
                signal.len()
            )));
        }

        let mut buffer: Vec<Complex<f64>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.truncate(self.bins());
        Ok(buffer)
    }

    /// Inverse real-input DFT: reconstruct the full spectrum from its
    /// non-redundant half by conjugate mirroring, transform back, and
    /// return the real signal scaled by `1/size`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] if the half spectrum does not
    /// have exactly `size/2 + 1` bins.
    pub fn inverse(&self, spectrum: &[Complex<f64>]) -> Result<Vec<f64>, AnalysisError> {
        if spectrum.len() != self.bins() {
            return Err(AnalysisError::invalid(format!(
                "spectrum has {} bins, expected {} for transform size {}",
                spectrum.len(),
                self.bins(),
                self.size
            )));
        }

        let mut buffer = vec![Complex::new(0.0, 0.0); self.size];
        buffer[..spectrum.len()].copy_from_slice(spectrum);

        // Mirror conjugates into the negative-frequency half. DC (and,
        // for even sizes, Nyquist) have no mirror image.
        for k in 1..spectrum.len() {
            if self.size - k >= spectrum.len() {
                buffer[self.size - k] = spectrum[k].conj();
            }
        }

        self.ifft.process(&mut buffer);

        let scale = 1.0 / self.size as f64;
        Ok(buffer.iter().map(|c| c.re * scale).collect())
    }
}

/// Zero-pad a coverage track to `pad_to_length` and compute its forward
/// real-input DFT, returning the non-redundant `pad_to_length/2 + 1`
/// bins.
///
/// One-shot wrapper over [`Rfft`]; when transforming a pair of tracks
/// padded to the same length, construct one [`Rfft`] and call
/// [`Rfft::forward`] twice instead.
///
/// `pad_to_length` is usually a power of two from
/// [`padding_length`](crate::padding::padding_length), but any length
/// `>= coverage.len()` is accepted.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if `pad_to_length` is zero or
/// shorter than the coverage track.
pub fn forward_transform(
    coverage: &[f64],
    pad_to_length: usize,
) -> Result<Vec<Complex<f64>>, AnalysisError> {
    if pad_to_length == 0 {
        return Err(AnalysisError::invalid("padding length must be positive"));
    }
    Rfft::new(pad_to_length).forward(coverage)
}
