//! Padding length planning for the spectral transform.

use crate::error::AnalysisError;

/// Default padding length for whole-chromosome coverage tracks (2^28).
///
/// Large enough for any chromosome at single-base resolution, but a
/// 2^28-sample f64 transform buffer is 2 GiB. Prefer [`padding_length`]
/// computed over the actual maximum track length.
pub const DEFAULT_PAD_LENGTH: usize = 1 << 28;

/// Smallest power of two that can hold `max_length` samples.
///
/// An exact power of two is returned unchanged:
/// `1000 → 1024`, `2048 → 2048`, `2049 → 4096`.
///
/// For a pair of tracks, call this with the longer of the two lengths
/// and pad both tracks to the result, so their spectra line up for
/// [`cross_correlate`](crate::xcorr::cross_correlate).
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if `max_length` is zero.
pub fn padding_length(max_length: usize) -> Result<usize, AnalysisError> {
    if max_length == 0 {
        return Err(AnalysisError::invalid(
            "maximum array length must be positive",
        ));
    }
    Ok(max_length.next_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_next_power_of_two() {
        assert_eq!(padding_length(1000).unwrap(), 1024);
    }

    #[test]
    fn exact_power_of_two_unchanged() {
        assert_eq!(padding_length(2048).unwrap(), 2048);
    }

    #[test]
    fn one_past_power_of_two_doubles() {
        assert_eq!(padding_length(2049).unwrap(), 4096);
    }

    #[test]
    fn length_one_plans_one() {
        assert_eq!(padding_length(1).unwrap(), 1);
    }

    #[test]
    fn zero_length_is_invalid() {
        let err = padding_length(0).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));
    }
}
