//! Lag-centered rearrangement of cyclic cross-correlation arrays.
//!
//! The inverse transform leaves lags in cyclic order: index 0 is lag 0,
//! positive lags run upward from it, and negative lags wrap in from the
//! end of the array. [`center`] rearranges that into a linear view with
//! ascending lag, negative through zero to positive, which is what a
//! lag plot or a peak scan wants.

use crate::error::AnalysisError;

/// Rearrange a cyclic cross-correlation array into ascending-lag order.
///
/// With `width = None` the whole array is reordered: the last
/// `right_limit` elements (the negative lags, most negative first) are
/// followed by the first `left_limit` elements (zero lag onward). For
/// even length N both limits are `N/2`; for odd length the left limit
/// is `N/2 + 1` so every element appears exactly once.
///
/// With `width = Some(w)` the result is truncated to the symmetric
/// window of `2*w` elements around zero lag, covering lags
/// `[-w, .., -1, 0, 1, .., w-1]`. `width = Some(N/2)` on an even-length
/// array selects exactly the same elements as `width = None`.
///
/// Zero lag always lands at index `len/2` of the returned array.
///
/// # Errors
///
/// - [`AnalysisError::WidthTooLarge`] if `2*width` exceeds the array
///   length.
/// - [`AnalysisError::InvalidInput`] if `width` is `Some(0)`; the
///   window must be a positive number of lags on each side.
pub fn center(cross_corr: &[f64], width: Option<usize>) -> Result<Vec<f64>, AnalysisError> {
    let n = cross_corr.len();

    let (left_limit, right_limit) = match width {
        None => {
            let half = n / 2;
            if n % 2 == 0 { (half, half) } else { (half + 1, half) }
        }
        Some(0) => {
            return Err(AnalysisError::invalid("centering width must be positive"));
        }
        Some(w) => {
            if w > n / 2 {
                return Err(AnalysisError::WidthTooLarge { width: w, len: n });
            }
            (w, w)
        }
    };

    let mut centered = Vec::with_capacity(right_limit + left_limit);
    centered.extend_from_slice(&cross_corr[n - right_limit..]);
    centered.extend_from_slice(&cross_corr[..left_limit]);
    Ok(centered)
}

/// Signed lag and value of the largest-magnitude entry of a centered
/// array, or `None` for an empty array.
///
/// Zero lag sits at index `len/2` of every array [`center`] produces,
/// so entry `i` corresponds to lag `i - len/2`. The scan uses the
/// absolute value so a strong anti-correlation is found as well as a
/// positive peak; the returned value keeps its sign.
pub fn peak_lag(centered: &[f64]) -> Option<(i64, f64)> {
    if centered.is_empty() {
        return None;
    }
    let zero_index = (centered.len() / 2) as i64;

    centered
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.abs()
                .partial_cmp(&b.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, &v)| (i as i64 - zero_index, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_full_centering() {
        let cross_corr = [0.0, 1.0, 2.0, 3.0, 5.0, 7.0, 13.0];
        let centered = center(&cross_corr, None).unwrap();
        assert_eq!(centered, vec![5.0, 7.0, 13.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn even_length_full_centering() {
        let cross_corr = [0.0, 1.0, 2.0, 3.0, 5.0, 7.0];
        let centered = center(&cross_corr, None).unwrap();
        assert_eq!(centered, vec![3.0, 5.0, 7.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn explicit_width_on_odd_length() {
        let cross_corr: Vec<f64> = (0..101).map(f64::from).collect();
        let centered = center(&cross_corr, Some(10)).unwrap();

        let expected: Vec<f64> = (91..101).chain(0..10).map(f64::from).collect();
        assert_eq!(centered, expected);
    }

    #[test]
    fn explicit_width_on_even_length() {
        let cross_corr: Vec<f64> = (0..100).map(f64::from).collect();
        let centered = center(&cross_corr, Some(10)).unwrap();

        let expected: Vec<f64> = (90..100).chain(0..10).map(f64::from).collect();
        assert_eq!(centered, expected);
    }

    #[test]
    fn width_of_half_matches_full_centering_on_even_length() {
        let cross_corr: Vec<f64> = (0..64).map(f64::from).collect();
        let full = center(&cross_corr, None).unwrap();
        let windowed = center(&cross_corr, Some(32)).unwrap();
        assert_eq!(full, windowed);
    }

    #[test]
    fn oversized_width_is_rejected_with_sizes_in_message() {
        let cross_corr: Vec<f64> = (0..100).map(f64::from).collect();
        let err = center(&cross_corr, Some(1000)).unwrap_err();

        assert_eq!(
            err,
            AnalysisError::WidthTooLarge {
                width: 1000,
                len: 100
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("centering width 1000"), "got: {msg}");
        assert!(msg.contains("100"), "got: {msg}");
    }

    #[test]
    fn zero_width_is_invalid() {
        let cross_corr = [1.0, 2.0, 3.0, 4.0];
        let err = center(&cross_corr, Some(0)).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));
    }

    #[test]
    fn empty_array_centers_to_empty() {
        assert_eq!(center(&[], None).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn zero_lag_lands_at_midpoint() {
        let cross_corr = [10.0, 1.0, 2.0, 3.0, 5.0, 7.0];

        let full = center(&cross_corr, None).unwrap();
        assert_eq!(full[full.len() / 2], 10.0);

        let windowed = center(&cross_corr, Some(2)).unwrap();
        assert_eq!(windowed[windowed.len() / 2], 10.0);
    }

    #[test]
    fn peak_lag_finds_signed_offset() {
        // Zero lag at index 3; peak two positions to its right.
        let centered = [0.0, 0.5, 0.0, 1.0, 0.0, 4.0, 0.25];
        assert_eq!(peak_lag(&centered), Some((2, 4.0)));
    }

    #[test]
    fn peak_lag_uses_magnitude_but_keeps_sign() {
        let centered = [0.0, -9.0, 0.0, 1.0, 0.0, 4.0];
        assert_eq!(peak_lag(&centered), Some((-2, -9.0)));
    }

    #[test]
    fn peak_lag_of_empty_is_none() {
        assert_eq!(peak_lag(&[]), None);
    }
}
