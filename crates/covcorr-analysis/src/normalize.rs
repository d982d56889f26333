//! Coverage normalization to zero mean and unit standard deviation.

use crate::error::AnalysisError;

/// Arithmetic mean of a coverage track.
///
/// Returns 0.0 for an empty track.
pub fn mean(coverage: &[f64]) -> f64 {
    if coverage.is_empty() {
        return 0.0;
    }
    coverage.iter().sum::<f64>() / coverage.len() as f64
}

/// Population standard deviation of a coverage track (denominator N).
///
/// Returns 0.0 for an empty track.
pub fn std_dev(coverage: &[f64]) -> f64 {
    if coverage.is_empty() {
        return 0.0;
    }
    let mu = mean(coverage);
    let variance =
        coverage.iter().map(|&x| (x - mu) * (x - mu)).sum::<f64>() / coverage.len() as f64;
    variance.sqrt()
}

/// Rescale a coverage track to zero mean and unit standard deviation.
///
/// Uses the population statistics (denominator N). The input is never
/// modified; a new track of the same length is returned.
///
/// # Errors
///
/// - [`AnalysisError::InvalidInput`] for an empty track (its moments
///   are undefined).
/// - [`AnalysisError::DegenerateInput`] for constant coverage, where
///   dividing by the zero standard deviation would propagate non-finite
///   values. The error is surfaced rather than mapped to all-zeros so
///   the caller chooses the fallback.
pub fn normalize(coverage: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    if coverage.is_empty() {
        return Err(AnalysisError::invalid("coverage track is empty"));
    }

    let mu = mean(coverage);
    let sigma = std_dev(coverage);
    if sigma == 0.0 {
        return Err(AnalysisError::DegenerateInput);
    }

    Ok(coverage.iter().map(|&x| (x - mu) / sigma).collect())
}
