//! The two deviation scorers.
//!
//! Both re-derive the reference line from the trajectory exactly as given, so
//! a permuted trajectory is scored against its own line. That is what makes
//! the permutation null distribution meaningful.

use crate::error::TransientError;
use crate::math::dtw::dtw_distance;
use crate::math::reference::reference_line;

/// Signed sum of (observed - reference). Trajectories consistently above the
/// line score positive, below negative; crossings partially cancel.
pub fn linear_deviation(trajectory: &[f64]) -> Result<f64, TransientError> {
    let reference = reference_line(trajectory)?;
    Ok(trajectory
        .iter()
        .zip(&reference)
        .map(|(observed, r)| observed - r)
        .sum())
}

/// Minimum warping cost between the trajectory and its reference line.
/// Always non-negative, sensitive to shape mismatch regardless of sign.
pub fn elastic_deviation(trajectory: &[f64]) -> Result<f64, TransientError> {
    let reference = reference_line(trajectory)?;
    Ok(dtw_distance(trajectory, &reference))
}
