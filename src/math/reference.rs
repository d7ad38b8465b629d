//! Linear reference baseline between a trajectory's early and late segments.

use crate::error::TransientError;
use crate::math::mean;

/// Reference values for a trajectory of length L: the affine line through the
/// mean of the first `L/5` points and the mean of the last `L/6` points,
/// evaluated at 1-indexed positions 1..=L.
///
/// The line is a function of the values in the order given, so a permuted
/// trajectory gets its own line. Trajectories shorter than 6 points leave one
/// of the segments empty and are rejected.
pub fn reference_line(trajectory: &[f64]) -> Result<Vec<f64>, TransientError> {
    let len = trajectory.len();
    let head = len / 5;
    let tail = len / 6;
    if head == 0 || tail == 0 {
        return Err(TransientError::DegenerateTrajectory { len });
    }

    let mean_start = mean(&trajectory[..head]);
    let mean_end = mean(&trajectory[len - tail..]);
    let slope = (mean_end - mean_start) / len as f64;
    let intercept = mean_start - slope;

    Ok((1..=len).map(|x| slope * x as f64 + intercept).collect())
}
