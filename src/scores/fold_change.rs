//! Fold-change effect-size proxy used for ranking and plot labels.

use crate::error::TransientError;
use crate::math::reference::reference_line;

/// Mean of observed/reference at the two positions farthest from the
/// reference line, computed on the trajectory shifted by +1 to keep ratios
/// away from zero.
pub fn max_fold_change(trajectory: &[f64]) -> Result<f64, TransientError> {
    let shifted: Vec<f64> = trajectory.iter().map(|v| v + 1.0).collect();
    let reference = reference_line(&shifted)?;

    let mut order: Vec<usize> = (0..shifted.len()).collect();
    order.sort_by(|&a, &b| {
        let da = (shifted[a] - reference[a]).abs();
        let db = (shifted[b] - reference[b]).abs();
        da.total_cmp(&db)
    });

    let top = &order[order.len() - 2..];
    let ratio_sum: f64 = top.iter().map(|&i| shifted[i] / reference[i]).sum();
    Ok(ratio_sum / top.len() as f64)
}
