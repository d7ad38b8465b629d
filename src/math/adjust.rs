//! Multiple-testing corrections over a raw p-value column.
//!
//! Every method returns adjusted p-values aligned with the input order and
//! clamped to [0, 1].

use crate::schema::v1::AdjustMethod;

pub fn adjust_pvalues(pvalues: &[f64], method: AdjustMethod) -> Vec<f64> {
    match method {
        AdjustMethod::Bonferroni => bonferroni(pvalues),
        AdjustMethod::Holm => holm(pvalues),
        AdjustMethod::Hochberg => hochberg(pvalues),
        AdjustMethod::FdrBh => fdr(pvalues, 1.0),
        AdjustMethod::FdrBy => {
            let scale = (1..=pvalues.len()).map(|k| 1.0 / k as f64).sum();
            fdr(pvalues, scale)
        }
    }
}

fn bonferroni(pvalues: &[f64]) -> Vec<f64> {
    let m = pvalues.len() as f64;
    pvalues.iter().map(|&p| (p * m).min(1.0)).collect()
}

/// Step-down: scale by (m - rank), then enforce monotonicity with a running
/// maximum from the smallest p-value up.
fn holm(pvalues: &[f64]) -> Vec<f64> {
    let m = pvalues.len();
    let mut adjusted = vec![0.0; m];
    let mut running = 0.0f64;
    for (rank, &idx) in order_by_pvalue(pvalues).iter().enumerate() {
        let scaled = ((m - rank) as f64 * pvalues[idx]).min(1.0);
        running = running.max(scaled);
        adjusted[idx] = running;
    }
    adjusted
}

/// Step-up: same scaling as Holm, monotonicity enforced with a running
/// minimum from the largest p-value down.
fn hochberg(pvalues: &[f64]) -> Vec<f64> {
    let m = pvalues.len();
    let mut adjusted = vec![0.0; m];
    let mut running = 1.0f64;
    for (rank, &idx) in order_by_pvalue(pvalues).iter().enumerate().rev() {
        let scaled = ((m - rank) as f64 * pvalues[idx]).min(1.0);
        running = running.min(scaled);
        adjusted[idx] = running;
    }
    adjusted
}

/// Benjamini-Hochberg with `scale == 1`, Benjamini-Yekutieli with
/// `scale == sum(1/k)`.
fn fdr(pvalues: &[f64], scale: f64) -> Vec<f64> {
    let m = pvalues.len();
    let mut adjusted = vec![0.0; m];
    let mut running = 1.0f64;
    for (rank, &idx) in order_by_pvalue(pvalues).iter().enumerate().rev() {
        let scaled = (scale * m as f64 * pvalues[idx] / (rank + 1) as f64).min(1.0);
        running = running.min(scaled);
        adjusted[idx] = running;
    }
    adjusted
}

fn order_by_pvalue(pvalues: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..pvalues.len()).collect();
    order.sort_by(|&a, &b| pvalues[a].total_cmp(&pvalues[b]));
    order
}
