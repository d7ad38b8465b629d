pub mod deviation;
pub mod fold_change;
pub mod permutation;

use crate::error::TransientError;
use crate::schema::v1::Algorithm;

/// One candidate picked for the plot grid. `row` is the position in the
/// input table; identity travels with the record, never with the sort order.
#[derive(Debug, Clone)]
pub struct PlotCandidate {
    pub row: usize,
    pub id: String,
    pub log2_fc: f64,
}

pub fn score(algorithm: Algorithm, trajectory: &[f64]) -> Result<f64, TransientError> {
    match algorithm {
        Algorithm::Euclidean => deviation::linear_deviation(trajectory),
        Algorithm::Dtw => deviation::elastic_deviation(trajectory),
    }
}
