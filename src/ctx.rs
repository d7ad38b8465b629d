use std::path::PathBuf;

use crate::schema::v1::{AdjustMethod, Algorithm, TransientV1};
use crate::scores::PlotCandidate;

/// One row of the input table: identity, the raw cell text of every original
/// column (reproduced verbatim in the augmented output), and the parsed
/// replicate series. The trajectory used for scoring is replicate 1 followed
/// by replicate 2.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub id: String,
    pub fields: Vec<String>,
    pub repeat1: Vec<f64>,
    pub repeat2: Vec<f64>,
    pub trajectory: Vec<f64>,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub algorithm: Algorithm,
    pub monte_carlo: usize,
    pub adjust: AdjustMethod,
    pub time_stamps: Vec<u64>,
    pub repeat1_cols: Vec<usize>,
    pub repeat2_cols: Vec<usize>,
    pub candidate_id_col: usize,
    pub grid_path: PathBuf,
    pub seed: Option<u64>,
    pub effective_seed: u64,
    pub threads: usize,
    pub json_path: Option<PathBuf>,
    pub header: Vec<String>,
    pub rows: Vec<CandidateRecord>,
    pub pvalues: Vec<f64>,
    pub adj_pvalues: Vec<f64>,
    pub plot_candidates: Vec<PlotCandidate>,
    pub grid_written: bool,
    pub warnings: Vec<String>,
    pub report: TransientV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        algorithm: Algorithm,
        adjust: AdjustMethod,
        time_stamps: Vec<u64>,
        repeat1_cols: Vec<usize>,
        repeat2_cols: Vec<usize>,
        candidate_id_col: usize,
        grid_name: &str,
        tool_version: &str,
    ) -> Self {
        let grid_path = PathBuf::from(format!("{grid_name}.png"));
        let report = TransientV1::empty(tool_version, algorithm, adjust);
        Self {
            input,
            algorithm,
            monte_carlo: 5000,
            adjust,
            time_stamps,
            repeat1_cols,
            repeat2_cols,
            candidate_id_col,
            grid_path,
            seed: None,
            effective_seed: 0,
            threads: 0,
            json_path: None,
            header: Vec::new(),
            rows: Vec::new(),
            pvalues: Vec::new(),
            adj_pvalues: Vec::new(),
            plot_candidates: Vec::new(),
            grid_written: false,
            warnings: Vec::new(),
            report,
        }
    }
}
