use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kira-transient",
    version,
    about = "Transient-signal identification over replicated time-series tables"
)]
pub struct Cli {
    #[arg(long, help = "Tab-separated input table with a header row")]
    pub input: PathBuf,

    #[arg(long, value_enum)]
    pub algorithm: AlgorithmArg,

    #[arg(long, default_value_t = 5000, help = "Permutations per candidate")]
    pub monte_carlo: usize,

    #[arg(long, value_enum, default_value_t = AdjustMethodArg::FdrBh)]
    pub adj_method: AdjustMethodArg,

    #[arg(
        long,
        num_args = 1..,
        required = true,
        help = "Time-axis value per sampled point, shared by all candidates"
    )]
    pub time_stamps: Vec<u64>,

    #[arg(
        long,
        num_args = 1..,
        required = true,
        help = "Zero-based replicate-1 column indices"
    )]
    pub repeat1_cols: Vec<usize>,

    #[arg(long, num_args = 1.., help = "Zero-based replicate-2 column indices")]
    pub repeat2_cols: Vec<usize>,

    #[arg(long, default_value_t = 0, help = "Zero-based candidate-id column index")]
    pub candidate_id_col: usize,

    #[arg(
        long,
        default_value = "plot_grid",
        help = "Output image base name (.png appended)"
    )]
    pub grid_name: String,

    #[arg(long, help = "Fix the permutation base seed for reproducible runs")]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,

    #[arg(long, help = "Optional path for a JSON run report")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    #[value(name = "Euclidean")]
    Euclidean,
    #[value(name = "DTW")]
    Dtw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdjustMethodArg {
    Bonferroni,
    Holm,
    Hochberg,
    #[value(name = "fdr_bh")]
    FdrBh,
    #[value(name = "fdr_by")]
    FdrBy,
}
