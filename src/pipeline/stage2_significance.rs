use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use crate::ctx::Ctx;
use crate::error::TransientError;
use crate::pipeline::Stage;
use crate::scores::permutation;

pub struct Stage2Significance;

impl Stage2Significance {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Significance {
    fn name(&self) -> &'static str {
        "stage2_significance"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let algorithm = ctx.algorithm;
        let monte_carlo = ctx.monte_carlo;
        let seed = ctx.effective_seed;
        let rows = &ctx.rows;

        // Rows are independent; each gets its own seeded stream so the run
        // is reproducible under a fixed base seed regardless of scheduling.
        let compute = || -> Result<Vec<f64>, TransientError> {
            rows.par_iter()
                .enumerate()
                .map(|(row, record)| {
                    let mut rng = permutation::row_rng(seed, row);
                    permutation::score_pvalue(&record.trajectory, algorithm, monte_carlo, &mut rng)
                })
                .collect()
        };

        let pvalues = if ctx.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(ctx.threads)
                .build()
                .context("failed to build thread pool")?;
            pool.install(compute)
        } else {
            compute()
        }?;

        ctx.pvalues = pvalues;
        info!(
            rows = ctx.pvalues.len(),
            algorithm = ?algorithm,
            monte_carlo,
            "significance_ready"
        );
        Ok(())
    }
}
