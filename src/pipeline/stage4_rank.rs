use std::cmp::Ordering;

use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::PlotCandidate;
use crate::scores::fold_change::max_fold_change;

const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

pub struct Stage4Rank;

impl Stage4Rank {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Rank {
    fn name(&self) -> &'static str {
        "stage4_rank"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.adj_pvalues.len() != ctx.rows.len() {
            bail!("adjusted p-values missing before ranking");
        }

        let total = ctx.rows.len();
        // Display-density cap, not a statistical threshold.
        let cap = (total as f64).sqrt().ceil() as usize;

        let mut order: Vec<usize> = (0..total).collect();
        order.sort_by(|&a, &b| ctx.adj_pvalues[a].total_cmp(&ctx.adj_pvalues[b]));

        let mut selected = Vec::new();
        for row in order
            .into_iter()
            .filter(|&r| ctx.adj_pvalues[r] <= SIGNIFICANCE_THRESHOLD)
            .take(cap)
        {
            let log2_fc = max_fold_change(&ctx.rows[row].trajectory)?.log2();
            if !log2_fc.is_finite() {
                warn!(id = %ctx.rows[row].id, "non-finite log2 fold change, ranked last");
                ctx.warnings
                    .push(format!("candidate {}: non-finite log2 fold change", ctx.rows[row].id));
            }
            selected.push(PlotCandidate {
                row,
                id: ctx.rows[row].id.clone(),
                log2_fc,
            });
        }

        selected.sort_by(|a, b| match (a.log2_fc.is_finite(), b.log2_fc.is_finite()) {
            (true, true) => b.log2_fc.total_cmp(&a.log2_fc),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        });

        info!(selected = selected.len(), cap, "ranking_ready");
        ctx.plot_candidates = selected;
        Ok(())
    }
}
