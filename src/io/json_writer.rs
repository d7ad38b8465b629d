use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    AnalysisParams, InputMeta, PlottedCandidate, Results, TransientV1,
};

pub fn build_report(ctx: &Ctx) -> TransientV1 {
    let significant = ctx.adj_pvalues.iter().filter(|p| **p <= 0.05).count() as u64;
    let replicates = if ctx.repeat2_cols.is_empty() { 1 } else { 2 };

    TransientV1 {
        tool: "kira-transient".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta: InputMeta {
            rows: ctx.rows.len() as u64,
            time_points: ctx.time_stamps.len() as u64,
            replicates,
        },
        analysis: AnalysisParams {
            algorithm: ctx.algorithm,
            monte_carlo: ctx.monte_carlo as u64,
            adj_method: ctx.adjust,
            seed: ctx.effective_seed,
        },
        results: Results {
            significant,
            plotted: ctx
                .plot_candidates
                .iter()
                .map(|c| PlottedCandidate {
                    id: c.id.clone(),
                    log2_fc: c.log2_fc,
                })
                .collect(),
            grid_path: if ctx.plot_candidates.is_empty() {
                None
            } else {
                Some(ctx.grid_path.display().to_string())
            },
        },
    }
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ctx.report)?;
    Ok(())
}
