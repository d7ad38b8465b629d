use anyhow::{Result, anyhow};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::plot::grid;

pub struct Stage6Render;

impl Stage6Render {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Render {
    fn name(&self) -> &'static str {
        "stage6_render"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.plot_candidates.is_empty() {
            warn!("no significant transient candidates found for plotting");
            println!("No significant transient candidates found for plotting.");
            return Ok(());
        }

        grid::render_grid(ctx).map_err(|e| anyhow!("grid rendering failed: {e}"))?;
        ctx.grid_written = true;
        info!(
            grid = %ctx.grid_path.display(),
            candidates = ctx.plot_candidates.len(),
            "grid_ready"
        );
        Ok(())
    }
}
