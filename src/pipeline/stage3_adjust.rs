use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::math::adjust;
use crate::pipeline::Stage;

pub struct Stage3Adjust;

impl Stage3Adjust {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Adjust {
    fn name(&self) -> &'static str {
        "stage3_adjust"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.pvalues.len() != ctx.rows.len() {
            bail!("raw p-values missing before adjustment");
        }
        ctx.adj_pvalues = adjust::adjust_pvalues(&ctx.pvalues, ctx.adjust);
        info!(method = ?ctx.adjust, "adjustment_ready");
        Ok(())
    }
}
