use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::error::TransientError;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.monte_carlo == 0 {
            return Err(invalid("monte_carlo must be positive"));
        }
        if ctx.repeat1_cols.is_empty() {
            return Err(invalid("repeat1_cols must not be empty"));
        }
        if ctx.repeat1_cols.len() != ctx.time_stamps.len() {
            return Err(invalid(&format!(
                "repeat1_cols has {} columns but time_stamps has {} points",
                ctx.repeat1_cols.len(),
                ctx.time_stamps.len()
            )));
        }
        if !ctx.repeat2_cols.is_empty() && ctx.repeat2_cols.len() != ctx.time_stamps.len() {
            return Err(invalid(&format!(
                "repeat2_cols has {} columns but time_stamps has {} points",
                ctx.repeat2_cols.len(),
                ctx.time_stamps.len()
            )));
        }
        if ctx.time_stamps.iter().any(|&t| t == 0) {
            return Err(invalid("time_stamps must be positive for the log-scaled axis"));
        }

        ctx.effective_seed = match ctx.seed {
            Some(seed) => seed,
            None => rand::random(),
        };

        info!(
            seed = ctx.effective_seed,
            grid = %ctx.grid_path.display(),
            "scaffold_ready"
        );
        Ok(())
    }
}

fn invalid(message: &str) -> anyhow::Error {
    TransientError::InvalidConfiguration(message.to_string()).into()
}
