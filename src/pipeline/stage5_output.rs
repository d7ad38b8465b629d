use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        tsv_writer::write_table(&mut out, ctx)?;
        out.flush()?;

        ctx.report = json_writer::build_report(ctx);
        if let Some(path) = ctx.json_path.clone() {
            json_writer::write_json(&path, ctx)?;
            info!(json = %path.display(), "report written");
        }

        info!("stage5_output_ready");
        Ok(())
    }
}
