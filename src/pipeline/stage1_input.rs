use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::{CandidateRecord, Ctx};
use crate::error::TransientError;
use crate::io::table;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = table::read_table(&ctx.input)
            .with_context(|| format!("failed to read {}", ctx.input.display()))?;

        let mut rows = Vec::with_capacity(table.rows.len());
        for (row, fields) in table.rows.iter().enumerate() {
            let id = cell(fields, ctx.candidate_id_col, row)?.to_string();
            let repeat1 = parse_series(fields, &ctx.repeat1_cols, row)?;
            let repeat2 = parse_series(fields, &ctx.repeat2_cols, row)?;
            let mut trajectory = repeat1.clone();
            trajectory.extend_from_slice(&repeat2);
            rows.push(CandidateRecord {
                id,
                fields: fields.clone(),
                repeat1,
                repeat2,
                trajectory,
            });
        }

        if rows.is_empty() {
            return Err(TransientError::InputFormat("table has no candidate rows".into()).into());
        }

        ctx.header = table.header;
        ctx.rows = rows;
        info!(rows = ctx.rows.len(), "input_ready");
        Ok(())
    }
}

fn cell<'a>(fields: &'a [String], col: usize, row: usize) -> Result<&'a str, TransientError> {
    fields.get(col).map(|s| s.as_str()).ok_or_else(|| {
        TransientError::InputFormat(format!(
            "row {}: column {} out of range ({} columns)",
            row + 1,
            col,
            fields.len()
        ))
    })
}

fn parse_series(
    fields: &[String],
    cols: &[usize],
    row: usize,
) -> Result<Vec<f64>, TransientError> {
    cols.iter()
        .map(|&col| {
            let raw = cell(fields, col, row)?;
            let value: f64 = raw.trim().parse().map_err(|_| {
                TransientError::InputFormat(format!(
                    "row {}: column {}: not a number: {:?}",
                    row + 1,
                    col,
                    raw
                ))
            })?;
            if !value.is_finite() {
                return Err(TransientError::InputFormat(format!(
                    "row {}: column {}: non-finite measurement",
                    row + 1,
                    col
                )));
            }
            Ok(value)
        })
        .collect()
}
