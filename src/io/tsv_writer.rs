use std::io::Write;

use anyhow::{Result, bail};

use crate::ctx::Ctx;

/// Writes the augmented table: every original column, then `Pvalue` and
/// `adj_Pvalue`, in input row order.
pub fn write_table<W: Write>(w: &mut W, ctx: &Ctx) -> Result<()> {
    let n = ctx.rows.len();
    if ctx.pvalues.len() != n || ctx.adj_pvalues.len() != n {
        bail!(
            "p-value columns incomplete: {} rows, {} raw, {} adjusted",
            n,
            ctx.pvalues.len(),
            ctx.adj_pvalues.len()
        );
    }

    writeln!(w, "{}\tPvalue\tadj_Pvalue", ctx.header.join("\t"))?;
    for (i, record) in ctx.rows.iter().enumerate() {
        writeln!(
            w,
            "{}\t{:.6}\t{:.6}",
            record.fields.join("\t"),
            ctx.pvalues[i],
            ctx.adj_pvalues[i]
        )?;
    }

    Ok(())
}
