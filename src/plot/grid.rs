//! Square grid of small multiples for the selected candidates.
//!
//! Both replicate series are drawn against a log2-scaled time axis; the time
//! stamps are display-only and never weight the scores.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::ctx::{CandidateRecord, Ctx};
use crate::scores::PlotCandidate;

const CANVAS_SIZE: (u32, u32) = (1500, 1500);
const REPEAT1_COLOR: RGBColor = RGBColor(0, 128, 0);
const REPEAT2_COLOR: RGBColor = RGBColor(255, 165, 0);

pub fn render_grid(ctx: &Ctx) -> Result<(), Box<dyn Error>> {
    let selected = &ctx.plot_candidates;
    let side = (selected.len() as f64).sqrt().ceil() as usize;

    let root = BitMapBackend::new(&ctx.grid_path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let time_log2: Vec<f64> = ctx
        .time_stamps
        .iter()
        .map(|&t| (t as f64).log2())
        .collect();

    // Unused trailing cells stay blank.
    let cells = root.split_evenly((side, side));
    for (cell, candidate) in cells.iter().zip(selected.iter()) {
        draw_cell(cell, &time_log2, &ctx.rows[candidate.row], candidate)?;
    }

    root.present()?;
    Ok(())
}

fn draw_cell(
    area: &DrawingArea<BitMapBackend, Shift>,
    time_log2: &[f64],
    record: &CandidateRecord,
    candidate: &PlotCandidate,
) -> Result<(), Box<dyn Error>> {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &x in time_log2 {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
    }
    if x_max - x_min < 1e-9 {
        x_min -= 0.5;
        x_max += 0.5;
    }

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &y in record.repeat1.iter().chain(record.repeat2.iter()) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let pad = (y_max - y_min).max(1e-9) * 0.08;

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} (log2(FC): {:.3})", candidate.id, candidate.log2_fc),
            ("sans-serif", 18),
        )
        .margin(10)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))?;

    for (series, color) in [
        (&record.repeat1, REPEAT1_COLOR),
        (&record.repeat2, REPEAT2_COLOR),
    ] {
        if series.is_empty() {
            continue;
        }
        let points: Vec<(f64, f64)> = time_log2
            .iter()
            .copied()
            .zip(series.iter().copied())
            .collect();
        chart.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?;
        chart.draw_series(
            points
                .into_iter()
                .map(|p| Circle::new(p, 3, color.filled())),
        )?;
    }

    Ok(())
}
