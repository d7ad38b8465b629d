use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_transient::cli::{AdjustMethodArg, AlgorithmArg, Cli};
use kira_transient::ctx::Ctx;
use kira_transient::pipeline::Pipeline;
use kira_transient::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_transient::pipeline::stage1_input::Stage1Input;
use kira_transient::pipeline::stage2_significance::Stage2Significance;
use kira_transient::pipeline::stage3_adjust::Stage3Adjust;
use kira_transient::pipeline::stage4_rank::Stage4Rank;
use kira_transient::pipeline::stage5_output::Stage5Output;
use kira_transient::pipeline::stage6_render::Stage6Render;
use kira_transient::schema::v1::{AdjustMethod, Algorithm};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let algorithm = match cli.algorithm {
        AlgorithmArg::Euclidean => Algorithm::Euclidean,
        AlgorithmArg::Dtw => Algorithm::Dtw,
    };
    let adjust = match cli.adj_method {
        AdjustMethodArg::Bonferroni => AdjustMethod::Bonferroni,
        AdjustMethodArg::Holm => AdjustMethod::Holm,
        AdjustMethodArg::Hochberg => AdjustMethod::Hochberg,
        AdjustMethodArg::FdrBh => AdjustMethod::FdrBh,
        AdjustMethodArg::FdrBy => AdjustMethod::FdrBy,
    };

    let mut ctx = Ctx::new(
        cli.input,
        algorithm,
        adjust,
        cli.time_stamps,
        cli.repeat1_cols,
        cli.repeat2_cols,
        cli.candidate_id_col,
        &cli.grid_name,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.monte_carlo = cli.monte_carlo;
    ctx.seed = cli.seed;
    ctx.threads = cli.threads;
    ctx.json_path = cli.json;

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Input::new()),
        Box::new(Stage2Significance::new()),
        Box::new(Stage3Adjust::new()),
        Box::new(Stage4Rank::new()),
        Box::new(Stage5Output::new()),
        Box::new(Stage6Render::new()),
    ]);
    pipeline.run(&mut ctx)?;

    Ok(())
}
