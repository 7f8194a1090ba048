/*
 * Cell Absorption Simulation
 *
 * Circular cells wander around the canvas, drifting weakly toward its center
 * and growing slowly. When two cells touch, the larger one absorbs area from
 * the smaller one so that total area is conserved and the two end up tangent.
 *
 * Set RUST_LOG (e.g. RUST_LOG=cell_absorption=debug) to see population stats.
 */

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cell_absorption::{app, SimulationParams, CANVAS_HEIGHT, CANVAS_WIDTH, POPULATION};

#[derive(Parser, Debug)]
#[command(
    name = "cell-absorption",
    version,
    about = "Watch wandering cells absorb each other"
)]
struct Cli {
    /// Number of cells seeded at startup.
    #[arg(long, default_value_t = POPULATION)]
    population: usize,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = CANVAS_WIDTH)]
    width: f32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = CANVAS_HEIGHT)]
    height: f32,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let params = SimulationParams::with_canvas(cli.population, cli.width, cli.height);
    params.validate().context("invalid simulation parameters")?;

    info!(
        population = params.population,
        width = params.width,
        height = params.height,
        "Starting cell absorption simulation"
    );
    app::run(params);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
