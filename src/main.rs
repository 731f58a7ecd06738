use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::Parser;
use heat2d::config::{ALPHA, DT, MESH_X, MESH_Y};
use heat2d::{Execution, Point, RightEdgeBound, Simulation, SimulationConfig};

/// Headless 2D heat diffusion from scattered temperature samples.
#[derive(Parser, Debug)]
#[command(name = "heat2d", version, about, long_about = None)]
struct Cli {
    /// Sample as `x,y,z`. Repeat for more samples.
    #[arg(short, long = "point", value_name = "X,Y,Z", allow_hyphen_values = true)]
    points: Vec<Point>,

    /// Thermal diffusivity
    #[arg(long, default_value_t = ALPHA)]
    alpha: f64,

    /// Simulated seconds per step
    #[arg(long, default_value_t = DT)]
    dt: f64,

    /// Grid width in cells
    #[arg(long, default_value_t = MESH_X)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = MESH_Y)]
    height: usize,

    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 100)]
    steps: u64,

    /// Log grid statistics every this many steps (0 disables)
    #[arg(long, default_value_t = 10)]
    report_every: u64,

    /// Apply the Laplacian on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel
    #[arg(long, default_value_t = 2)]
    threads: usize,

    /// Bound the right-neighbour check by the column count instead of the row count
    #[arg(long)]
    column_bound: bool,

    /// Print the final grid to stdout
    #[arg(long)]
    print_grid: bool,
}

fn default_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 25.0, 240.0),
        Point::new(25.0, 0.0, 80.0),
        Point::new(49.0, 49.0, 192.0),
        Point::new(3.0, 1.0, 240.0),
    ]
}

fn per_step(elapsed: Duration, steps: u64) -> Duration {
    elapsed.div_f64(steps.max(1) as f64)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.threads < 1 {
        bail!("--threads must be at least 1");
    }
    if cli.parallel {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to build rayon thread pool")?;
    }

    let points = if cli.points.is_empty() {
        default_points()
    } else {
        cli.points.clone()
    };

    let config = SimulationConfig {
        alpha: cli.alpha,
        delta_time: cli.dt,
        width: cli.width,
        height: cli.height,
        execution: if cli.parallel {
            Execution::Parallel
        } else {
            Execution::Serial
        },
        right_edge: if cli.column_bound {
            RightEdgeBound::ColumnCount
        } else {
            RightEdgeBound::RowCount
        },
        ..Default::default()
    };

    let mut sim = Simulation::setup(&points, &config)
        .with_context(|| format!("setting up simulation from {} samples", points.len()))?;

    log::info!(
        "{}x{} grid, alpha = {}, dt = {}, {} steps ({:?})",
        config.width,
        config.height,
        config.alpha,
        config.delta_time,
        cli.steps,
        config.execution
    );

    let start = Instant::now();
    for _ in 0..cli.steps {
        sim.advance();
        if cli.report_every > 0 && sim.steps() % cli.report_every == 0 {
            let grid = sim.grid();
            let (lo, hi) = grid.min_max().unwrap_or((0.0, 0.0));
            let mean = grid.interior_mean().unwrap_or(0.0);
            log::info!(
                "step {:5}  t = {:8.3}  min = {:10.4}  max = {:10.4}  mean = {:10.4}",
                sim.steps(),
                sim.time(),
                lo,
                hi,
                mean
            );
        }
    }
    let elapsed = start.elapsed();

    log::info!(
        "{} steps in {:?} ({:?}/step)",
        sim.steps(),
        elapsed,
        per_step(elapsed, sim.steps())
    );

    if cli.print_grid {
        print!("{}", sim.grid());
    }

    Ok(())
}
