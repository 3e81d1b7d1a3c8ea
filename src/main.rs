use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use life_engine::{BoundaryPolicy, EngineConfig, Pattern, Simulation};

/// Headless epoch driver: seeds a pattern, then ticks the engine on a fixed
/// interval until the grid settles or the generation limit is hit.
#[derive(Parser, Debug)]
#[command(name = "life_engine", version, about)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<i64>,

    #[arg(long)]
    cols: Option<i64>,

    /// finite | toroidal | unbounded
    #[arg(long)]
    policy: Option<BoundaryPolicy>,

    /// Seed pattern placed in the centre of the grid
    #[arg(long, default_value = "r-pentomino")]
    pattern: Pattern,

    /// Stop after this many generations
    #[arg(long)]
    generations: Option<u64>,

    /// Epoch length in milliseconds (0 runs as fast as possible)
    #[arg(long)]
    epoch_ms: Option<u64>,
}

fn build_config(args: &Args) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(limit) = args.generations {
        config.max_generations = Some(limit);
    }
    if let Some(epoch_ms) = args.epoch_ms {
        config.epoch_ms = epoch_ms;
    }
    config.validate()?;
    Ok(config)
}

fn run(config: &EngineConfig, pattern: Pattern) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::new(config)?;
    let placed = sim.place_centered(pattern);
    log::info!(
        "Seeded {} ({} cells) on {}x{} {} grid, rules {}",
        pattern,
        placed,
        config.rows,
        config.cols,
        config.policy,
        config.rules
    );

    let epoch = Duration::from_millis(config.epoch_ms);
    let mut next_epoch = Instant::now();
    sim.start();

    while sim.is_running() {
        if let Some(limit) = config.max_generations {
            if sim.generation() >= limit {
                log::info!("Reached generation limit {}", limit);
                sim.stop();
                break;
            }
        }

        let now = Instant::now();
        if next_epoch > now {
            std::thread::sleep(next_epoch - now);
        }
        next_epoch += epoch;

        let tick = sim.tick()?;
        let (rows, cols) = sim.state().dimensions();
        log::debug!(
            "Generation {}: population {}, +{} -{}, grid {}x{}",
            tick.generation,
            sim.population(),
            tick.births(),
            tick.deaths(),
            rows,
            cols
        );
        if !tick.grown.is_empty() {
            log::info!("Generation {}: grew {:?} -> {}x{}", tick.generation, tick.grown, rows, cols);
        }
    }

    let (rows, cols) = sim.state().dimensions();
    log::info!(
        "Finished after {} generations: population {}, grid {}x{}, peak activity {}",
        sim.generation(),
        sim.population(),
        rows,
        cols,
        sim.state().activity().max()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config, args.pattern) {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}
