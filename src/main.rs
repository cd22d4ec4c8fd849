//! Command-line runner for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use conway_life::{
    build_initial_grid,
    config::{BoundaryCondition, CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, load_grid_from_reader, Simulation, Snapshot},
    utils::{ColorOutput, GridFormatter},
    PatternLibrary,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Emit debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print every generation
    Run(RunArgs),

    /// List the built-in patterns
    Patterns {
        /// Render each pattern as well
        #[arg(long)]
        show: bool,
    },

    /// Create a default configuration and example grids
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Starting pattern name (e.g. BLINKER, GLIDER)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Grid width in columns
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in rows
    #[arg(long)]
    height: Option<usize>,

    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<usize>,

    /// Row of the pattern's top-left corner
    #[arg(long)]
    anchor_row: Option<usize>,

    /// Column of the pattern's top-left corner
    #[arg(long)]
    anchor_col: Option<usize>,

    /// Milliseconds to pause between generations
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Wrap neighbors around the grid edges
    #[arg(long)]
    wrap: bool,

    /// Start from a grid file instead of a pattern
    #[arg(short, long, conflicts_with = "stdin")]
    input: Option<PathBuf>,

    /// Read the starting grid from standard input
    #[arg(long)]
    stdin: bool,

    /// Save per-generation snapshots to this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print row and column numbers around the grid
    #[arg(long)]
    coords: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => run_command(args),
        Commands::Patterns { show } => patterns_command(show),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        debug!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(args: RunArgs) -> Result<()> {
    let mut settings = load_settings(&args.config)?;

    let cli_overrides = CliOverrides {
        pattern: args.pattern,
        width: args.width,
        height: args.height,
        generations: args.generations,
        anchor_row: args.anchor_row,
        anchor_col: args.anchor_col,
        delay_ms: args.delay_ms,
        wrap: args.wrap,
        initial_state_file: args.input,
        output_dir: args.output,
    };
    settings.merge_with_cli(&cli_overrides);
    if args.coords {
        settings.output.show_coordinates = true;
    }

    let grid = if args.stdin {
        let grid = load_grid_from_reader(std::io::stdin().lock(), settings.simulation.boundary_condition)
            .context("Failed to read initial grid from standard input")?;
        println!("{}", ColorOutput::info("Initial state read from stdin:"));
        println!("{}", GridFormatter::format_grid_compact(&grid));
        grid
    } else {
        settings.validate().context("Configuration validation failed")?;
        build_initial_grid(&settings).context("Failed to build initial grid")?
    };

    info!(
        width = grid.width(),
        height = grid.height(),
        generations = settings.simulation.generations,
        "starting simulation"
    );

    let snapshots = simulate(Simulation::new(grid), &settings);

    if let Some(dir) = &settings.output.output_directory {
        GridFormatter::save_snapshots(&snapshots, dir, settings.output.format)
            .context("Failed to save snapshots")?;
        let kind = match settings.output.format {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        println!(
            "{}",
            ColorOutput::success(&format!("Saved {} {} snapshot(s) to {}", snapshots.len(), kind, dir.display()))
        );
    }

    Ok(())
}

/// Render generations until the configured count is reached (or the grid
/// dies out, if requested) and return a snapshot of each one
fn simulate(mut simulation: Simulation, settings: &Settings) -> Vec<Snapshot> {
    let delay = Duration::from_millis(settings.simulation.delay_ms);
    let mut snapshots = Vec::new();

    loop {
        println!("{}", GridFormatter::format_generation(&simulation, settings.output.show_coordinates));
        if settings.output.output_directory.is_some() {
            snapshots.push(simulation.snapshot());
        }

        if simulation.generation() >= settings.simulation.generations {
            break;
        }
        if settings.simulation.stop_when_empty && simulation.is_extinct() {
            println!("{}", ColorOutput::warning(&format!(
                "All cells died at generation {}", simulation.generation()
            )));
            break;
        }

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        simulation.evolve();
    }

    snapshots
}

fn patterns_command(show: bool) -> Result<()> {
    let library = PatternLibrary::standard();

    println!("{}", ColorOutput::info("Available patterns:"));
    for pattern in library.patterns() {
        println!(
            "  {:<18} {:>2}x{:<2} {:>3} cells",
            pattern.name(),
            pattern.width(),
            pattern.height(),
            pattern.len()
        );
        if show {
            let grid = pattern.to_grid(Default::default())?;
            println!("{}", GridFormatter::format_grid_compact(&grid));
        }
    }

    Ok(())
}

/// Write `settings` to `path` unless the file exists and `force` is unset
fn write_settings(path: &Path, settings: &Settings, force: bool) -> Result<bool> {
    if path.exists() && !force {
        println!("Skipped: {} (already exists)", path.display());
        return Ok(false);
    }
    settings
        .to_file(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    println!("Created: {}", path.display());
    Ok(true)
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/grids");

    for dir in [&config_dir, &input_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    write_settings(&config_path, &Settings::default(), force)?;

    let grids = create_example_grids(&input_dir, force).context("Failed to create example grids")?;
    println!("Created {} example grids in: {}", grids.len(), input_dir.display());

    let examples_dir = config_dir.join("examples");

    let mut blinker = Settings::default();
    blinker.seed.pattern = "BLINKER".to_string();
    blinker.simulation.width = 5;
    blinker.simulation.height = 5;
    blinker.seed.anchor_row = 2;
    blinker.seed.anchor_col = 1;
    blinker.simulation.generations = 4;

    let mut gun = Settings::default();
    gun.seed.pattern = "GOSPER_GLIDER_GUN".to_string();
    gun.simulation.width = 40;
    gun.simulation.height = 30;
    gun.simulation.generations = 60;
    gun.simulation.delay_ms = 100;

    // Relative to config/examples/, where the file is written
    let mut from_file = Settings::default();
    from_file.seed.initial_state_file = Some(PathBuf::from("../../input/grids/beacon.txt"));
    from_file.simulation.boundary_condition = BoundaryCondition::Wrap;

    for (name, settings) in [
        ("blinker.yaml", &blinker),
        ("glider_gun.yaml", &gun),
        ("beacon_wrap.yaml", &from_file),
    ] {
        write_settings(&examples_dir.join(name), settings, force)?;
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}
