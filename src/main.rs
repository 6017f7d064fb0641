use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crawler::build_info;
use crawler::game::Game;
use crawler::ui::TerminalConsole;
use crawler::{GameConfig, GameError};

/// Survive ten days in the dungeon, one goblin at a time.
#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(version = build_info::LONG_VERSION, about, long_about = None)]
struct Cli {
    /// TOML file overriding any game setting
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pacing multiplier for delays (0 disables them)
    #[arg(long, value_name = "F")]
    speed: Option<f64>,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    // RUST_LOG refines the CLI level when set
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None);
    builder.init();
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(speed) = cli.speed {
        config.game_speed = speed;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let rng = match config.seed {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let console = TerminalConsole::new(config.game_speed);
    let mut game = Game::new(console, rng, config);

    match game.run() {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed) => {
            info!("input closed, exiting");
            println!();
            Ok(())
        }
        Err(e) => Err(e).context("game aborted"),
    }
}
