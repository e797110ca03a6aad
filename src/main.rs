use anyhow::{Context, Result, anyhow};
use clap::Parser;
use level_snake::game::{GameConfig, GameEngine};
use level_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "level_snake")]
#[command(version, about = "Snake with lives, levels, and obstacles")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "40")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// The snake moves once every SPEED updates (60 updates per second)
    #[arg(long, default_value = "6")]
    speed: u32,

    /// Lives per run
    #[arg(long, default_value = "3")]
    lives: u32,

    /// Number of levels to pass
    #[arg(long, default_value = "4")]
    max_level: u32,

    /// Seed for food and obstacle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            speed: self.speed,
            initial_lives: self.lives,
            max_level: self.max_level,
            ..GameConfig::new(self.width, self.height)
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Create game configuration from CLI arguments
    let config = cli.game_config();
    config
        .validate()
        .map_err(|e| anyhow!("Invalid game configuration: {e}"))?;

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut human_mode = HumanMode::with_engine(engine);
    human_mode.run().await?;

    Ok(())
}
