use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flappy_engine::GameSeed;
use rand::Rng as _;

use crate::{command::play::PlayArg, util::ConfigFile};

use self::{play::AutoPlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Fly a single bird with the keyboard
    #[command(name = "play")]
    Play(#[clap(flatten)] PlayArg),
    /// Watch a population of perceptron-driven birds
    #[command(name = "auto-play")]
    AutoPlay(#[clap(flatten)] AutoPlayArg),
    /// Run populations without a terminal UI and print a JSON summary
    Simulate(#[clap(flatten)] SimulateArg),
}

/// Options shared by every mode.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Path to a JSON config file (missing fields take defaults)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Random seed: 32 hex digits or a decimal number (random if omitted)
    #[clap(long)]
    seed: Option<GameSeed>,
    /// Number of birds in population modes
    #[clap(long)]
    population: Option<usize>,
    /// Frames per second
    #[clap(long)]
    fps: Option<u32>,
    /// Write logs to this file (filtered by RUST_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl GameArg {
    /// Reads the config file and applies command line overrides.
    pub(crate) fn load(&self) -> anyhow::Result<(ConfigFile, GameSeed)> {
        let mut config = ConfigFile::load(self.config.as_deref())?;
        if let Some(population) = self.population {
            config.game.population = population;
        }
        if let Some(fps) = self.fps {
            config.game.fps = fps;
        }
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        Ok((config, seed))
    }

    pub(crate) fn log_file(&self) -> Option<&std::path::Path> {
        self.log_file.as_deref()
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run_manual(&arg)?,
        Mode::AutoPlay(arg) => play::run_auto(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
