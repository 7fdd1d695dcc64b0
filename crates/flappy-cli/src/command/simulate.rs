use std::path::PathBuf;

use anyhow::Context as _;
use flappy_brain::PerceptronPilot;
use flappy_engine::{FrameInput, GameSeed, GameSession};
use serde::Serialize;
use tracing::info;

use crate::{
    command::GameArg,
    util::{self, LogSink, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    game: GameArg,
    /// Number of runs, each starting after the previous one ends
    #[arg(long, default_value_t = 1)]
    runs: u32,
    /// Stop a run after this many frames even if birds are still alive
    #[arg(long)]
    max_frames: Option<u64>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl SimulateArg {
    pub(crate) fn game(&self) -> &GameArg {
        &self.game
    }
}

#[derive(Debug, Clone, Serialize)]
struct Summary {
    seed: GameSeed,
    population: usize,
    best_score: usize,
    runs: Vec<RunSummary>,
}

#[derive(Debug, Clone, Serialize)]
struct RunSummary {
    generation: u32,
    score: usize,
    frames: u64,
    /// Birds still alive when the run stopped; nonzero only when capped.
    survivors: usize,
    best_survival: u64,
    duration_secs: f64,
}

impl RunSummary {
    fn new(session: &GameSession) -> Self {
        let stats = session.stats();
        Self {
            generation: stats.generation(),
            score: stats.score(),
            frames: stats.frames(),
            survivors: session.live_count(),
            best_survival: stats.best_survival(),
            duration_secs: session.duration().as_secs_f64(),
        }
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        game,
        runs,
        max_frames,
        output,
    } = arg;
    util::init_logging(game.log_file(), LogSink::Stderr)?;

    let (config, seed) = game.load()?;
    let pilot = PerceptronPilot::new(config.perceptron);
    let mut session = GameSession::new(config.game, Box::new(pilot), seed)
        .context("Invalid game configuration")?;

    let summary = simulate(&mut session, *runs, *max_frames);
    info!(
        seed = %summary.seed,
        runs = summary.runs.len(),
        best_score = summary.best_score,
        "simulation finished"
    );
    Output::save_json(&summary, output.clone())
}

fn simulate(session: &mut GameSession, runs: u32, max_frames: Option<u64>) -> Summary {
    let mut summaries = Vec::new();
    for run in 0..runs {
        if run > 0 {
            session.reset();
        }
        while !session.is_game_over() && max_frames.is_none_or(|max| session.frames() < max) {
            session.step(FrameInput::default());
        }
        summaries.push(RunSummary::new(session));
    }

    Summary {
        seed: session.seed(),
        population: session.population(),
        best_score: summaries.iter().map(|run| run.score).max().unwrap_or(0),
        runs: summaries,
    }
}
