use anyhow::Context as _;
use flappy_brain::PerceptronPilot;
use flappy_engine::{GameSession, HumanPilot};

use crate::{
    command::{GameArg, play::app::PlayApp},
    tui::Tui,
    util::{self, LogSink},
};

use self::screens::Screen;

mod app;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    game: GameArg,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    game: GameArg,
    /// Start in turbo mode
    #[clap(long, default_value_t = false)]
    turbo: bool,
    /// Start a new run automatically after each game over
    #[clap(long, default_value_t = false)]
    restart: bool,
}

pub(crate) fn run_manual(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { game } = arg;
    util::init_logging(game.log_file(), LogSink::FileOnly)?;

    let (config, seed) = game.load()?;
    let session = GameSession::new(config.game, Box::new(HumanPilot), seed)
        .context("Invalid game configuration")?;

    let mut app = PlayApp::new(Screen::manual(session));
    Tui::new().run(&mut app)
}

pub(crate) fn run_auto(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        game,
        turbo,
        restart,
    } = arg;
    util::init_logging(game.log_file(), LogSink::FileOnly)?;

    let (config, seed) = game.load()?;
    let pilot = PerceptronPilot::new(config.perceptron);
    let session = GameSession::new(config.game, Box::new(pilot), seed)
        .context("Invalid game configuration")?;

    let mut app = PlayApp::new(Screen::auto(session, *turbo, *restart));
    Tui::new().run(&mut app)
}
