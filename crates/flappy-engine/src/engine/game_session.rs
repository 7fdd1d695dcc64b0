use std::time::Duration;

use rand::Rng as _;
use tracing::{debug, info};

use crate::{
    Bird, ConfigError, FrameInput, GameConfig, GameRng, GameSeed, GameStats, Pilot, PilotKind,
    PipeId, PipePair, PipeStream, Rect, SimParams, Vision,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// One game, for a single human bird or a whole autonomous population.
///
/// The session owns the birds, the pipe stream, the runtime parameters and
/// the random source. Birds live in a fixed index arena: a dead bird keeps its
/// slot (and its last position) until the next [`reset`](Self::reset), so
/// every live bird is visited exactly once per frame.
///
/// The pilot decides which mode is played. A [`PilotKind::Human`] pilot flies
/// one bird; a [`PilotKind::Autonomous`] pilot flies
/// [`GameConfig::population`] birds. Either way the run ends when no bird is
/// left alive.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    params: SimParams,
    seed: GameSeed,
    rng: GameRng,
    pilot: Box<dyn Pilot>,
    birds: Vec<Bird>,
    pipes: PipeStream,
    stats: GameStats,
    state: SessionState,
    tracked_pipe: Option<PipeId>,
}

impl GameSession {
    /// Validates `config` and starts the first run.
    pub fn new(
        config: GameConfig,
        pilot: Box<dyn Pilot>,
        seed: GameSeed,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = population_for(pilot.kind(), &config);
        let mut session = Self {
            params: SimParams::new(&config),
            seed,
            rng: seed.rng(),
            pilot,
            birds: Vec::with_capacity(population),
            pipes: PipeStream::new(&config),
            stats: GameStats::new(population),
            state: SessionState::Playing,
            tracked_pipe: None,
            config,
        };
        session.start_run();
        info!(%seed, population, kind = ?session.pilot.kind(), "session started");
        Ok(session)
    }

    /// Starts a new run: revived birds, a primed pipe stream, a new pilot
    /// preparation and the next generation number.
    ///
    /// Bird slots are reused; each bird is revived at a new height and color.
    ///
    /// The random source continues from where the previous run left it, and
    /// the runtime parameters are kept.
    pub fn reset(&mut self) {
        self.stats.start_next_run(self.population());
        self.start_run();
        info!(
            seed = %self.seed,
            generation = self.stats.generation(),
            "session reset"
        );
    }

    fn start_run(&mut self) {
        let population = self.population();
        self.birds.truncate(population);
        for index in 0..population {
            let (y, color) = match self.pilot.kind() {
                PilotKind::Human => (self.config.human_start_y(), self.config.bird_color),
                PilotKind::Autonomous => {
                    let [min, max] = self.config.spawn_band;
                    let y = self.rng.random_range(min..=max);
                    (y, self.rng.random())
                }
            };
            match self.birds.get_mut(index) {
                Some(bird) => {
                    bird.reset(y);
                    bird.set_color(color);
                }
                None => self.birds.push(Bird::new(y, color)),
            }
        }
        self.pilot.prepare(population, &mut self.rng);
        self.pipes.reset(&self.config);
        self.pipes.spawn(&self.config, &mut self.rng);
        self.tracked_pipe = self.pipes.next_unpassed().map(PipePair::id);
        self.state = SessionState::Playing;
    }

    /// Advances the game by one frame. Does nothing unless playing.
    ///
    /// See the [module documentation](crate::engine#frame-order) for the order
    /// of the phases.
    pub fn step(&mut self, input: FrameInput) {
        if !self.state.is_playing() {
            return;
        }
        self.stats.increment_frame();

        self.decide(input);
        for bird in self.birds.iter_mut().filter(|bird| bird.is_alive()) {
            bird.advance(&self.config);
        }
        self.pipes
            .advance(&self.config, self.params.scroll_speed(), &mut self.rng);
        self.detect_collisions();
        self.update_score();

        if self.live_count() == 0 {
            self.state = SessionState::GameOver;
            info!(
                seed = %self.seed,
                generation = self.stats.generation(),
                score = self.stats.score(),
                frames = self.stats.frames(),
                "game over"
            );
        }
    }

    fn decide(&mut self, input: FrameInput) {
        let rearm_after_jump = self.pilot.kind().is_human();
        let next = self.pipes.next_unpassed();
        for (index, bird) in self.birds.iter_mut().enumerate() {
            if !bird.is_alive() {
                continue;
            }
            let vision = next.map(|pipe| Vision::sense(bird, pipe, &self.config));
            let wants_jump = self
                .pilot
                .decide(index, vision.as_ref(), input, &mut self.rng);
            if wants_jump && bird.jump(&self.config) && rearm_after_jump {
                bird.rearm();
            }
        }
    }

    fn detect_collisions(&mut self) {
        let ground = self.config.ground_rect();
        let barriers = self.pipes.next_unpassed().map(|pipe| pipe.rects(&self.config));
        for (index, bird) in self.birds.iter_mut().enumerate() {
            if !bird.is_alive() {
                continue;
            }
            let hit_ground = bird.collides_with(&self.config, &ground);
            let hit_pipe = barriers
                .iter()
                .flatten()
                .any(|rect| bird.collides_with(&self.config, rect));
            if hit_ground || hit_pipe {
                bird.kill();
                self.stats.record_death(index);
                debug!(index, hit_ground, frame = self.stats.frames(), "bird died");
            }
        }
    }

    /// Scores once each time the tracked next pipe pair stops being next.
    fn update_score(&mut self) {
        let next = self.pipes.next_unpassed().map(PipePair::id);
        if let Some(tracked) = self.tracked_pipe
            && next != Some(tracked)
            && self.live_count() > 0
        {
            self.stats.increment_score();
            debug!(id = %tracked, score = self.stats.score(), "pipe scored");
        }
        self.tracked_pipe = next;
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Changes the scroll speed by `delta`, clamped; returns the applied speed.
    pub fn adjust_scroll_speed(&mut self, delta: f32) -> f32 {
        self.params.adjust_scroll_speed(delta)
    }

    pub fn set_scroll_speed(&mut self, speed: f32) -> Result<(), ConfigError> {
        self.params.set_scroll_speed(speed)
    }

    #[must_use]
    pub fn pilot_kind(&self) -> PilotKind {
        self.pilot.kind()
    }

    #[must_use]
    pub fn population(&self) -> usize {
        population_for(self.pilot.kind(), &self.config)
    }

    /// All birds of the run, dead ones included, in index order.
    #[must_use]
    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.birds.iter().filter(|bird| bird.is_alive()).count()
    }

    #[must_use]
    pub fn pipes(&self) -> &PipeStream {
        &self.pipes
    }

    /// The pipe pair birds currently sense and collide with.
    #[must_use]
    pub fn next_pipe(&self) -> Option<&PipePair> {
        self.pipes.next_unpassed()
    }

    #[must_use]
    pub fn ground_rect(&self) -> Rect {
        self.config.ground_rect()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.stats.frames()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    /// Game time of the current run, from the frame count and the frame rate.
    #[must_use]
    pub fn duration(&self) -> Duration {
        const NANOS_PER_SEC: u64 = 1_000_000_000;
        let fps = u64::from(self.config.fps);
        let frames = self.stats.frames();
        let secs = frames / fps;
        let nanos = (frames % fps) * NANOS_PER_SEC / fps;
        Duration::from_secs(secs) + Duration::from_nanos(nanos)
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver,
        };
    }
}

fn population_for(kind: PilotKind, config: &GameConfig) -> usize {
    match kind {
        PilotKind::Human => 1,
        PilotKind::Autonomous => config.population,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashSet, rc::Rc};

    use rand::Rng as _;

    use super::*;
    use crate::HumanPilot;

    #[derive(Debug)]
    struct NeverJump;

    impl Pilot for NeverJump {
        fn kind(&self) -> PilotKind {
            PilotKind::Autonomous
        }

        fn prepare(&mut self, _population: usize, _rng: &mut GameRng) {}

        fn decide(
            &mut self,
            _index: usize,
            _vision: Option<&Vision>,
            _input: FrameInput,
            _rng: &mut GameRng,
        ) -> bool {
            false
        }
    }

    #[derive(Debug)]
    struct CoinPilot;

    impl Pilot for CoinPilot {
        fn kind(&self) -> PilotKind {
            PilotKind::Autonomous
        }

        fn prepare(&mut self, _population: usize, _rng: &mut GameRng) {}

        fn decide(
            &mut self,
            _index: usize,
            _vision: Option<&Vision>,
            _input: FrameInput,
            rng: &mut GameRng,
        ) -> bool {
            rng.random_bool(0.1)
        }
    }

    /// Keeps each bird's center around y=300 while a gap top at 100 is in sight.
    #[derive(Debug)]
    struct HoverPilot;

    impl Pilot for HoverPilot {
        fn kind(&self) -> PilotKind {
            PilotKind::Autonomous
        }

        fn prepare(&mut self, _population: usize, _rng: &mut GameRng) {}

        fn decide(
            &mut self,
            _index: usize,
            vision: Option<&Vision>,
            _input: FrameInput,
            _rng: &mut GameRng,
        ) -> bool {
            vision.is_some_and(|vision| vision.gap_top_distance() > 200.0 / 550.0)
        }
    }

    #[derive(Debug, Default)]
    struct Calls {
        prepared: Vec<usize>,
        decided: Vec<(usize, bool)>,
    }

    #[derive(Debug)]
    struct RecordingPilot(Rc<RefCell<Calls>>);

    impl Pilot for RecordingPilot {
        fn kind(&self) -> PilotKind {
            PilotKind::Autonomous
        }

        fn prepare(&mut self, population: usize, _rng: &mut GameRng) {
            self.0.borrow_mut().prepared.push(population);
        }

        fn decide(
            &mut self,
            index: usize,
            vision: Option<&Vision>,
            _input: FrameInput,
            _rng: &mut GameRng,
        ) -> bool {
            self.0.borrow_mut().decided.push((index, vision.is_some()));
            false
        }
    }

    fn population_config(population: usize) -> GameConfig {
        GameConfig {
            population,
            ..GameConfig::default()
        }
    }

    /// A gap fixed at 100..450 that a hovering human bird never leaves.
    fn wide_gap_config() -> GameConfig {
        GameConfig {
            gap_height: 350.0,
            ..GameConfig::default()
        }
    }

    fn hover_input(session: &GameSession) -> FrameInput {
        let bird = &session.birds()[0];
        FrameInput {
            jump: bird.center_y(session.config()) > 300.0,
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig {
            gap_height: 1000.0,
            ..GameConfig::default()
        };
        let result = GameSession::new(config, Box::new(HumanPilot), GameSeed::from_u64(23));
        assert!(matches!(result, Err(ConfigError::NoGapRange { .. })));
    }

    #[test]
    fn test_starts_with_one_primed_pipe() {
        let session = GameSession::new(
            GameConfig::default(),
            Box::new(HumanPilot),
            GameSeed::from_u64(23),
        )
        .unwrap();
        assert_eq!(session.pipes().len(), 1);
        let pipe = session.next_pipe().unwrap();
        assert!((pipe.x() - session.config().screen_width).abs() < f32::EPSILON);
        assert_eq!(session.stats().score(), 0);
        assert!(session.state().is_playing());
    }

    mod modes {
        use super::*;

        #[test]
        fn test_human_flies_a_single_bird() {
            let config = GameConfig::default();
            let session =
                GameSession::new(config.clone(), Box::new(HumanPilot), GameSeed::from_u64(1))
                    .unwrap();
            assert_eq!(session.birds().len(), 1);
            let bird = &session.birds()[0];
            assert!((bird.y() - config.human_start_y()).abs() < f32::EPSILON);
            assert_eq!(bird.color(), config.bird_color);
        }

        #[test]
        fn test_autonomous_birds_start_in_spawn_band() {
            let config = population_config(50);
            let session =
                GameSession::new(config.clone(), Box::new(NeverJump), GameSeed::from_u64(1))
                    .unwrap();
            assert_eq!(session.birds().len(), 50);
            let [min, max] = config.spawn_band;
            for bird in session.birds() {
                assert!(bird.y() >= min && bird.y() <= max);
                assert!(bird.is_alive());
            }
        }

        #[test]
        fn test_human_jump_rearms_immediately() {
            let mut session = GameSession::new(
                GameConfig::default(),
                Box::new(HumanPilot),
                GameSeed::from_u64(1),
            )
            .unwrap();
            session.step(FrameInput { jump: true });
            let bird = &session.birds()[0];
            assert!(bird.velocity() < 0.0);
            assert!(!bird.is_jump_locked());
        }

        #[test]
        fn test_pilot_sees_next_pipe_in_index_order() {
            let calls = Rc::new(RefCell::new(Calls::default()));
            let mut session = GameSession::new(
                population_config(3),
                Box::new(RecordingPilot(Rc::clone(&calls))),
                GameSeed::from_u64(1),
            )
            .unwrap();
            session.step(FrameInput::default());

            let calls = calls.borrow();
            assert_eq!(calls.prepared, vec![3]);
            assert_eq!(calls.decided, vec![(0, true), (1, true), (2, true)]);
        }
    }

    mod scoring {
        use super::*;

        #[test]
        fn test_each_passed_pipe_scores_once() {
            let mut session = GameSession::new(
                wide_gap_config(),
                Box::new(HumanPilot),
                GameSeed::from_u64(23),
            )
            .unwrap();

            let mut passed = HashSet::new();
            for _ in 0..3000 {
                let before = session.stats().score();
                session.step(hover_input(&session));
                let after = session.stats().score();
                assert!(after == before || after == before + 1);

                passed.extend(session.pipes().iter().filter(|p| p.is_passed()).map(PipePair::id));
                assert_eq!(after, passed.len());
            }
            assert!(!session.is_game_over());
            assert!(session.stats().score() > 10);
        }

        #[test]
        fn test_no_score_while_next_pipe_is_unchanged() {
            let mut session = GameSession::new(
                wide_gap_config(),
                Box::new(HumanPilot),
                GameSeed::from_u64(23),
            )
            .unwrap();

            // the primed pipe needs (800 + 70 - 100) / 5 = 154 frames to pass
            for _ in 0..153 {
                session.step(hover_input(&session));
                assert_eq!(session.stats().score(), 0);
            }
            session.step(hover_input(&session));
            assert_eq!(session.stats().score(), 1);
            for _ in 0..20 {
                session.step(hover_input(&session));
                assert_eq!(session.stats().score(), 1);
            }
        }

        #[test]
        fn test_population_scores_once_per_pipe() {
            let config = GameConfig {
                population: 10,
                ..wide_gap_config()
            };
            let mut session =
                GameSession::new(config, Box::new(HoverPilot), GameSeed::from_u64(23)).unwrap();

            let mut passed = HashSet::new();
            for _ in 0..400 {
                let before = session.stats().score();
                session.step(FrameInput::default());
                let after = session.stats().score();
                assert!(after == before || after == before + 1);
                assert_eq!(session.live_count(), 10);

                passed.extend(session.pipes().iter().filter(|p| p.is_passed()).map(PipePair::id));
                assert_eq!(after, passed.len());
            }
            assert!(session.stats().score() > 2);
        }

        #[test]
        fn test_no_score_when_last_bird_dies_on_passing_frame() {
            let config = GameConfig {
                population: 1,
                ..wide_gap_config()
            };
            let mut session =
                GameSession::new(config, Box::new(HoverPilot), GameSeed::from_u64(23)).unwrap();
            let primed = session.next_pipe().map(PipePair::id);

            for _ in 0..153 {
                session.step(FrameInput::default());
            }
            assert_eq!(session.live_count(), 1);
            assert_eq!(session.next_pipe().map(PipePair::id), primed);

            // sinks into the ground on the frame the primed pipe is passed
            session.birds[0].reset(540.0);
            session.step(FrameInput::default());

            assert!(session.pipes().iter().next().unwrap().is_passed());
            assert!(session.is_game_over());
            assert_eq!(session.stats().score(), 0);
        }
    }

    mod collision {
        use super::*;

        #[test]
        fn test_zero_height_barrier_is_harmless() {
            let config = GameConfig {
                min_barrier: 0.0,
                gap_height: 550.0,
                ..GameConfig::default()
            };
            let mut session =
                GameSession::new(config, Box::new(HumanPilot), GameSeed::from_u64(23)).unwrap();
            let pipe = session.next_pipe().unwrap();
            assert!(pipe.gap_top_y().abs() < f32::EPSILON);
            assert!(!pipe.top_rect(session.config()).has_area());

            let mut straddled = false;
            for _ in 0..300 {
                let jump = session.birds()[0].y() > 0.0;
                session.step(FrameInput { jump });

                let hitbox = session.birds()[0].hitbox(session.config());
                if let Some(pipe) = session.next_pipe() {
                    let top = pipe.top_rect(session.config());
                    straddled |= hitbox.left() < top.right()
                        && top.left() < hitbox.right()
                        && hitbox.top() < 0.0
                        && hitbox.bottom() > 0.0;
                }
                assert!(session.birds()[0].is_alive());
            }
            assert!(straddled);
            assert!(session.stats().score() > 0);
        }
    }

    mod termination {
        use super::*;

        #[test]
        fn test_game_over_only_on_extinction() {
            let config = GameConfig {
                spawn_band: [0.0, 400.0],
                ..population_config(10)
            };
            let mut session =
                GameSession::new(config, Box::new(NeverJump), GameSeed::from_u64(7)).unwrap();

            let mut saw_partial = false;
            while !session.is_game_over() {
                session.step(FrameInput::default());
                let live = session.live_count();
                assert_eq!(session.is_game_over(), live == 0);
                saw_partial |= live > 0 && live < 10;
                assert!(session.frames() < 1000);
            }
            assert!(saw_partial);
            for index in 0..10 {
                assert!(session.stats().death_frame(index).is_some());
            }
            assert_eq!(session.stats().best_survival(), session.frames());
        }

        #[test]
        fn test_dead_birds_keep_their_slot() {
            let mut session = GameSession::new(
                population_config(5),
                Box::new(NeverJump),
                GameSeed::from_u64(3),
            )
            .unwrap();
            while !session.is_game_over() {
                session.step(FrameInput::default());
            }
            assert_eq!(session.birds().len(), 5);
            assert!(session.birds().iter().all(|bird| !bird.is_alive()));

            let frames = session.frames();
            session.step(FrameInput::default());
            assert_eq!(session.frames(), frames);
        }

        #[test]
        fn test_reset_starts_next_generation() {
            let mut session = GameSession::new(
                population_config(5),
                Box::new(NeverJump),
                GameSeed::from_u64(3),
            )
            .unwrap();
            session.adjust_scroll_speed(2.0);
            while !session.is_game_over() {
                session.step(FrameInput::default());
            }

            session.reset();
            assert!(session.state().is_playing());
            assert_eq!(session.stats().generation(), 2);
            assert_eq!(session.frames(), 0);
            assert_eq!(session.live_count(), 5);
            let [min, max] = session.config().spawn_band;
            for bird in session.birds() {
                assert!(bird.y() >= min && bird.y() <= max);
                assert!(bird.velocity().abs() < f32::EPSILON);
                assert!(!bird.is_jump_locked());
            }
            assert_eq!(session.pipes().len(), 1);
            assert!((session.params().scroll_speed() - 7.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let seed = GameSeed::from_u64(42);
        let mut a = GameSession::new(population_config(20), Box::new(CoinPilot), seed).unwrap();
        let mut b = GameSession::new(population_config(20), Box::new(CoinPilot), seed).unwrap();

        while !a.is_game_over() {
            a.step(FrameInput::default());
            b.step(FrameInput::default());
            assert_eq!(a.birds(), b.birds());
            let gaps_a: Vec<_> = a.pipes().iter().map(PipePair::gap_top_y).collect();
            let gaps_b: Vec<_> = b.pipes().iter().map(PipePair::gap_top_y).collect();
            assert_eq!(gaps_a, gaps_b);
        }
        assert!(b.is_game_over());
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn test_pause_freezes_the_game() {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(HumanPilot),
            GameSeed::from_u64(1),
        )
        .unwrap();
        session.step(FrameInput::default());
        session.toggle_pause();
        let bird = session.birds()[0].clone();
        for _ in 0..10 {
            session.step(FrameInput { jump: true });
        }
        assert_eq!(session.frames(), 1);
        assert_eq!(session.birds()[0], bird);

        session.toggle_pause();
        session.step(FrameInput::default());
        assert_eq!(session.frames(), 2);
    }

    #[test]
    fn test_pause_has_no_effect_after_game_over() {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(HumanPilot),
            GameSeed::from_u64(1),
        )
        .unwrap();
        while !session.is_game_over() {
            session.step(FrameInput::default());
        }
        session.toggle_pause();
        assert!(session.state().is_game_over());
    }

    #[test]
    fn test_scroll_speed_is_clamped() {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(HumanPilot),
            GameSeed::from_u64(1),
        )
        .unwrap();
        let limit = session.params().speed_limit();
        assert!((session.adjust_scroll_speed(1000.0) - (limit - 1.0)).abs() < f32::EPSILON);
        assert!((session.adjust_scroll_speed(-1000.0) - 1.0).abs() < f32::EPSILON);
        assert!(session.set_scroll_speed(limit).is_err());
    }

    #[test]
    fn test_duration_follows_fps() {
        let config = GameConfig {
            fps: 30,
            ..wide_gap_config()
        };
        let mut session =
            GameSession::new(config, Box::new(HumanPilot), GameSeed::from_u64(1)).unwrap();
        for _ in 0..45 {
            session.step(hover_input(&session));
        }
        assert_eq!(session.duration(), Duration::from_millis(1500));
    }
}
