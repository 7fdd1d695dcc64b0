use std::collections::VecDeque;

use rand::Rng;
use tracing::debug;

use crate::{GameConfig, PipeId, PipePair};

/// Ordered queue of pipe pairs, oldest (leftmost) first.
///
/// New pairs are appended at the tail at the right screen edge, every pair
/// scrolls by the same amount each frame, and only the head is ever removed.
/// The queue therefore stays sorted by `x` without any reordering.
///
/// # Spawn schedule
///
/// A countdown starts at `screen_width + spawn_gap[0]` and drops by the scroll
/// speed every frame. Once it reaches `screen_width`, a pair spawns and the
/// countdown is redrawn as `screen_width + d` with `d` uniform in `spawn_gap`.
#[derive(Debug, Clone)]
pub struct PipeStream {
    pipes: VecDeque<PipePair>,
    spawn_countdown: f32,
    next_id: u64,
}

impl PipeStream {
    /// Creates an empty stream with the countdown at its initial value.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pipes: VecDeque::new(),
            spawn_countdown: config.screen_width + config.spawn_gap[0],
            next_id: 0,
        }
    }

    /// Empties the stream and restarts the countdown and id sequence.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Iterates from the head (leftmost, oldest) to the tail.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PipePair> + '_ {
        self.pipes.iter()
    }

    #[must_use]
    pub fn spawn_countdown(&self) -> f32 {
        self.spawn_countdown
    }

    /// Returns the first pair, head to tail, that no bird has passed yet.
    ///
    /// `None` when the queue is empty or every queued pair is passed; sensing
    /// and pipe collision are skipped for that frame.
    #[must_use]
    pub fn next_unpassed(&self) -> Option<&PipePair> {
        self.pipes.iter().find(|pipe| !pipe.is_passed())
    }

    /// Appends a new pair at the right screen edge.
    pub fn spawn<R>(&mut self, config: &GameConfig, rng: &mut R) -> PipeId
    where
        R: Rng + ?Sized,
    {
        let id = PipeId::new(self.next_id);
        self.next_id += 1;
        let pipe = PipePair::spawn(id, config, rng);
        debug!(
            %id,
            gap_top = pipe.gap_top_y(),
            gap_bottom = pipe.gap_bottom_y(),
            "pipe spawned"
        );
        self.pipes.push_back(pipe);
        id
    }

    /// Runs the per-frame pipe update.
    ///
    /// 1. Counts down and spawns when due (redrawing the next distance)
    /// 2. Scrolls every pair by `speed`
    /// 3. Marks pairs passed relative to the birds' shared x position
    /// 4. Retires the head if it has left the screen
    pub fn advance<R>(&mut self, config: &GameConfig, speed: f32, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.spawn_countdown -= speed;
        if self.spawn_countdown <= config.screen_width {
            self.spawn(config, rng);
            let [min, max] = config.spawn_gap;
            self.spawn_countdown = config.screen_width + rng.random_range(min..=max);
        }

        for pipe in &mut self.pipes {
            pipe.advance(speed);
            if pipe.mark_passed_if(config.bird_x, config) {
                debug!(id = %pipe.id(), "pipe passed");
            }
        }

        if self
            .pipes
            .front()
            .is_some_and(|pipe| pipe.is_off_screen(config))
            && let Some(pipe) = self.pipes.pop_front()
        {
            debug!(id = %pipe.id(), "pipe retired");
        }
    }
}
