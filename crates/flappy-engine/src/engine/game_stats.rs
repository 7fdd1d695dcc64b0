/// Statistics of the current run and the run counter.
///
/// - **Score**: pipe pairs passed, counted once per pair for the whole run
/// - **Frames**: frames stepped since the run started
/// - **Generation**: run number, starting at 1 and bumped by every reset
/// - **Survival**: per bird, the frame of death (or `None` while alive)
///
/// # Example
///
/// ```
/// use flappy_engine::GameStats;
///
/// let mut stats = GameStats::new(3);
/// stats.increment_frame();
/// stats.record_death(1);
/// stats.increment_frame();
/// stats.increment_score();
///
/// assert_eq!(stats.score(), 1);
/// assert_eq!(stats.survival(1), 1);
/// assert_eq!(stats.survival(0), 2);
/// assert_eq!(stats.best_survival(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    frames: u64,
    generation: u32,
    death_frames: Vec<Option<u64>>,
}

impl GameStats {
    /// Creates statistics for the first run of `population` birds.
    #[must_use]
    pub fn new(population: usize) -> Self {
        Self {
            score: 0,
            frames: 0,
            generation: 1,
            death_frames: vec![None; population],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Returns the frame at which bird `index` died, if it has.
    #[must_use]
    pub fn death_frame(&self, index: usize) -> Option<u64> {
        self.death_frames.get(index).copied().flatten()
    }

    /// Returns how many frames bird `index` has been alive in this run.
    #[must_use]
    pub fn survival(&self, index: usize) -> u64 {
        self.death_frame(index).unwrap_or(self.frames)
    }

    /// Returns the longest survival among all birds of this run.
    #[must_use]
    pub fn best_survival(&self) -> u64 {
        (0..self.death_frames.len())
            .map(|index| self.survival(index))
            .max()
            .unwrap_or(0)
    }

    pub const fn increment_score(&mut self) {
        self.score += 1;
    }

    pub const fn increment_frame(&mut self) {
        self.frames += 1;
    }

    /// Records the death of bird `index` at the current frame.
    ///
    /// A bird's first recorded death is kept.
    pub fn record_death(&mut self, index: usize) {
        if let Some(slot) = self.death_frames.get_mut(index) {
            slot.get_or_insert(self.frames);
        }
    }

    /// Clears the run statistics for a new run and bumps the generation.
    pub fn start_next_run(&mut self, population: usize) {
        self.score = 0;
        self.frames = 0;
        self.generation += 1;
        self.death_frames.clear();
        self.death_frames.resize(population, None);
    }
}
