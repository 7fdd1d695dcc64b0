use crossterm::event::{KeyCode, KeyEvent};
use flappy_engine::{FrameInput, GameSession, SessionState};

use crate::ui::SessionDisplay;

/// Frames stepped per tick in turbo mode.
const TURBO_FRAMES: usize = 20;

#[derive(Debug)]
pub struct AutoPlayScreen {
    session: GameSession,
    best_score: usize,
    turbo: bool,
    restart: bool,
    is_exiting: bool,
}

impl AutoPlayScreen {
    pub fn new(session: GameSession, turbo: bool, restart: bool) -> Self {
        Self {
            session,
            best_score: 0,
            turbo,
            restart,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn display(&self) -> SessionDisplay<'_> {
        SessionDisplay::new(&self.session)
            .best_score(self.best_score)
            .turbo(self.turbo)
    }

    pub fn help_text(&self) -> String {
        let turbo = if self.turbo { "ON" } else { "OFF" };
        let restart = if self.restart { "ON" } else { "OFF" };
        match self.session.state() {
            SessionState::Playing => format!(
                "Controls: +/- (Speed) | T (Turbo: {turbo}) | A (Auto Restart: {restart}) | R (Restart) | P (Pause) | Q (Quit)"
            ),
            SessionState::Paused => "Controls: P (Resume) | Q (Quit)".to_owned(),
            SessionState::GameOver => "Controls: R (Restart) | Q (Quit)".to_owned(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let state = self.session.state();
        let is_playing = !self.is_exiting && state.is_playing();
        let can_toggle_pause = is_playing || state.is_paused();

        match key.code {
            KeyCode::Char('+' | '=') if is_playing => {
                self.session.adjust_scroll_speed(1.0);
            }
            KeyCode::Char('-') if is_playing => {
                self.session.adjust_scroll_speed(-1.0);
            }
            KeyCode::Char('t') if is_playing => self.turbo = !self.turbo,
            KeyCode::Char('a') => self.restart = !self.restart,
            KeyCode::Char('p') if can_toggle_pause => self.session.toggle_pause(),
            KeyCode::Char('r') if !state.is_paused() => self.session.reset(),
            KeyCode::Char('q') => self.is_exiting = true,
            _ => {}
        }
    }

    /// Steps one frame, or a batch of frames in turbo mode.
    pub fn update(&mut self) {
        let frames = if self.turbo { TURBO_FRAMES } else { 1 };
        for _ in 0..frames {
            if !self.session.state().is_playing() {
                break;
            }
            self.session.step(FrameInput::default());
            self.best_score = self.best_score.max(self.session.stats().score());
            if self.session.is_game_over() && self.restart {
                self.session.reset();
            }
        }
    }
}
