use std::mem;

use crossterm::event::{KeyCode, KeyEvent};
use flappy_engine::{FrameInput, GameSession, SessionState};

use crate::ui::SessionDisplay;

#[derive(Debug)]
pub struct ManualPlayScreen {
    session: GameSession,
    best_score: usize,
    jump_requested: bool,
    is_exiting: bool,
}

impl ManualPlayScreen {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            best_score: 0,
            jump_requested: false,
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
        SessionDisplay::new(&self.session).best_score(self.best_score)
    }

    pub fn help_text(&self) -> String {
        match self.session.state() {
            SessionState::Playing => "Controls: ↑/Space/K (Jump) | P (Pause) | Q (Quit)",
            SessionState::Paused => "Controls: P (Resume) | Q (Quit)",
            SessionState::GameOver => "Controls: R (Restart) | Q (Quit)",
        }
        .to_owned()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let state = self.session.state();
        let is_playing = !self.is_exiting && state.is_playing();
        let can_toggle_pause = is_playing || state.is_paused();

        match key.code {
            KeyCode::Up | KeyCode::Char(' ' | 'k') if is_playing => self.jump_requested = true,
            KeyCode::Char('p') if can_toggle_pause => self.session.toggle_pause(),
            KeyCode::Char('r') if state.is_game_over() => self.session.reset(),
            KeyCode::Char('q') => self.is_exiting = true,
            _ => {}
        }
    }

    /// Steps one frame with the jump requested since the previous one.
    pub fn update(&mut self) {
        if !self.session.state().is_playing() {
            return;
        }
        let jump = mem::take(&mut self.jump_requested);
        self.session.step(FrameInput { jump });
        self.best_score = self.best_score.max(self.session.stats().score());
    }
}
