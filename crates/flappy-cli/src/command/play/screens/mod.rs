use crossterm::event::KeyEvent;
use flappy_engine::GameSession;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
};

use crate::{
    command::play::screens::{auto::AutoPlayScreen, manual::ManualPlayScreen},
    ui::{SessionDisplay, style},
};

mod auto;
mod manual;

#[derive(Debug)]
pub enum Screen {
    Manual(ManualPlayScreen),
    Auto(AutoPlayScreen),
}

impl Screen {
    pub fn manual(session: GameSession) -> Self {
        Screen::Manual(ManualPlayScreen::new(session))
    }

    pub fn auto(session: GameSession, turbo: bool, restart: bool) -> Self {
        Screen::Auto(AutoPlayScreen::new(session, turbo, restart))
    }

    fn session(&self) -> &GameSession {
        match self {
            Screen::Manual(screen) => screen.session(),
            Screen::Auto(screen) => screen.session(),
        }
    }

    pub fn fps(&self) -> u32 {
        self.session().config().fps
    }

    pub fn is_exiting(&self) -> bool {
        match self {
            Screen::Manual(screen) => screen.is_exiting(),
            Screen::Auto(screen) => screen.is_exiting(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self {
            Screen::Manual(screen) => screen.handle_key(key),
            Screen::Auto(screen) => screen.handle_key(key),
        }
    }

    pub fn update(&mut self) {
        match self {
            Screen::Manual(screen) => screen.update(),
            Screen::Auto(screen) => screen.update(),
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let (display, help_text) = match self {
            Screen::Manual(screen) => (screen.display(), screen.help_text()),
            Screen::Auto(screen) => (screen.display(), screen.help_text()),
        };
        let help_text = Text::from(help_text).style(style::HELP).centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
