use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::{
    command::play::screens::Screen,
    tui::{App, Tui},
};

#[derive(Debug)]
pub struct PlayApp {
    screen: Screen,
}

impl PlayApp {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(f64::from(self.screen.fps()));
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_key(&mut self, _tui: &mut Tui, key: KeyEvent) {
        self.screen.handle_key(key);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.screen.update();
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
