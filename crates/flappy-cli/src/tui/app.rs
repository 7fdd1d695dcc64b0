use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::tui::Tui;

/// Application driven by [`Tui::run`].
pub trait App {
    /// Called once before the first event. Configure the tick rate here.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    /// Handles a key press. Releases and repeats are filtered out.
    fn handle_key(&mut self, tui: &mut Tui, key: KeyEvent);

    /// Advances the application by one tick.
    fn update(&mut self, tui: &mut Tui);

    fn draw(&self, frame: &mut Frame);
}
