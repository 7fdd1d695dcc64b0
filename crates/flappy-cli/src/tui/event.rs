use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub(super) enum TuiEvent {
    /// Time for the next game frame.
    Tick,
    /// Something changed since the last draw.
    Render,
    /// A key press.
    Key(KeyEvent),
}
