//! Frame-stepped terminal runtime: an [`App`] is ticked at a fixed rate and
//! redrawn after every change.

mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};
