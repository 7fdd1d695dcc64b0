//! Core value types of the playfield.
//!
//! These types hold the per-entity state and expose geometry as derived
//! accessors; they do not know about frame ordering or scoring:
//!
//! - [`Rect`] - Axis-aligned rectangle with strict-overlap collision
//! - [`Bird`] - Agent physics (position, velocity, jump lock, death flag)
//! - [`PipePair`] - Two barriers with a fixed gap, scrolling left
//!
//! Screen coordinates grow rightwards and downwards, with the origin at the
//! top-left corner of the playfield.

pub use self::{bird::*, pipe::*, rect::*};

mod bird;
mod pipe;
mod rect;
