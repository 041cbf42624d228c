//! Text rendering for gridpath searches.
//!
//! [`render`] turns any [`SearchAlgorithm`](gridpath_search::SearchAlgorithm)
//! into a boxed text picture of its board: obstacles, start and goal, and
//! either the per-node display values or the solution path. The
//! [`clear_screen`], [`print`] and [`wait_for_enter`] helpers drive a
//! terminal through crossterm.

mod console;
mod glyph;
mod render;

pub use console::{clear_screen, print, wait_for_enter};
pub use glyph::{Charset, Glyph};
pub use render::{CELL, RenderOptions, render};
