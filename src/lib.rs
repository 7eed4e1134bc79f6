//! **mazes** grows a perfect maze one recursive backtracker step at a time and
//! projects each intermediate state onto a pixel canvas as draw commands.

pub mod canvas;
pub mod cells;
pub mod config;
pub mod driver;
pub mod errors;
pub mod generators;
pub mod grid;
mod grid_displays;
pub mod passages;
pub mod renderers;
#[cfg(feature = "sdl")]
pub mod sdl;
pub mod state;
pub mod units;
