//! Conway's Game of Life on a wrapping grid, independent of any window.
//!
//! [`Grid`] holds and evolves the cells, [`view`] maps between pixels and
//! cells, and [`Session`] drives both from an external event loop.

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod session;
pub mod view;

pub use config::{Color, Config, Palette};
pub use error::LifeError;
pub use grid::{Dims, Grid, Mode};
pub use session::{Canvas, Control, Fill, InputEvent, Session};
pub use view::{CellRect, ViewConfig};
