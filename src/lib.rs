//! Core library for a fixed-size Conway's Game of Life grid.

pub mod engine;
pub mod game;
pub mod pos;

pub use engine::{Cell, Grid, GridWindow};
pub use game::Game;
pub use pos::Pos2;
