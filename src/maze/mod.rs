pub mod maze;
pub use maze::Maze;
pub mod cell;
pub use cell::{Cell, CellState, CellWall};
pub mod ser;

pub mod algorithms;
pub mod solvers;
