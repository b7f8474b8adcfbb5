//! Perfect maze generation and solving on rectangular grids.
//!
//! ```
//! use rampart::maze::Maze;
//!
//! let mut maze = Maze::generate(8, 5, Some(42)).unwrap();
//! maze.solve().unwrap();
//!
//! let path = maze.path().unwrap();
//! assert_eq!(path.first(), Some(&maze.start()));
//! assert_eq!(path.last(), Some(&maze.end()));
//! ```

pub mod core;
pub mod maze;
pub mod settings;
