mod depth_first_search;

use std::fmt;

use super::Maze;
use crate::core::Result;

pub use depth_first_search::DepthFirstSearch;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a maze that has every wall up.
pub trait MazeAlgorithm: fmt::Debug {
    /// Fails with `AlreadyGenerated` if any wall of `maze` was removed before.
    fn generate(&self, maze: &mut Maze, rng: &mut Random) -> Result<()>;
}
