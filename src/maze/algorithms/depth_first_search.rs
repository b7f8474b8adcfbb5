use log::{debug, trace};
use rand::seq::SliceRandom;

use super::{Maze, MazeAlgorithm, Random};
use crate::core::*;

/// Randomized depth-first carving, also known as recursive backtracker.
///
/// Produces a perfect maze, every two cells are connected by exactly one path.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn generate(&self, maze: &mut Maze, rng: &mut Random) -> Result<()> {
        if !maze.is_untouched() {
            return Err(MazeError::AlreadyGenerated);
        }

        let cell_count = maze.cell_count();
        let mut stack: Vec<Dims> = Vec::with_capacity(cell_count);

        let mut current = maze.start();
        let mut visited = 1;
        while visited < cell_count {
            let unvisited_neighbors = maze.neighbors_for_generation(current)?;

            let Some(&(wall, chosen)) = unvisited_neighbors.choose(rng) else {
                // Fully walled input keeps every unvisited cell connected to the stack
                match stack.pop() {
                    Some(prev) => current = prev,
                    None => break,
                }
                continue;
            };

            trace!("carving {} -> {}", current, chosen);
            maze.remove_wall(current, wall)?;
            stack.push(current);
            current = chosen;
            visited += 1;
        }

        debug!(
            "generated {}x{} maze, visited {}/{} cells",
            maze.width(),
            maze.height(),
            visited,
            cell_count
        );

        Ok(())
    }
}
