use log::debug;

use super::{backtrack, Maze, MazeSolver, Solution, Tracer};
use crate::{core::*, maze::CellState};

/// Depth-first search that marks dead ends as it backs out of them.
///
/// Ties are broken by the fixed order bottom, right, top, left, so the same maze always
/// gives the same path.
#[derive(Debug, Default, Clone, Copy)]
pub struct Backtracking;

impl MazeSolver for Backtracking {
    fn solve(&self, maze: &mut Maze, record_trace: bool) -> Result<Solution> {
        let mut tracer = Tracer::new(record_trace);
        let end = maze.end();
        tracer.mark(maze, end, CellState::Finish)?;

        let path = backtrack(maze, &mut tracer)?;
        debug!("backtracking found path of {} cells", path.len());

        Ok(tracer.finish(path))
    }
}
