mod backtracking;
mod dead_end;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CellState, Maze};
use crate::core::*;

pub use backtracking::Backtracking;
pub use dead_end::DeadEndFilling;

/// Finds the path from [`Maze::start`] to [`Maze::end`], marking cell states on the way.
pub trait MazeSolver: fmt::Debug {
    fn solve(&self, maze: &mut Maze, record_trace: bool) -> Result<Solution>;
}

/// One state change made by a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub pos: Dims,
    pub state: CellState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<Dims>,
    trace: Option<Vec<TraceStep>>,
}

impl Solution {
    /// Coordinates from start to end, both included.
    pub fn path(&self) -> &[Dims] {
        &self.path
    }

    /// Every state change in the order it happened, if it was recorded.
    pub fn trace(&self) -> Option<&[TraceStep]> {
        self.trace.as_deref()
    }
}

/// Sets cell states and optionally remembers them.
#[derive(Debug)]
pub(crate) struct Tracer {
    steps: Option<Vec<TraceStep>>,
}

impl Tracer {
    pub fn new(record: bool) -> Self {
        Self {
            steps: record.then(Vec::new),
        }
    }

    pub fn mark(&mut self, maze: &mut Maze, pos: Dims, state: CellState) -> Result<()> {
        maze.get_mut(pos)?.set_state(state);
        if let Some(steps) = &mut self.steps {
            steps.push(TraceStep { pos, state });
        }
        Ok(())
    }

    pub fn finish(self, path: Vec<Dims>) -> Solution {
        Solution {
            path,
            trace: self.steps,
        }
    }
}

/// Depth-first walk from start to end.
///
/// Advances to the first neighbor in solving order, marking the cell it leaves as crossed.
/// A cell without neighbors is marked wrong and dropped from the path.
pub(crate) fn backtrack(maze: &mut Maze, tracer: &mut Tracer) -> Result<Vec<Dims>> {
    let (start, end) = (maze.start(), maze.end());

    let mut stack: Vec<Dims> = Vec::new();
    let mut path = vec![start];
    let mut current = start;
    while current != end {
        match maze.neighbors_for_solving(current)?.first() {
            Some(&(_, next)) => {
                tracer.mark(maze, current, CellState::Crossed)?;
                stack.push(current);
                path.push(next);
                current = next;
            }
            None => {
                tracer.mark(maze, current, CellState::Wrong)?;
                current = stack.pop().ok_or(MazeError::Unsolvable)?;
                path.pop();
            }
        }
    }

    Ok(path)
}
