use log::{debug, trace};

use super::{backtrack, Maze, MazeSolver, Solution, Tracer};
use crate::{core::*, maze::CellState};

/// Dead-end filling.
///
/// Every cell, except start and end, with at most one way out is marked wrong, and so
/// are the cells that become dead ends because of it. On a perfect maze only the path
/// stays unmarked, the remaining walk is done by [`backtrack`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DeadEndFilling;

impl MazeSolver for DeadEndFilling {
    fn solve(&self, maze: &mut Maze, record_trace: bool) -> Result<Solution> {
        let mut tracer = Tracer::new(record_trace);
        let (start, end) = (maze.start(), maze.end());
        tracer.mark(maze, end, CellState::Finish)?;

        let mut filled = 0;
        let mut work: Vec<Dims> = maze.get_cells().iter_pos().collect();
        while let Some(pos) = work.pop() {
            if pos == start || pos == end || maze.state(pos)? != CellState::Blank {
                continue;
            }

            let ways = maze.neighbors_for_solving(pos)?;
            if ways.len() <= 1 {
                trace!("filling dead end {}", pos);
                tracer.mark(maze, pos, CellState::Wrong)?;
                work.extend(ways.into_iter().map(|(_, next)| next));
                filled += 1;
            }
        }
        debug!("filled {} dead ends", filled);

        let path = backtrack(maze, &mut tracer)?;
        Ok(tracer.finish(path))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::maze::{
        algorithms::{DepthFirstSearch, MazeAlgorithm as _, Random},
        solvers::Backtracking,
        CellWall,
    };

    #[test]
    fn matches_backtracking_on_perfect_mazes() {
        for seed in 0..10 {
            let mut maze = Maze::new(11, 7).unwrap();
            DepthFirstSearch
                .generate(&mut maze, &mut Random::seed_from_u64(seed))
                .unwrap();
            let mut other = maze.clone();

            let filled = DeadEndFilling.solve(&mut maze, false).unwrap();
            let walked = Backtracking.solve(&mut other, false).unwrap();
            assert_eq!(filled.path(), walked.path(), "seed {}", seed);
        }
    }

    #[test]
    fn only_path_stays_unmarked() {
        let mut maze = Maze::new(8, 8).unwrap();
        DepthFirstSearch
            .generate(&mut maze, &mut Random::seed_from_u64(5))
            .unwrap();

        let solution = DeadEndFilling.solve(&mut maze, true).unwrap();
        let path = solution.path().to_vec();
        for cell in maze.get_cells().iter() {
            let on_path = path.contains(&cell.get_coord());
            assert_eq!(cell.state() != CellState::Wrong, on_path, "{}", cell.get_coord());
        }

        // Filling happens before the walk, so no dead end is hit while walking
        let trace = solution.trace().unwrap();
        let first_crossed = trace
            .iter()
            .position(|step| step.state == CellState::Crossed)
            .unwrap();
        assert!(trace[first_crossed..]
            .iter()
            .all(|step| step.state == CellState::Crossed));
    }

    #[test]
    fn handles_loops() {
        // Open 3x3 room, no dead ends at all
        let mut maze = Maze::new(3, 3).unwrap();
        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            for wall in [CellWall::Right, CellWall::Bottom] {
                let _ = maze.remove_wall(pos, wall);
            }
        }

        let solution = DeadEndFilling.solve(&mut maze, false).unwrap();
        assert_eq!(solution.path().first(), Some(&Dims(0, 0)));
        assert_eq!(solution.path().last(), Some(&Dims(2, 2)));
    }

    #[test]
    fn walled_off_end() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_wall(Dims(0, 0), CellWall::Right).unwrap();
        maze.remove_wall(Dims(0, 0), CellWall::Bottom).unwrap();

        assert_eq!(DeadEndFilling.solve(&mut maze, false), Err(MazeError::Unsolvable));
    }
}
