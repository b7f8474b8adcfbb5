use log::debug;

use super::algorithms::{DepthFirstSearch, MazeAlgorithm, Random};
use super::cell::{Cell, CellState, CellWall};
use super::solvers::{Backtracking, MazeSolver, Solution};
use crate::core::*;

use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Rectangular grid of cells.
///
/// Start is always the top-left cell and end the bottom-right one. Every wall between two
/// cells is stored in both of them and only [`Maze::remove_wall`] opens it.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) solution: Option<Solution>,
}

impl Maze {
    /// Creates a maze with every wall up.
    pub fn new(width: i32, height: i32) -> Result<Maze> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimensions(width, height));
        }

        Ok(Maze {
            cells: Array2D::from_fn(width as usize, height as usize, Cell::new),
            solution: None,
        })
    }

    /// Creates and carves a perfect maze with [`DepthFirstSearch`].
    ///
    /// Without `seed` a random one is used.
    pub fn generate(width: i32, height: i32, seed: Option<u64>) -> Result<Maze> {
        let mut maze = Maze::new(width, height)?;
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        debug!("generating {}x{} maze with seed {}", width, height, seed);

        let mut rng = Random::seed_from_u64(seed);
        DepthFirstSearch.generate(&mut maze, &mut rng)?;
        Ok(maze)
    }

    pub fn width(&self) -> i32 {
        self.size().0
    }

    pub fn height(&self) -> i32 {
        self.size().1
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn start(&self) -> Dims {
        Dims::ZERO
    }

    pub fn end(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Dims) -> Result<&Cell> {
        self.cells.get(pos).ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Result<&mut Cell> {
        self.cells.get_mut(pos).ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn has_wall(&self, pos: Dims, wall: CellWall) -> Result<bool> {
        Ok(self.get(pos)?.has_wall(wall))
    }

    pub fn state(&self, pos: Dims) -> Result<CellState> {
        Ok(self.get(pos)?.state())
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(CellWall::Right),
            (1, 0) => Some(CellWall::Left),
            (0, -1) => Some(CellWall::Bottom),
            (0, 1) => Some(CellWall::Top),
            _ => None,
        }
    }

    /// Opens the wall on `wall` side of `pos` in both cells sharing it.
    ///
    /// Outer walls have no second cell and cannot be removed.
    pub fn remove_wall(&mut self, pos: Dims, wall: CellWall) -> Result<()> {
        if !self.is_in_bounds(pos) {
            return Err(MazeError::OutOfBounds(pos));
        }
        let other = pos + wall.to_coord();

        let (cell, neighbor) = self
            .cells
            .get_pair_mut(pos, other)
            .ok_or(MazeError::OutOfBounds(other))?;
        cell.remove_wall_pair(neighbor, wall);
        Ok(())
    }

    /// In-bounds cells next to `pos`, in the order of `sides`.
    fn adjacent(
        &self,
        pos: Dims,
        sides: [CellWall; 4],
    ) -> impl Iterator<Item = (CellWall, &Cell)> + '_ {
        sides
            .into_iter()
            .filter_map(move |side| self.cells.get(pos + side.to_coord()).map(|c| (side, c)))
    }

    /// Neighbors of `pos` not touched by the generator yet.
    pub fn neighbors_for_generation(&self, pos: Dims) -> Result<Vec<(CellWall, Dims)>> {
        self.get(pos)?;

        Ok(self
            .adjacent(pos, CellWall::ALL)
            .filter(|(_, cell)| cell.is_fully_walled())
            .map(|(side, cell)| (side, cell.get_coord()))
            .collect())
    }

    /// Neighbors of `pos` reachable through an open wall and not yet crossed or
    /// marked wrong, ordered bottom, right, top, left.
    pub fn neighbors_for_solving(&self, pos: Dims) -> Result<Vec<(CellWall, Dims)>> {
        let cell = self.get(pos)?;

        Ok(self
            .adjacent(pos, CellWall::SOLVING_ORDER)
            .filter(|(side, other)| !cell.has_wall(*side) && !other.state().is_visited())
            .map(|(side, other)| (side, other.get_coord()))
            .collect())
    }

    /// Number of open walls between cells, each counted once.
    pub fn open_wall_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&w| {
                        !cell.has_wall(w) && self.is_in_bounds(cell.get_coord() + w.to_coord())
                    })
                    .count()
            })
            .sum()
    }

    /// True when the generator has not removed anything yet.
    pub fn is_untouched(&self) -> bool {
        self.cells.all(Cell::is_fully_walled)
    }

    /// Solves the maze with [`Backtracking`], without trace.
    ///
    /// Once solved, the cached solution is returned.
    pub fn solve(&mut self) -> Result<&Solution> {
        self.solve_with(&Backtracking, false)
    }

    /// Solves the maze with `solver` unless it was solved already.
    ///
    /// `record_trace` only matters for the first, uncached call. That call starts from blank
    /// cell states, whatever was read from a file or left by a failed attempt.
    pub fn solve_with(
        &mut self,
        solver: &dyn MazeSolver,
        record_trace: bool,
    ) -> Result<&Solution> {
        if self.solution.is_none() {
            self.clear_states();
            let solution = solver.solve(self, record_trace)?;
            debug!(
                "solved {}x{} maze, path length {}",
                self.width(),
                self.height(),
                solution.path().len()
            );
            self.solution = Some(solution);
        }

        self.solution.as_ref().ok_or(MazeError::Unsolvable)
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn path(&self) -> Option<&[Dims]> {
        self.solution.as_ref().map(Solution::path)
    }

    /// Clears all cell states and drops the cached solution.
    pub fn reset_states(&mut self) {
        self.clear_states();
        self.solution = None;
    }

    fn clear_states(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_state(CellState::Blank);
        }
    }
}
