use crate::core::Dims;
use serde::{Deserialize, Serialize};

/// Side of a cell, each side can hold one wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellWall {
    Left,
    Top,
    Right,
    Bottom,
}

impl CellWall {
    pub const ALL: [CellWall; 4] = [
        CellWall::Left,
        CellWall::Top,
        CellWall::Right,
        CellWall::Bottom,
    ];

    /// Direction priority used while solving, first open side wins.
    pub const SOLVING_ORDER: [CellWall; 4] =
        [CellWall::Bottom, CellWall::Right, CellWall::Top, CellWall::Left];

    pub fn to_coord(self) -> Dims {
        match self {
            CellWall::Left => Dims(-1, 0),
            CellWall::Top => Dims(0, -1),
            CellWall::Right => Dims(1, 0),
            CellWall::Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            CellWall::Left => CellWall::Right,
            CellWall::Right => CellWall::Left,
            CellWall::Top => CellWall::Bottom,
            CellWall::Bottom => CellWall::Top,
        }
    }

    fn index(self) -> usize {
        match self {
            CellWall::Left => 0,
            CellWall::Top => 1,
            CellWall::Right => 2,
            CellWall::Bottom => 3,
        }
    }
}

/// Traversal state of a cell, only solvers change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Blank,
    /// On the path currently being explored.
    Crossed,
    /// Proven dead end.
    Wrong,
    /// The destination.
    Finish,
}

impl CellState {
    pub fn glyph(self) -> char {
        match self {
            CellState::Blank => ' ',
            CellState::Crossed => '✔',
            CellState::Wrong => '✖',
            CellState::Finish => '⚑',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<CellState> {
        match glyph {
            ' ' => Some(CellState::Blank),
            '✔' => Some(CellState::Crossed),
            '✖' => Some(CellState::Wrong),
            '⚑' => Some(CellState::Finish),
            _ => None,
        }
    }

    /// Solvers never step into these.
    pub fn is_visited(self) -> bool {
        matches!(self, CellState::Crossed | CellState::Wrong)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
    state: CellState,
    pub(crate) coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            walls: [true; 4],
            state: CellState::Blank,
            coord: pos,
        }
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }

    pub fn has_wall(&self, wall: CellWall) -> bool {
        self.walls[wall.index()]
    }

    /// Sets only this cell's side, the neighbor is left alone.
    pub fn set_wall(&mut self, wall: CellWall, present: bool) {
        self.walls[wall.index()] = present;
    }

    /// Opens the passage between `self` and `neighbor`, which lies on `wall` side of `self`.
    pub fn remove_wall_pair(&mut self, neighbor: &mut Cell, wall: CellWall) {
        self.set_wall(wall, false);
        neighbor.set_wall(wall.reverse_wall(), false);
    }

    /// Generator treats a fully walled cell as unvisited.
    pub fn is_fully_walled(&self) -> bool {
        self.walls.iter().all(|&w| w)
    }

    pub fn walls(&self) -> [(CellWall, bool); 4] {
        CellWall::ALL.map(|w| (w, self.has_wall(w)))
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}
