//! Plain text maze format.
//!
//! ```text
//! 2
//! 1
//! +-+-+
//! |   |
//! +-+-+
//! ```
//!
//! Width and height on the first two lines, then `2 * height + 1` lines of
//! `2 * width + 1` characters. Corners are `+`, walls `-` and `|`, a space in place of a
//! wall means there is a passage. Cell centers are spaces, or state glyphs in the
//! variant written by [`Maze::to_text_with_states`].

use std::{fmt, str::FromStr};

use log::debug;

use super::{CellState, CellWall, Maze};
use crate::core::*;

const CORNER: char = '+';
const HORIZONTAL: char = '-';
const VERTICAL: char = '|';
const OPEN: char = ' ';

impl Maze {
    /// Width, height and the wall drawing, cell states are left out.
    pub fn to_text(&self) -> String {
        self.text_with_header(false)
    }

    /// Same as [`Maze::to_text`], with cell states drawn inside cell centers.
    pub fn to_text_with_states(&self) -> String {
        self.text_with_header(true)
    }

    fn text_with_header(&self, states: bool) -> String {
        format!("{}\n{}\n{}", self.width(), self.height(), self.draw(states))
    }

    fn draw(&self, states: bool) -> String {
        let Dims(w, h) = self.size();
        let mut lines = Vec::with_capacity(2 * h as usize + 1);

        for y in 0..=h {
            let mut line = String::with_capacity(2 * w as usize + 1);
            line.push(CORNER);
            for x in 0..w {
                let wall = self.horizontal_wall(x, y);
                line.push(if wall { HORIZONTAL } else { OPEN });
                line.push(CORNER);
            }
            lines.push(line);

            if y == h {
                break;
            }

            let mut line = String::with_capacity(2 * w as usize + 1);
            for x in 0..=w {
                line.push(if self.vertical_wall(x, y) { VERTICAL } else { OPEN });
                if x < w {
                    let state = self.cells[Dims(x, y)].state();
                    line.push(if states { state.glyph() } else { OPEN });
                }
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    /// Wall above row `y`, looked at from both sides.
    fn horizontal_wall(&self, x: i32, y: i32) -> bool {
        let below = self.cells.get(Dims(x, y)).map(|c| c.has_wall(CellWall::Top));
        let above = self.cells.get(Dims(x, y - 1)).map(|c| c.has_wall(CellWall::Bottom));
        below.unwrap_or(false) || above.unwrap_or(false)
    }

    /// Wall left of column `x`, looked at from both sides.
    fn vertical_wall(&self, x: i32, y: i32) -> bool {
        let right = self.cells.get(Dims(x, y)).map(|c| c.has_wall(CellWall::Left));
        let left = self.cells.get(Dims(x - 1, y)).map(|c| c.has_wall(CellWall::Right));
        right.unwrap_or(false) || left.unwrap_or(false)
    }

    /// Parses the text format, both with and without state glyphs.
    pub fn from_text(text: &str) -> Result<Maze> {
        let mut lines = text.lines();
        let width = parse_header(lines.next(), "width")?;
        let height = parse_header(lines.next(), "height")?;

        let mut rows: Vec<Vec<char>> = lines.map(|line| line.chars().collect()).collect();
        while rows.last().is_some_and(|row| row.iter().all(|c| c.is_whitespace())) {
            rows.pop();
        }

        // Checked before allocating, the header alone can ask for a huge maze
        let (row_count, row_len) = (2 * height as i64 + 1, 2 * width as i64 + 1);
        if rows.len() as i64 != row_count {
            return Err(MazeError::malformed(format!(
                "expected {} grid lines for height {}, found {}",
                row_count,
                height,
                rows.len()
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() as i64 != row_len) {
            return Err(MazeError::malformed(format!(
                "grid line {} has {} characters, expected {} for width {}",
                i + 1,
                row.len(),
                row_len,
                width
            )));
        }

        let mut maze = Maze::new(width, height)?;
        let (last_row, last_col) = (2 * height as usize, 2 * width as usize);

        for (i, row) in rows.iter().enumerate() {
            for (j, &c) in row.iter().enumerate() {
                let pos = Dims(j as i32 / 2, i as i32 / 2);
                let unexpected = || {
                    MazeError::malformed(format!(
                        "unexpected {:?} at grid line {}, column {}",
                        c,
                        i + 1,
                        j + 1
                    ))
                };
                let open_border = || {
                    MazeError::malformed(format!(
                        "outer wall is open at grid line {}, column {}",
                        i + 1,
                        j + 1
                    ))
                };

                match (i % 2, j % 2) {
                    (0, 0) if c == CORNER => {}
                    (0, 1) if c == HORIZONTAL => {}
                    (0, 1) if c == OPEN => {
                        if i == 0 || i == last_row {
                            return Err(open_border());
                        }
                        maze.remove_wall(pos, CellWall::Top)?;
                    }
                    (1, 0) if c == VERTICAL => {}
                    (1, 0) if c == OPEN => {
                        if j == 0 || j == last_col {
                            return Err(open_border());
                        }
                        maze.remove_wall(pos, CellWall::Left)?;
                    }
                    (1, 1) => {
                        let state = CellState::from_glyph(c).ok_or_else(unexpected)?;
                        maze.get_mut(pos)?.set_state(state);
                    }
                    _ => return Err(unexpected()),
                }
            }
        }

        debug!("parsed {}x{} maze", width, height);
        Ok(maze)
    }
}

fn parse_header(line: Option<&str>, name: &str) -> Result<i32> {
    let line = line.ok_or_else(|| MazeError::malformed(format!("missing {} line", name)))?;
    match line.trim().parse::<i32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(MazeError::malformed(format!(
            "{} has to be a positive integer, got {:?}",
            name, line
        ))),
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::from_text(s)
    }
}

/// Draws the walls with cell states, without the size header.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.draw(true))
    }
}
