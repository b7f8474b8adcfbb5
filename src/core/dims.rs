use std::{
    fmt,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// Position of a cell in the maze, `x` grows right and `y` grows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates all positions of the rectangle `from..to` row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn iter_fill_is_row_major() {
        let all: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(all, vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);

        assert_eq!(Dims::iter_fill(Dims::ZERO, Dims(0, 5)).count(), 0);
    }

    #[test]
    fn arithmetic() {
        let pos = Dims(3, 4) + Dims(-1, 1);
        assert_eq!(pos, Dims(2, 5));
        assert_eq!(pos - Dims::ONE, Dims(1, 4));
        assert_eq!(Dims(2, 0).to_string(), "(2, 0)");
    }
}
