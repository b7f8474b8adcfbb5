pub mod array;
pub mod dims;

pub use array::Array2D;
pub use dims::Dims;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {0}x{1}, both have to be positive")]
    InvalidDimensions(i32, i32),
    #[error("Position {0} is out of the maze's bounds")]
    OutOfBounds(Dims),
    #[error("Malformed maze text; {0}")]
    MalformedInput(String),
    #[error("Maze has already been generated")]
    AlreadyGenerated,
    #[error("Maze has no path from start to end")]
    Unsolvable,
}

impl MazeError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        MazeError::MalformedInput(msg.into())
    }
}

pub type Result<T, E = MazeError> = std::result::Result<T, E>;
