use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{debug, info};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::MazeError,
    maze::{
        solvers::{Backtracking, DeadEndFilling, MazeSolver},
        Maze,
    },
};

pub const DEFAULT_CONFIG: &str = include_str!("./default_config.ron");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot access {path:?}; {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config; {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// Where the maze comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Carve a new perfect maze.
    #[default]
    Random,
    /// Read the text format from a file.
    FromFile(PathBuf),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverKind {
    #[default]
    Backtracking,
    DeadEnd,
}

impl SolverKind {
    pub fn solver(self) -> &'static dyn MazeSolver {
        match self {
            SolverKind::Backtracking => &Backtracking,
            SolverKind::DeadEnd => &DeadEndFilling,
        }
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backtracking" => Ok(SolverKind::Backtracking),
            "dead-end" | "deadend" => Ok(SolverKind::DeadEnd),
            other => Err(format!(
                "unknown solver {:?}, expected backtracking or dead-end",
                other
            )),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Backtracking => write!(f, "backtracking"),
            SolverKind::DeadEnd => write!(f, "dead-end"),
        }
    }
}

/// Everything needed to build and solve one maze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    pub seed: Option<u64>,
    pub mode: GenerationMode,
    pub solver: SolverKind,
    pub record_trace: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: 10,
            height: 8,
            seed: None,
            mode: GenerationMode::Random,
            solver: SolverKind::Backtracking,
            record_trace: false,
        }
    }
}

impl MazeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    pub fn record_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Builds the maze this config describes.
    ///
    /// Width and height are ignored when reading from a file, the file has its own.
    pub fn build(self) -> Result<Maze, ConfigError> {
        match self.mode {
            GenerationMode::Random => Ok(Maze::generate(self.width, self.height, self.seed)?),
            GenerationMode::FromFile(path) => {
                let text = read(&path)?;
                info!("loading maze from {:?}", path);
                Ok(Maze::from_text(&text)?)
            }
        }
    }

    /// Builds the maze and solves it with the configured solver.
    pub fn build_solved(self) -> Result<Maze, ConfigError> {
        let (solver, record_trace) = (self.solver, self.record_trace);
        let mut maze = self.build()?;
        maze.solve_with(solver.solver(), record_trace)?;
        Ok(maze)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading config from {:?}", path);
        Self::from_ron(&read(path)?)
    }

    /// Loads the config at [`MazeConfig::default_path`], or the built-in one when there is
    /// no such file.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Self::from_ron(DEFAULT_CONFIG),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rampart").join("config.ron"))
    }

    /// Overwrites `path` with the built-in config.
    pub fn reset(path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(io_err)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        assert_eq!(MazeConfig::from_ron(DEFAULT_CONFIG).unwrap(), MazeConfig::default());
    }

    #[test]
    fn partial_config() {
        let config = MazeConfig::from_ron("(width: 4, seed: 7, solver: DeadEnd)").unwrap();
        assert_eq!(
            config,
            MazeConfig::new()
                .size(4, 8)
                .seed(7)
                .solver(SolverKind::DeadEnd)
        );

        let config = MazeConfig::from_ron(r#"(mode: FromFile("maze.txt"))"#).unwrap();
        assert_eq!(config.mode, GenerationMode::FromFile("maze.txt".into()));
    }

    #[test]
    fn invalid_config() {
        assert!(matches!(
            MazeConfig::from_ron("(width: \"wide\")"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn solver_names() {
        assert_eq!("backtracking".parse::<SolverKind>(), Ok(SolverKind::Backtracking));
        assert_eq!("Dead-End".parse::<SolverKind>(), Ok(SolverKind::DeadEnd));
        assert!("astar".parse::<SolverKind>().is_err());

        for kind in [SolverKind::Backtracking, SolverKind::DeadEnd] {
            assert_eq!(kind.to_string().parse::<SolverKind>(), Ok(kind));
        }
    }

    #[test]
    fn build_is_seeded() {
        let config = MazeConfig::new().size(9, 4).seed(99);
        let a = config.clone().build().unwrap();
        let b = config.build().unwrap();
        assert_eq!(a.to_text(), b.to_text());
        assert_eq!(a.size().0, 9);
    }

    #[test]
    fn build_rejects_bad_size() {
        assert!(matches!(
            MazeConfig::new().size(0, 3).build(),
            Err(ConfigError::Maze(MazeError::InvalidDimensions(0, 3)))
        ));
    }

    #[test]
    fn build_solved_with_trace() {
        let maze = MazeConfig::new()
            .size(5, 5)
            .seed(1)
            .solver(SolverKind::DeadEnd)
            .record_trace(true)
            .build_solved()
            .unwrap();
        let solution = maze.solution().unwrap();
        assert_eq!(solution.path().last(), Some(&maze.end()));
        assert!(solution.trace().is_some());
    }

    #[test]
    fn missing_file() {
        let config =
            MazeConfig::new().mode(GenerationMode::FromFile("does/not/exist.txt".into()));
        assert!(matches!(config.build(), Err(ConfigError::Io { .. })));
    }
}
