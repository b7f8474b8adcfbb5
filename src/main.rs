use std::{fs, io, path::PathBuf};

use clap::Parser;
use log::info;
use thiserror::Error;

use rampart::{
    core::MazeError,
    maze::Maze,
    settings::{ConfigError, GenerationMode, MazeConfig, SolverKind},
};

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Cannot write output; {0}")]
    Io(#[from] io::Error),
    #[error("No config directory on this platform")]
    NoConfigDir,
}

#[derive(Parser, Debug)]
#[command(version, about, name = "rampart")]
struct Args {
    #[arg(short, long, help = "Config file, defaults to the one in config directory")]
    config: Option<PathBuf>,
    #[arg(short = 'W', long, help = "Maze width")]
    width: Option<i32>,
    #[arg(short = 'H', long, help = "Maze height")]
    height: Option<i32>,
    #[arg(short, long, help = "Seed for the generator")]
    seed: Option<u64>,
    #[arg(short, long, help = "Read the maze from a text file instead of generating it")]
    input: Option<PathBuf>,
    #[arg(long, help = "Solver to use, backtracking or dead-end")]
    solver: Option<SolverKind>,
    #[arg(long, help = "Solve the maze")]
    solve: bool,
    #[arg(long, help = "Draw cell states inside the cells")]
    states: bool,
    #[arg(long, help = "Print every step of the solver, implies --solve")]
    trace: bool,
    #[arg(short, long, help = "Write the maze to a file instead of stdout")]
    output: Option<PathBuf>,
    #[arg(long, help = "Reset config to default and quit")]
    reset_config: bool,
    #[arg(long, help = "Show config path and quit")]
    show_config_path: bool,
}

impl Args {
    fn config(&self) -> Result<MazeConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => MazeConfig::load(path)?,
            None => MazeConfig::load_default()?,
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(input) = &self.input {
            config.mode = GenerationMode::FromFile(input.clone());
        }
        if let Some(solver) = self.solver {
            config.solver = solver;
        }
        config.record_trace |= self.trace;

        Ok(config)
    }
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    if args.show_config_path {
        let path = MazeConfig::default_path().ok_or(CliError::NoConfigDir)?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset_config {
        let path = args
            .config
            .clone()
            .or_else(MazeConfig::default_path)
            .ok_or(CliError::NoConfigDir)?;
        MazeConfig::reset(&path)?;
        return Ok(());
    }

    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = args.config()?;
    info!("using {:?}", config);

    let maze = if args.solve || config.record_trace {
        config.build_solved()?
    } else {
        config.build()?
    };

    let text = if args.states {
        maze.to_text_with_states()
    } else {
        maze.to_text()
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &text)?;
            info!("maze written to {:?}", path);
        }
        None => println!("{}", text),
    }

    print_solution(&maze, args.output.is_some());

    Ok(())
}

fn print_solution(maze: &Maze, quiet: bool) {
    let Some(solution) = maze.solution() else {
        return;
    };

    if let Some(trace) = solution.trace() {
        for (i, step) in trace.iter().enumerate() {
            println!("{:>5} {} {:?}", i, step.pos, step.state);
        }
    }

    if !quiet {
        let path = solution
            .path()
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("path ({} cells): {}", solution.path().len(), path);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "rampart", "-W", "5", "-H", "3", "-s", "4", "--solver", "dead-end", "--trace",
        ]);
        assert_eq!(args.solver, Some(SolverKind::DeadEnd));
        assert!(args.trace && !args.solve);
        assert_eq!((args.width, args.height, args.seed), (Some(5), Some(3), Some(4)));
    }
}
