//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input lookup error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

/// Input-specific errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected location
    #[error("No input file at {}", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    /// Copy of this error for reporting against several parts
    pub fn duplicate(&self) -> InputError {
        match self {
            InputError::NotFound(path) => InputError::NotFound(path.clone()),
            InputError::Read { path, source } => InputError::Read {
                path: path.clone(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
        }
    }
}
