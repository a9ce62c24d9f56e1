//! Error types for simulation runs.

use thiserror::Error;

/// Errors encountered while driving a simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    /// The injected sample sink refused a sample. Sink failures are the
    /// sink's concern; the runner propagates them without recovery.
    #[error("Sink failure: {message}")]
    Sink { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Sink {
            message: e.to_string(),
        }
    }
}
