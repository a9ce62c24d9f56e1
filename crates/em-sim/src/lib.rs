//! Transient engine overheat simulation.
//!
//! Provides:
//! - Pure stepper functions (acceleration, heating, cooling)
//! - Fixed one-second-step runner driving the overheat loop
//! - Sample/Outcome records and the sink boundary they flow through

pub mod error;
pub mod runner;
pub mod sample;
pub mod sink;
pub mod stepper;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use runner::{DEFAULT_MAX_TIME_S, RunOptions, run};
pub use sample::{Outcome, Sample};
pub use sink::{MemorySink, SampleSink};
pub use stepper::{acceleration, cooling_rate, heating_rate};
