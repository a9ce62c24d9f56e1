//! em-core: engine data model for the overheat simulator.
//!
//! Contains:
//! - numeric (Real + float helpers)
//! - curve (torque-vs-speed step curve)
//! - params (validated engine parameters)
//! - error (shared error types)

pub mod curve;
pub mod error;
pub mod numeric;
pub mod params;

// Re-exports: nice ergonomics for downstream crates
pub use curve::TorqueCurve;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use params::EngineParameters;
