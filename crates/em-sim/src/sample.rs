//! Trajectory records.

use em_core::Real;

/// One point of the trajectory, emitted per step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Simulated time (whole seconds)
    pub time_s: u64,
    /// Rotational velocity
    pub velocity: Real,
    /// Engine temperature
    pub temperature: Real,
}

/// Terminal result of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Simulated seconds elapsed when the loop exited
    pub elapsed_s: u64,
    /// Engine temperature at exit
    pub final_temperature: Real,
    /// True when the overheat threshold was reached, false when the time
    /// horizon ran out first
    pub overheated: bool,
}
