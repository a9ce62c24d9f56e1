//! Simulation runner: drives the step loop to a terminal condition.

use em_core::{EngineParameters, Real};
use tracing::debug;

use crate::error::SimResult;
use crate::sample::{Outcome, Sample};
use crate::sink::SampleSink;
use crate::stepper;

/// Default time horizon: 10 days of simulated seconds.
pub const DEFAULT_MAX_TIME_S: u64 = 864_000;

/// Options for a single run.
///
/// The horizon is per-run state, not a process-wide constant, so concurrent
/// or repeated runs stay independently reproducible.
#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    /// Environment temperature the engine starts at and cools toward
    pub ambient_temperature: Real,
    /// Horizon after which the engine is declared to not overheat (seconds)
    pub max_time_s: u64,
}

impl RunOptions {
    pub fn new(ambient_temperature: Real) -> Self {
        Self {
            ambient_temperature,
            max_time_s: DEFAULT_MAX_TIME_S,
        }
    }
}

/// Run the simulation from rest until overheat or the time horizon.
///
/// The state starts at time 0, velocity 0, temperature = ambient, and the
/// initial sample is emitted before any step, including when the loop body
/// never executes because the start temperature already meets the threshold.
///
/// Each step advances exactly one second:
/// 1. velocity += acceleration(v) * 1.0
/// 2. temperature += heating_rate(v), with v already advanced
/// 3. temperature += cooling_rate(ambient, T)
/// 4. time += 1, then the sample is emitted
///
/// The cooling term carries its own sign and is always added; the rule does
/// not depend on where the samples go.
///
/// # Errors
/// Only sink failures; they are propagated, not suppressed.
pub fn run<S: SampleSink + ?Sized>(
    params: &EngineParameters,
    opts: &RunOptions,
    sink: &mut S,
) -> SimResult<Outcome> {
    let ambient = opts.ambient_temperature;
    let mut time_s: u64 = 0;
    let mut velocity: Real = 0.0;
    let mut temperature: Real = ambient;

    debug!(
        ambient,
        max_time_s = opts.max_time_s,
        overheat_temp = params.overheat_temp(),
        "starting engine run"
    );

    sink.emit(&Sample {
        time_s,
        velocity,
        temperature,
    })?;

    while temperature < params.overheat_temp() && time_s < opts.max_time_s {
        // Unit time step of exactly one second.
        velocity += stepper::acceleration(params, velocity) * 1.0;
        // Heating sees the velocity already advanced this step.
        temperature += stepper::heating_rate(params, velocity);
        temperature += stepper::cooling_rate(params, ambient, temperature);
        time_s += 1;

        sink.emit(&Sample {
            time_s,
            velocity,
            temperature,
        })?;
    }

    let overheated = temperature >= params.overheat_temp();
    debug!(elapsed_s = time_s, temperature, overheated, "engine run finished");

    Ok(Outcome {
        elapsed_s: time_s,
        final_temperature: temperature,
        overheated,
    })
}
