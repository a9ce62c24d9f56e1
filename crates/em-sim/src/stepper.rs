//! Pure per-step physics.
//!
//! Deterministic, side-effect-free functions of the engine parameters and
//! the current state. The arithmetic is exact; no smoothing and no clamping.

use em_core::{EngineParameters, Real};

/// Rotational acceleration at the given velocity.
///
/// ```text
/// a = τ(v) / I
/// ```
pub fn acceleration(params: &EngineParameters, velocity: Real) -> Real {
    let torque = params.curve().lookup(velocity);
    torque / params.inertia()
}

/// Heating rate at the given velocity.
///
/// ```text
/// dT_heat = τ(v) * k_τ + v² * k_v
/// ```
pub fn heating_rate(params: &EngineParameters, velocity: Real) -> Real {
    let torque = params.curve().lookup(velocity);
    torque * params.heat_torque_coeff() + velocity * velocity * params.heat_speed_coeff()
}

/// Cooling rate toward ambient.
///
/// ```text
/// dT_cool = k_c * (T_ambient - T_engine)
/// ```
///
/// Negative when the engine is hotter than ambient, so the term is added to
/// the temperature, never subtracted.
pub fn cooling_rate(params: &EngineParameters, ambient_temp: Real, engine_temp: Real) -> Real {
    params.cool_coeff() * (ambient_temp - engine_temp)
}
