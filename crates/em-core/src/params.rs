//! Validated engine parameters.

use std::fmt::Write as _;

use crate::curve::TorqueCurve;
use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;

/// Physical parameters of a single engine.
///
/// The thermal/rotational model driven by these values:
///
/// ```text
/// dv/dt = τ(v) / I
/// dT/dt = τ(v) * k_τ + v² * k_v + k_c * (T_ambient - T)
/// ```
///
/// where τ(v) is the torque curve lookup, I the moment of inertia, k_τ and
/// k_v the heating coefficients and k_c the cooling coefficient.
///
/// Immutable after construction and free of interior state, so one value can
/// drive any number of simulation runs.
#[derive(Clone, Debug)]
pub struct EngineParameters {
    inertia: Real,
    overheat_temp: Real,
    heat_torque_coeff: Real,
    heat_speed_coeff: Real,
    cool_coeff: Real,
    curve: TorqueCurve,
}

impl EngineParameters {
    /// Build parameters from raw values and `(speed, torque)` curve pairs.
    ///
    /// Inertia must be strictly positive (it divides the torque). The other
    /// coefficients are accepted as given, negatives included; the physical
    /// model does not forbid them. Construction is atomic: either every
    /// field is valid or no value is returned.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for non-positive inertia and `InvalidCurve`
    /// for an unusable curve.
    pub fn from_values(
        inertia: Real,
        overheat_temp: Real,
        heat_torque_coeff: Real,
        heat_speed_coeff: Real,
        cool_coeff: Real,
        curve_pairs: Vec<(Real, Real)>,
    ) -> CoreResult<Self> {
        if inertia <= 0.0 {
            return Err(CoreError::InvalidParameter {
                field: "inertia",
                what: "moment of inertia must be positive",
            });
        }
        let curve = TorqueCurve::new(curve_pairs)?;

        Ok(Self {
            inertia,
            overheat_temp,
            heat_torque_coeff,
            heat_speed_coeff,
            cool_coeff,
            curve,
        })
    }

    /// Moment of inertia (kg·m²), always > 0.
    pub fn inertia(&self) -> Real {
        self.inertia
    }

    /// Temperature at which the engine is considered failed (°C).
    pub fn overheat_temp(&self) -> Real {
        self.overheat_temp
    }

    /// Heating contribution per unit torque.
    pub fn heat_torque_coeff(&self) -> Real {
        self.heat_torque_coeff
    }

    /// Heating contribution per unit velocity squared.
    pub fn heat_speed_coeff(&self) -> Real {
        self.heat_speed_coeff
    }

    /// Cooling coefficient toward ambient temperature.
    pub fn cool_coeff(&self) -> Real {
        self.cool_coeff
    }

    /// Torque-vs-speed curve.
    pub fn curve(&self) -> &TorqueCurve {
        &self.curve
    }

    /// Human-readable multi-line summary, used by trajectory headers.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Engine parameters:");
        let _ = writeln!(out, "  moment of inertia    = {}", self.inertia);
        let _ = writeln!(out, "  overheat temperature = {}", self.overheat_temp);
        let _ = writeln!(out, "  heat/torque coeff    = {}", self.heat_torque_coeff);
        let _ = writeln!(out, "  heat/speed coeff     = {}", self.heat_speed_coeff);
        let _ = writeln!(out, "  cooling coeff        = {}", self.cool_coeff);
        let _ = writeln!(out, "  torque curve ({} segments):", self.curve.len());
        for point in self.curve.segments() {
            let _ = writeln!(out, "    speed {} -> torque {}", point.speed, point.torque);
        }
        out
    }
}
