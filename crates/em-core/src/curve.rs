//! Torque-vs-speed curve lookup.

use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;

/// One point of the torque curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    /// Rotational speed at which this segment starts (rad/s)
    pub speed: Real,
    /// Torque produced at or above this speed (N·m)
    pub torque: Real,
}

/// Ordered, immutable torque-vs-speed map.
///
/// Lookup is a step function: the torque of the last point whose speed is at
/// or below the query applies. Despite the "piecewise-linear" wording that
/// sometimes accompanies this kind of table, there is no interpolation
/// between points; interpolating would change simulation results.
///
/// ```text
/// torque(v) = torque_i  where  speed_i <= v < speed_{i+1}
/// torque(v) = 0         where  v < speed_0
/// ```
#[derive(Clone, Debug)]
pub struct TorqueCurve {
    points: Vec<CurvePoint>,
}

impl TorqueCurve {
    /// Build a curve from `(speed, torque)` pairs.
    ///
    /// Pairs are sorted ascending by speed. At least one pair is required,
    /// and speeds must be unique (a duplicate speed would make the lookup
    /// ambiguous).
    ///
    /// # Errors
    /// Returns `InvalidCurve` on zero pairs or duplicate speeds.
    pub fn new(pairs: Vec<(Real, Real)>) -> CoreResult<Self> {
        if pairs.is_empty() {
            return Err(CoreError::InvalidCurve {
                what: "curve must have at least one segment",
            });
        }

        let mut points: Vec<CurvePoint> = pairs
            .into_iter()
            .map(|(speed, torque)| CurvePoint { speed, torque })
            .collect();
        points.sort_by(|a, b| a.speed.total_cmp(&b.speed));

        if points.windows(2).any(|w| w[0].speed == w[1].speed) {
            return Err(CoreError::InvalidCurve {
                what: "curve speeds must be unique",
            });
        }

        Ok(Self { points })
    }

    /// Torque of the last segment whose speed is <= the query speed.
    ///
    /// Returns 0.0 when the query is below the smallest stored speed (no
    /// segment applies yet). Linear scan; curves are tens of entries.
    pub fn lookup(&self, speed: Real) -> Real {
        let mut torque = 0.0;
        for point in &self.points {
            if point.speed <= speed {
                torque = point.torque;
            } else {
                break;
            }
        }
        torque
    }

    /// Number of segments. Never zero for a constructed curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Segments in ascending speed order, for display.
    pub fn segments(&self) -> &[CurvePoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn curve(pairs: &[(Real, Real)]) -> TorqueCurve {
        TorqueCurve::new(pairs.to_vec()).unwrap()
    }

    #[test]
    fn empty_curve_rejected() {
        let err = TorqueCurve::new(vec![]).unwrap_err();
        assert!(format!("{err}").contains("at least one segment"));
    }

    #[test]
    fn duplicate_speeds_rejected() {
        let err = TorqueCurve::new(vec![(1.0, 10.0), (1.0, 20.0)]).unwrap_err();
        assert!(format!("{err}").contains("unique"));
    }

    #[test]
    fn below_smallest_key_is_zero() {
        let c = curve(&[(10.0, 40.0), (20.0, 60.0)]);
        assert_eq!(c.lookup(0.0), 0.0);
        assert_eq!(c.lookup(9.999), 0.0);
    }

    #[test]
    fn exact_key_returns_its_torque() {
        let c = curve(&[(0.0, 50.0), (10.0, 40.0), (20.0, 60.0)]);
        assert_eq!(c.lookup(0.0), 50.0);
        assert_eq!(c.lookup(10.0), 40.0);
        assert_eq!(c.lookup(20.0), 60.0);
    }

    #[test]
    fn step_semantics_no_interpolation() {
        let c = curve(&[(0.0, 50.0), (10.0, 40.0)]);
        // Anywhere in [0, 10) the first segment applies unchanged.
        assert_eq!(c.lookup(5.0), 50.0);
        assert_eq!(c.lookup(9.999_999), 50.0);
        assert_eq!(c.lookup(10.0), 40.0);
        assert_eq!(c.lookup(1e9), 40.0);
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let c = curve(&[(20.0, 60.0), (0.0, 50.0), (10.0, 40.0)]);
        assert_eq!(c.lookup(15.0), 40.0);
        assert_eq!(c.segments()[0].speed, 0.0);
    }

    fn unique_sorted(mut speeds: Vec<Real>) -> Vec<Real> {
        speeds.sort_by(Real::total_cmp);
        speeds.dedup();
        speeds
    }

    proptest! {
        /// The applicable segment never moves backwards as the query grows.
        ///
        /// Torques here are the segment index, so the step-function property
        /// reads as plain monotonicity of the lookup (with 0.0 as the
        /// below-all-segments floor).
        #[test]
        fn applicable_segment_is_monotonic(
            speeds in proptest::collection::vec(0.0f64..1e4, 1..20),
            q1 in -1e4f64..1e4,
            q2 in -1e4f64..1e4,
        ) {
            let pairs: Vec<(Real, Real)> = unique_sorted(speeds)
                .into_iter()
                .enumerate()
                .map(|(i, s)| (s, (i + 1) as Real))
                .collect();
            let c = TorqueCurve::new(pairs).unwrap();

            let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
            prop_assert!(c.lookup(hi) >= c.lookup(lo));
        }

        /// Below the smallest key the lookup is always 0.0.
        #[test]
        fn below_min_is_always_zero(
            speeds in proptest::collection::vec(1.0f64..1e4, 1..20),
            offset in 1e-6f64..1.0,
        ) {
            let speeds = unique_sorted(speeds);
            let min = speeds[0];
            let pairs: Vec<(Real, Real)> = speeds.into_iter().map(|s| (s, 99.0)).collect();
            let c = TorqueCurve::new(pairs).unwrap();
            prop_assert_eq!(c.lookup(min - offset), 0.0);
        }
    }
}
