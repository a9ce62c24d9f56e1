use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Reject NaN and infinities at the input boundary. The simulation loop
/// itself never re-checks; callers validate upstream.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}
