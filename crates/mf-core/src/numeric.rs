use crate::MfError;

/// Floating point type used throughout system
pub type Real = f64;

/// Default tolerance for "positive residual" and saturation checks.
pub const DEFAULT_FLOW_EPSILON: Real = 1e-5;

/// Absolute/relative tolerance pair for comparing accumulated float sums.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: DEFAULT_FLOW_EPSILON,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely absolute tolerance, as used for flow values.
    pub fn absolute(eps: Real) -> Self {
        Self { abs: eps, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MfError::NonFinite { what, value: v })
    }
}

/// Check a tolerance value: finite and strictly positive.
pub fn ensure_tolerance(eps: Real) -> Result<Real, MfError> {
    let eps = ensure_finite(eps, "epsilon")?;
    if eps <= 0.0 {
        return Err(MfError::InvalidArg {
            what: "epsilon must be positive",
        });
    }
    Ok(eps)
}

/// Clamp a value into `[lo, hi]`; used to strip float drift from flows.
#[inline]
pub fn clamp_to(v: Real, lo: Real, hi: Real) -> Real {
    v.max(lo).min(hi)
}
