//! Closed-form integration of a single curve segment
//!
//! Each segment's rate function is a straight line, so its definite integral
//! has an exact closed form, with no iterative numerical methods. For segment
//! `i` with endpoints `(c_prev, r_prev)` and `(c_curr, r_curr)`:
//!
//! ```text
//! fee = r_curr * (end - start)
//!     + slope * ((end^2/2 - c_curr*end) - (start^2/2 - c_curr*start))
//! ```
//!
//! where `slope = (r_prev - r_curr) / (c_prev - c_curr)`. Outside all
//! cutoffs the curve extends flat and only the first term applies. Every
//! operation runs in the fixed-point contract's exact order so results match
//! on-chain integer math bit-for-bit.

use hubflow_types::{FixedPoint, MathError};

use crate::curve::Curve;

/// Definite integral of segment `index`'s rate function from `start` to
/// `end`.
///
/// No clamping is performed: callers guarantee `[start, end]` (in either
/// direction) lies within the segment. `end < start` is legal and yields the
/// negated integral, which is how descending refund walks accumulate.
/// A negative `index` is the locator's defensive fallback and integrates at
/// a flat zero rate.
pub fn integrate(
    curve: &Curve,
    index: isize,
    start: FixedPoint,
    end: FixedPoint,
) -> Result<FixedPoint, MathError> {
    let width = end.checked_sub(start)?;
    let mut fee = flat_rate(curve, index).mul(width)?;

    // Between two cutoffs the rate is a genuine line; add the slope term.
    if index > 0 && (index as usize) < curve.len() {
        let curr = curve.point(index as usize);
        let prev = curve.point(index as usize - 1);
        let slope = prev
            .rate
            .checked_sub(curr.rate)?
            .div(prev.cutoff.checked_sub(curr.cutoff)?)?;
        let delta = antiderivative(curr.cutoff, end)?
            .checked_sub(antiderivative(curr.cutoff, start)?)?;
        fee = fee.checked_add(slope.mul(delta)?)?;
    }

    Ok(fee)
}

/// `F(x) = x^2/2 - pivot*x`, the antiderivative of the segment's line with
/// the constant rate term factored out and `pivot` as the current cutoff.
fn antiderivative(pivot: FixedPoint, x: FixedPoint) -> Result<FixedPoint, MathError> {
    x.half_square()?.checked_sub(pivot.mul(x)?)
}

/// Rate of the curve point governing segment `index`, clamped to the last
/// point for indices past the end. Zero for the empty curve and for the
/// locator's `-1` fallback, both of which behave as a flat zero-rate curve.
fn flat_rate(curve: &Curve, index: isize) -> FixedPoint {
    if curve.is_empty() || index < 0 {
        return FixedPoint::zero();
    }
    let clamped = (index as usize).min(curve.len() - 1);
    curve.point(clamped).rate
}
