//! Balancing-fee engine
//!
//! Computes the fee charged when a pool's running balance moves across its
//! rate curve. A modification that stays inside one segment is a single
//! integral; one that crosses cutoffs is split at each boundary and the
//! partial integrals are summed: deposits walk segment indices upward,
//! refunds downward, and every segment is integrated in the direction of
//! travel so the two entry points are exact mirrors:
//!
//! `deposit_fee(curve, b, a) == -refund_fee(curve, b + a, a)`
//!
//! Results are not sign-clamped: refunds on positive-rate curves come out
//! negative, and curves with negative rates (rebates) produce negative
//! deposit fees.

use tracing::trace;

use hubflow_types::FixedPoint;

use crate::curve::Curve;
use crate::error::{FeeError, Result};
use crate::integrator::integrate;
use crate::interval::{bounds, locate, Bound, Interval};

/// Balancing fee for increasing the running balance by `amount` (>= 0).
pub fn deposit_fee(curve: &Curve, balance: FixedPoint, amount: FixedPoint) -> Result<FixedPoint> {
    check_amount(amount)?;
    let end = balance.checked_add(amount)?;
    let balance_interval = locate(curve, balance);
    let end_interval = locate(curve, end);

    if let Some(fallback) = locator_fallback(curve, &balance_interval, &end_interval, balance, end)?
    {
        return Ok(fallback);
    }

    let mut total = FixedPoint::zero();
    for index in balance_interval.index..=end_interval.index {
        let (seg_start, seg_end) = if index == balance_interval.index
            && index == end_interval.index
        {
            // Whole modification inside one segment.
            (balance, end)
        } else if index == balance_interval.index {
            // Bottom segment of the climb: balance up to its upper bound.
            (balance, finite(balance_interval.upper, index)?)
        } else if index == end_interval.index {
            // Top segment: enters at its lower bound, stops at end.
            (finite(end_interval.lower, index)?, end)
        } else {
            // Fully crossed segment.
            let (lower, upper) = bounds(curve, index as usize);
            (finite(lower, index)?, finite(upper, index)?)
        };
        trace!(index, %seg_start, %seg_end, "deposit segment integral");
        total = total.checked_add(integrate(curve, index, seg_start, seg_end)?)?;
    }
    Ok(total)
}

/// Balancing fee for decreasing the running balance by `amount` (>= 0).
///
/// The exact mirror of [`deposit_fee`]: the walk descends and each segment
/// is integrated downward, so for positive-rate curves the result is the
/// negated deposit fee of the same span.
pub fn refund_fee(curve: &Curve, balance: FixedPoint, amount: FixedPoint) -> Result<FixedPoint> {
    check_amount(amount)?;
    let end = balance.checked_sub(amount)?;
    let balance_interval = locate(curve, balance);
    let end_interval = locate(curve, end);

    if let Some(fallback) = locator_fallback(curve, &balance_interval, &end_interval, balance, end)?
    {
        return Ok(fallback);
    }

    let mut total = FixedPoint::zero();
    for index in (end_interval.index..=balance_interval.index).rev() {
        let (seg_start, seg_end) = if index == balance_interval.index
            && index == end_interval.index
        {
            (balance, end)
        } else if index == balance_interval.index {
            // Top segment of the descent: balance down to its lower bound.
            (balance, finite(balance_interval.lower, index)?)
        } else if index == end_interval.index {
            // Bottom segment: enters at its upper bound, stops at end.
            (finite(end_interval.upper, index)?, end)
        } else {
            // Fully crossed segment, traversed downward.
            let (lower, upper) = bounds(curve, index as usize);
            (finite(upper, index)?, finite(lower, index)?)
        };
        trace!(index, %seg_start, %seg_end, "refund segment integral");
        total = total.checked_add(integrate(curve, index, seg_start, seg_end)?)?;
    }
    Ok(total)
}

fn check_amount(amount: FixedPoint) -> Result<()> {
    if amount.is_negative() {
        return Err(FeeError::NegativeAmount { amount });
    }
    Ok(())
}

/// Handle the locator's defensive `-1` result: the whole curve is treated
/// as flat zero-rate, equivalent to an empty curve. Unreachable for valid
/// curves, since the intervals cover the entire balance axis.
fn locator_fallback(
    curve: &Curve,
    balance_interval: &Interval,
    end_interval: &Interval,
    balance: FixedPoint,
    end: FixedPoint,
) -> Result<Option<FixedPoint>> {
    if balance_interval.index < 0 || end_interval.index < 0 {
        return Ok(Some(integrate(curve, -1, balance, end)?));
    }
    Ok(None)
}

fn finite(bound: Bound, index: isize) -> Result<FixedPoint> {
    bound
        .finite()
        .ok_or(FeeError::UnboundedSegment { index })
}
