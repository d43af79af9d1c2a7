//! Interval lookup over a rate curve
//!
//! A curve with `n` cutoffs partitions the balance axis into `n + 1`
//! contiguous half-open intervals `[lower, upper)`. Interval 0 is open-ended
//! below the first cutoff, interval `n` open-ended above the last. Open ends
//! are tagged bounds rather than a large magic constant, so there is no
//! overflow edge at extreme balances.

use hubflow_types::FixedPoint;

use crate::curve::Curve;

/// One endpoint of an interval. Variant order gives the sentinel ordering
/// directly: `NegInfinity < Finite(_) < PosInfinity`, with finite bounds
/// ordered by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bound {
    NegInfinity,
    Finite(FixedPoint),
    PosInfinity,
}

impl Bound {
    /// The finite value, if this bound has one.
    pub fn finite(self) -> Option<FixedPoint> {
        match self {
            Bound::Finite(value) => Some(value),
            _ => None,
        }
    }
}

/// A located curve interval: its index and half-open bounds.
///
/// `index` is signed to accommodate the defensive `-1` fallback of
/// [`locate`]; every interval produced by a successful scan has a
/// non-negative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub index: isize,
    pub lower: Bound,
    pub upper: Bound,
}

/// Numeric bounds of interval `index`.
///
/// For an empty curve every index maps to the whole balance range.
pub fn bounds(curve: &Curve, index: usize) -> (Bound, Bound) {
    if curve.is_empty() {
        (Bound::NegInfinity, Bound::PosInfinity)
    } else if index == 0 {
        (Bound::NegInfinity, Bound::Finite(curve.point(0).cutoff))
    } else if index >= curve.len() {
        (
            Bound::Finite(curve.point(curve.len() - 1).cutoff),
            Bound::PosInfinity,
        )
    } else {
        (
            Bound::Finite(curve.point(index - 1).cutoff),
            Bound::Finite(curve.point(index).cutoff),
        )
    }
}

/// Find the interval containing `target`.
///
/// Scans indices in ascending order and returns the first interval whose
/// half-open range satisfies `lower <= target < upper`; a target sitting
/// exactly on a cutoff therefore belongs to the interval that starts there.
/// The intervals are contiguous and the two open-ended ones cover the rest
/// of the axis, so the scan always matches for a valid curve. Should it
/// ever not (defensive only), the result carries index `-1` with the full
/// range, which every consumer treats as a fully flat zero-rate curve.
pub fn locate(curve: &Curve, target: FixedPoint) -> Interval {
    let target = Bound::Finite(target);
    for index in 0..=curve.len() {
        let (lower, upper) = bounds(curve, index);
        if lower <= target && target < upper {
            return Interval {
                index: index as isize,
                lower,
                upper,
            };
        }
    }
    Interval {
        index: -1,
        lower: Bound::NegInfinity,
        upper: Bound::PosInfinity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CutoffPoint;

    fn fixture() -> Curve {
        Curve::from_decimal_strs(&[("100", "0.01"), ("200", "0.02")]).unwrap()
    }

    fn fixed(n: i128) -> FixedPoint {
        FixedPoint::from_int(n)
    }

    #[test]
    fn test_bound_ordering() {
        assert!(Bound::NegInfinity < Bound::Finite(fixed(i128::MIN)));
        assert!(Bound::Finite(fixed(i128::MAX)) < Bound::PosInfinity);
        assert!(Bound::Finite(fixed(1)) < Bound::Finite(fixed(2)));
    }

    #[test]
    fn test_bounds_per_index() {
        let curve = fixture();
        assert_eq!(
            bounds(&curve, 0),
            (Bound::NegInfinity, Bound::Finite(fixed(100)))
        );
        assert_eq!(
            bounds(&curve, 1),
            (Bound::Finite(fixed(100)), Bound::Finite(fixed(200)))
        );
        assert_eq!(
            bounds(&curve, 2),
            (Bound::Finite(fixed(200)), Bound::PosInfinity)
        );
        // Indices past the end stay pinned to the open-ended top interval.
        assert_eq!(
            bounds(&curve, 7),
            (Bound::Finite(fixed(200)), Bound::PosInfinity)
        );
    }

    #[test]
    fn test_bounds_of_empty_curve() {
        let empty = Curve::new(vec![]).unwrap();
        assert_eq!(bounds(&empty, 0), (Bound::NegInfinity, Bound::PosInfinity));
        assert_eq!(bounds(&empty, 3), (Bound::NegInfinity, Bound::PosInfinity));
    }

    #[test]
    fn test_locate_half_open_boundary() {
        // A target sitting exactly on a cutoff belongs to the interval that
        // starts there, not the one that ends there.
        let curve = fixture();
        let interval = locate(&curve, fixed(100));
        assert_eq!(interval.index, 1);
        assert_eq!(interval.lower, Bound::Finite(fixed(100)));
        assert_eq!(interval.upper, Bound::Finite(fixed(200)));
    }

    #[test]
    fn test_locate_open_ended_intervals() {
        let curve = fixture();
        assert_eq!(locate(&curve, fixed(-1_000_000)).index, 0);
        assert_eq!(locate(&curve, fixed(150)).index, 1);
        assert_eq!(locate(&curve, fixed(1_000_000)).index, 2);
    }

    #[test]
    fn test_locate_on_empty_curve() {
        let empty = Curve::new(vec![]).unwrap();
        let interval = locate(&empty, fixed(42));
        assert_eq!(interval.index, 0);
        assert_eq!(interval.lower, Bound::NegInfinity);
        assert_eq!(interval.upper, Bound::PosInfinity);
    }

    #[test]
    fn test_locate_single_point_curve() {
        let curve = Curve::new(vec![CutoffPoint::new(
            fixed(100),
            FixedPoint::from_decimal_str("0.05").unwrap(),
        )])
        .unwrap();
        assert_eq!(locate(&curve, fixed(99)).index, 0);
        assert_eq!(locate(&curve, fixed(100)).index, 1);
    }
}
