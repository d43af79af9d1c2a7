//! Balancing-Fee Property Tests
//!
//! Validates the mathematical properties that must hold for every curve,
//! balance, and amount, regardless of specific configuration:
//!
//! - **Antisymmetry**: a deposit and the refund that undoes it are exact
//!   negations, for arbitrary fixed-point inputs.
//! - **Additivity**: splitting a span at any midpoint and walking the two
//!   halves gives the same total as walking the combined span. Inputs are
//!   whole even-token values, where every fixed-point operation is exact;
//!   at arbitrary raw values truncation may differ by one unit per split.
//! - **Flat-curve reduction**: a single-point curve charges exactly
//!   `rate * amount` in both directions.

use ethers_core::types::I256;
use proptest::prelude::*;

use hubflow_fees::{deposit_fee, refund_fee, Curve, CutoffPoint, FixedPoint};

/// Curves with up to five strictly increasing whole-token cutoffs and
/// arbitrary sub-1.0 rates.
fn curve_strategy() -> impl Strategy<Value = Curve> {
    (
        proptest::collection::btree_set(-1_000_000i64..1_000_000, 0..6),
        proptest::collection::vec(
            -1_000_000_000_000_000_000i64..1_000_000_000_000_000_000,
            6,
        ),
    )
        .prop_map(|(cutoffs, rates)| {
            let points = cutoffs
                .into_iter()
                .zip(rates)
                .map(|(cutoff, rate)| {
                    CutoffPoint::new(
                        FixedPoint::from_int(cutoff as i128),
                        FixedPoint::from_raw(I256::from(rate)),
                    )
                })
                .collect();
            Curve::new(points).expect("btree_set cutoffs are strictly increasing")
        })
}

/// Like [`curve_strategy`], but cutoffs land on even token counts so that
/// combined with even-token balances every intermediate product divides the
/// scale exactly (no truncation anywhere in the walk).
fn even_token_curve_strategy() -> impl Strategy<Value = Curve> {
    (
        proptest::collection::btree_set(-1_000_000i64..1_000_000, 0..6),
        proptest::collection::vec(
            -1_000_000_000_000_000_000i64..1_000_000_000_000_000_000,
            6,
        ),
    )
        .prop_map(|(cutoffs, rates)| {
            let points = cutoffs
                .into_iter()
                .zip(rates)
                .map(|(cutoff, rate)| {
                    CutoffPoint::new(
                        FixedPoint::from_int(cutoff as i128 * 2),
                        FixedPoint::from_raw(I256::from(rate)),
                    )
                })
                .collect();
            Curve::new(points).expect("btree_set cutoffs are strictly increasing")
        })
}

proptest! {
    #[test]
    fn deposit_and_refund_are_antisymmetric(
        curve in curve_strategy(),
        balance_raw in -2_000_000_000_000_000_000_000_000i128
            ..2_000_000_000_000_000_000_000_000i128,
        amount_raw in 0i128..4_000_000_000_000_000_000_000_000i128,
    ) {
        let balance = FixedPoint::from_raw(I256::from(balance_raw));
        let amount = FixedPoint::from_raw(I256::from(amount_raw));

        let deposit = deposit_fee(&curve, balance, amount).unwrap();
        let shifted = balance.checked_add(amount).unwrap();
        let refund = refund_fee(&curve, shifted, amount).unwrap();

        prop_assert_eq!(deposit, -refund);
    }

    #[test]
    fn segment_walks_are_additive(
        curve in even_token_curve_strategy(),
        splits in proptest::collection::vec(-1_000_000i64..1_000_000, 3),
    ) {
        let mut tokens = splits;
        tokens.sort_unstable();
        let low = FixedPoint::from_int(tokens[0] as i128 * 2);
        let mid = FixedPoint::from_int(tokens[1] as i128 * 2);
        let high = FixedPoint::from_int(tokens[2] as i128 * 2);

        let low_to_mid = mid.checked_sub(low).unwrap();
        let mid_to_high = high.checked_sub(mid).unwrap();
        let low_to_high = high.checked_sub(low).unwrap();

        let combined = deposit_fee(&curve, low, low_to_high).unwrap();
        let piecewise = deposit_fee(&curve, low, low_to_mid)
            .unwrap()
            .checked_add(deposit_fee(&curve, mid, mid_to_high).unwrap())
            .unwrap();
        prop_assert_eq!(combined, piecewise);

        let combined_refund = refund_fee(&curve, high, low_to_high).unwrap();
        let piecewise_refund = refund_fee(&curve, high, mid_to_high)
            .unwrap()
            .checked_add(refund_fee(&curve, mid, low_to_mid).unwrap())
            .unwrap();
        prop_assert_eq!(combined_refund, piecewise_refund);

        // The two directions stay mirrored through the splits as well.
        prop_assert_eq!(combined, -combined_refund);
    }

    #[test]
    fn flat_curve_reduces_to_rate_times_amount(
        cutoff in -1_000_000i64..1_000_000,
        rate_raw in -1_000_000_000_000_000_000i64..1_000_000_000_000_000_000,
        balance in -1_000_000i64..1_000_000,
        amount in 0i64..2_000_000,
    ) {
        let rate = FixedPoint::from_raw(I256::from(rate_raw));
        let curve = Curve::new(vec![CutoffPoint::new(
            FixedPoint::from_int(cutoff as i128),
            rate,
        )])
        .unwrap();
        let balance = FixedPoint::from_int(balance as i128);
        let amount = FixedPoint::from_int(amount as i128);
        let expected = rate.mul(amount).unwrap();

        prop_assert_eq!(deposit_fee(&curve, balance, amount).unwrap(), expected);
        prop_assert_eq!(refund_fee(&curve, balance, amount).unwrap(), -expected);
    }
}
