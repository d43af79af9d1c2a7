//! # Hubflow Fees - Balancing-Fee Engine
//!
//! ## Purpose
//!
//! Deterministic numerical engine for the fee charged when a liquidity
//! pool's running balance moves across a configured piecewise-linear rate
//! curve. Moving the balance through a range means integrating the rate
//! function over that range; crossing curve cutoffs splits the integral at
//! each boundary and the engine sums the exact closed-form partial
//! integrals. All arithmetic is 10^18-scaled fixed point reproducing the
//! rounding of integer-scaled on-chain math bit-for-bit.
//!
//! ## Integration Points
//!
//! - **Input Sources**: curve configuration (validated at load time),
//!   pool balances and equity from chain-state readers
//! - **Output Destinations**: pricing and quoting layers sizing deposits
//!   and refunds
//! - **Precision**: `I256` scaled by 10^18, truncation toward zero, no
//!   floating point anywhere
//!
//! ## Architecture Role
//!
//! ```text
//! caller ──► engine ──► interval locator ──► segment integrator
//!                │                                  │
//!                └────────── sums partials ◄────────┘
//! ```
//!
//! Everything is pure, synchronous computation: curves are immutable after
//! construction and may be read concurrently without synchronization.

pub mod curve;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod interval;
pub mod utilization;

pub use curve::{Curve, CurveError, CutoffPoint};
pub use engine::{deposit_fee, refund_fee};
pub use error::{FeeError, Result};
pub use integrator::integrate;
pub use interval::{bounds, locate, Bound, Interval};
pub use utilization::utilization;

/// Re-exported foundation types for downstream convenience.
pub use hubflow_types::{ids, ChainId, FixedPoint, MathError, SatelliteTarget};
