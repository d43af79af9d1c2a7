//! # Hubflow Shared Types
//!
//! Foundation types for the Hubflow balancing-fee engine.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: All financial values are `I256` integers scaled
//!   by 10^18; floating point never appears in a calculation
//! - **Bit-Exact Reproduction**: Rounding behavior (truncation toward zero,
//!   operation ordering) matches on-chain integer math exactly
//! - **Typed Errors**: Overflow, zero divisors, and malformed decimal input
//!   surface as [`MathError`] variants, never as panics or sentinel values
//! - **Explicit Domains**: Chain identity is a value passed by callers, not
//!   an ambient global
//!
//! ## Quick Start
//!
//! ```rust
//! use hubflow_types::FixedPoint;
//!
//! // Parse from decimal strings (primary method for configuration input)
//! let rate = FixedPoint::from_decimal_str("0.01").unwrap();
//! let balance = FixedPoint::from_int(150);
//!
//! // Checked fixed-point arithmetic
//! let fee = rate.mul(balance).unwrap();
//! assert_eq!(fee, FixedPoint::from_decimal_str("1.5").unwrap());
//! ```

pub mod chain;
pub mod fixed_point;

pub use chain::{ids, ChainId, SatelliteTarget};
pub use fixed_point::{FixedPoint, MathError, DECIMALS};
