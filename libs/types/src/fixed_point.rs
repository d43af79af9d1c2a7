//! WAD-scaled signed fixed-point arithmetic
//!
//! All balances, rates, and fees in the system are `I256` integers scaled by
//! 10^18. The operations here reproduce integer-scaled on-chain math
//! bit-for-bit: every division truncates toward zero, multiplication of two
//! scaled values divides out exactly one factor of the scale, and squaring
//! happens before halving. Reordering any of these diverges under truncation
//! and changes published fee amounts, so the operation order is part of the
//! contract, not an implementation detail.
//!
//! ## Critical Rules
//!
//! 1. **NO FLOATING POINT**: Never use f32/f64 for fee calculations
//! 2. **Truncate toward zero**: Matches EVM signed division exactly
//! 3. **Checked arithmetic**: Overflow and zero divisors surface as typed
//!    errors, never as panics or silent sentinel values

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use ethers_core::types::I256;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fractional decimal digits carried by every [`FixedPoint`].
pub const DECIMALS: u32 = 18;

/// The fixed-point scale factor, 10^18.
static WAD: Lazy<I256> = Lazy::new(|| I256::exp10(DECIMALS as usize));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid decimal literal: {0}")]
    InvalidDecimal(String),

    #[error("decimal has more than 18 fractional digits: {0}")]
    PrecisionLoss(String),
}

pub type Result<T> = std::result::Result<T, MathError>;

/// A signed 10^18-scaled fixed-point value.
///
/// Wraps `I256`, whose division truncates toward zero, the same rounding
/// on-chain integer math uses. Construct with [`FixedPoint::from_int`]
/// for whole-token values, [`FixedPoint::from_raw`] for already-scaled
/// integers, or [`FixedPoint::from_decimal_str`] for configuration input.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FixedPoint(I256);

impl FixedPoint {
    pub fn zero() -> Self {
        Self(I256::zero())
    }

    /// 1.0 in fixed-point, i.e. the scale factor itself.
    pub fn one() -> Self {
        Self(*WAD)
    }

    /// Wrap an already-scaled raw integer.
    pub fn from_raw(raw: I256) -> Self {
        Self(raw)
    }

    /// Scale a whole number of tokens by 10^18.
    ///
    /// Cannot overflow: `i128::MAX * 10^18` is far below `I256::MAX`.
    pub fn from_int(n: i128) -> Self {
        Self(I256::from(n) * *WAD)
    }

    /// Raw (unscaled) 10^n. Used for the `10^decimals` term of the
    /// utilization inversion, which is computed outside the fixed-point
    /// scale.
    pub fn exp10(n: u32) -> Self {
        Self(I256::exp10(n as usize))
    }

    pub fn raw(self) -> I256 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(MathError::Overflow("add"))
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(MathError::Overflow("sub"))
    }

    /// Fixed-point multiplication: `(a * b) / 10^18`, truncating toward zero.
    ///
    /// The full 256-bit product is formed first; dividing out one factor of
    /// the scale keeps the result in the fixed-point domain.
    pub fn mul(self, rhs: Self) -> Result<Self> {
        let product = self
            .0
            .checked_mul(rhs.0)
            .ok_or(MathError::Overflow("mul"))?;
        Ok(Self(product / *WAD))
    }

    /// Fixed-point division: `(a * 10^18) / b`, truncating toward zero.
    ///
    /// A zero divisor is an arithmetic error, never a sentinel value.
    pub fn div(self, rhs: Self) -> Result<Self> {
        if rhs.0.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let scaled = self
            .0
            .checked_mul(*WAD)
            .ok_or(MathError::Overflow("div"))?;
        Ok(Self(scaled / rhs.0))
    }

    /// `x^2 / 2` with the square computed first.
    ///
    /// Halving before squaring yields a different truncated result;
    /// published fee amounts depend on this exact ordering.
    pub fn half_square(self) -> Result<Self> {
        let squared = self.mul(self)?;
        Ok(Self(squared.0 / I256::from(2)))
    }

    /// Parse a decimal string such as `"0.01"` or `"-150.5"` into a scaled
    /// value. Inputs with more than 18 significant fractional digits are
    /// rejected rather than silently rounded.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let decimal = Decimal::from_str(s)
            .map_err(|e| MathError::InvalidDecimal(format!("{s}: {e}")))?
            .normalize();
        if decimal.scale() > DECIMALS {
            return Err(MathError::PrecisionLoss(s.to_string()));
        }
        let mantissa = I256::from(decimal.mantissa());
        let adjusted = mantissa
            .checked_mul(I256::exp10((DECIMALS - decimal.scale()) as usize))
            .ok_or(MathError::Overflow("from_decimal_str"))?;
        Ok(Self(adjusted))
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        Self(I256::zero() - self.0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / *WAD;
        let mut frac = self.0 % *WAD;
        if frac.is_negative() {
            frac = I256::zero() - frac;
        }
        // The sign lives on the whole part unless that part is zero.
        let sign = if self.0.is_negative() && whole.is_zero() {
            "-"
        } else {
            ""
        };
        let frac_digits = format!("{:0>width$}", frac.to_string(), width = DECIMALS as usize);
        write!(f, "{sign}{whole}.{frac_digits}")
    }
}
