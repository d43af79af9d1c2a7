//! Error surface of the fee engine

use thiserror::Error;

use hubflow_types::{FixedPoint, MathError};

use crate::curve::CurveError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Caller-contract violation: direction is chosen by the entry point,
    /// never by the sign of the amount.
    #[error("modification amount must be non-negative, got {amount}")]
    NegativeAmount { amount: FixedPoint },

    /// A segment walk asked for the finite value of an open-ended bound.
    /// Unreachable for walks driven by `locate` on a valid curve.
    #[error("segment walk touched an open-ended bound at index {index}")]
    UnboundedSegment { index: isize },
}

pub type Result<T> = std::result::Result<T, FeeError>;
