//! Chain identifiers and satellite pool targets
//!
//! The fee engine itself is chain-agnostic; these types exist so callers can
//! express which execution domain a satellite pool lives on and filter the
//! caller's own chain out of utilization sums explicitly, instead of relying
//! on a hidden module-wide constant.

use serde::{Deserialize, Serialize};

use crate::fixed_point::FixedPoint;

/// EVM-style numeric chain identifier.
pub type ChainId = u64;

/// Well-known chain ids for the execution domains hub pools commonly span.
pub mod ids {
    use super::ChainId;

    pub const MAINNET: ChainId = 1;
    pub const OPTIMISM: ChainId = 10;
    pub const POLYGON: ChainId = 137;
    pub const ARBITRUM: ChainId = 42161;
}

/// Target balance of a satellite ("spoke") pool on a specific chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteTarget {
    pub chain_id: ChainId,
    pub target: FixedPoint,
}

impl SatelliteTarget {
    pub fn new(chain_id: ChainId, target: FixedPoint) -> Self {
        Self { chain_id, target }
    }
}
