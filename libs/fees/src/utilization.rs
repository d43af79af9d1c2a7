//! Pool utilization (remaining-capacity) calculation
//!
//! A much simpler companion to the fee engine that consumes the same
//! fixed-point domain: how much of the hub pool's equity is still backed by
//! balances across the hub and its satellite pools. The result is the
//! *inverted* ratio, `10^decimals - (balances / equity)`, a
//! remaining-capacity framing the downstream pricing layer depends on, so
//! the inversion is preserved exactly.

use hubflow_types::{ChainId, FixedPoint, SatelliteTarget};

use crate::error::Result;

/// Remaining-capacity utilization of a hub pool.
///
/// Sums the hub balance, the satellite pool balance held on the hub's own
/// chain, and the targets of all satellite pools on *other* chains; the
/// caller's home chain is excluded via the explicit `self_chain_id`
/// parameter, not an ambient constant. The sum is fixed-divided by the hub
/// equity and subtracted from `10^decimals`.
///
/// Zero `hub_equity` is an arithmetic error, never a sentinel result.
pub fn utilization(
    decimals: u32,
    hub_balance: FixedPoint,
    hub_equity: FixedPoint,
    satellite_hub_balance: FixedPoint,
    satellite_targets: &[SatelliteTarget],
    self_chain_id: ChainId,
) -> Result<FixedPoint> {
    let mut numerator = hub_balance.checked_add(satellite_hub_balance)?;
    for satellite in satellite_targets
        .iter()
        .filter(|satellite| satellite.chain_id != self_chain_id)
    {
        numerator = numerator.checked_add(satellite.target)?;
    }
    let ratio = numerator.div(hub_equity)?;
    Ok(FixedPoint::exp10(decimals).checked_sub(ratio)?)
}
