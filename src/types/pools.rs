//! Pool-related types and structures

use alloy::primitives::Address;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct PoolInfo {
    pub address: Address,
    pub name: String,
    pub token0: Address,
    pub token1: Address,
    pub is_stable: bool,
    pub decimals0: u8,
    pub decimals1: u8,
}

/// Human-unit view of a pool's reserves at a point in time.
#[derive(Debug, Clone)]
pub struct PoolSnapshot {
    pub reserve0: Decimal,
    pub reserve1: Decimal,
    /// Implied WETH price in USD, when the pool pairs WETH with a USD token
    /// and the value passes the sanity range.
    pub weth_price_usd: Option<Decimal>,
    /// Raw LP token total supply in minimal units.
    pub lp_total_supply_raw: String,
}
