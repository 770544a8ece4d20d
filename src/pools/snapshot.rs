//! Human-unit pool snapshots

use alloy::providers::Provider;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::warn;
use crate::{
    config::{MAX_REASONABLE_WETH_PRICE, MIN_REASONABLE_WETH_PRICE},
    pools::get_pool_reserves_enhanced,
    tokens,
    types::{PoolInfo, PoolSnapshot, USDBC_MAINNET, USDC_MAINNET, WETH_MAINNET},
    utils::u256_to_decimal,
};

/// Fetch reserves and LP supply, and derive the implied WETH/USD price when
/// the pool pairs WETH with a USD token.
pub async fn snapshot_pool(provider: &dyn Provider, pool: &PoolInfo) -> Result<PoolSnapshot> {
    let (r0, r1) = get_pool_reserves_enhanced(provider, pool.address, &pool.name).await
        .map_err(|e| anyhow::anyhow!("Failed to get reserves for snapshot: {}", e))?;

    let reserve0 = u256_to_decimal(r0, pool.decimals0 as u32)
        .context("Failed to parse reserve0")?;
    let reserve1 = u256_to_decimal(r1, pool.decimals1 as u32)
        .context("Failed to parse reserve1")?;

    let total_supply = tokens::total_supply(provider, pool.address).await
        .context("Failed to get LP total supply")?;

    let weth_price_usd = implied_weth_price(pool, reserve0, reserve1);

    Ok(PoolSnapshot {
        reserve0,
        reserve1,
        weth_price_usd,
        lp_total_supply_raw: total_supply.to_string(),
    })
}

fn implied_weth_price(pool: &PoolInfo, reserve0: Decimal, reserve1: Decimal) -> Option<Decimal> {
    let is_usd = |token| token == USDC_MAINNET || token == USDBC_MAINNET;

    let (weth_amount, usd_amount) = if pool.token0 == WETH_MAINNET && is_usd(pool.token1) {
        (reserve0, reserve1)
    } else if pool.token1 == WETH_MAINNET && is_usd(pool.token0) {
        (reserve1, reserve0)
    } else {
        return None;
    };

    if weth_amount.is_zero() {
        return None;
    }

    let price = usd_amount / weth_amount;
    if price < MIN_REASONABLE_WETH_PRICE || price > MAX_REASONABLE_WETH_PRICE {
        warn!("⚠️ Implied WETH price ${} for {} is outside the sanity range", price, pool.name);
        return None;
    }

    Some(price)
}
