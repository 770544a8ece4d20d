//! Demo open/close liquidity cycle

use alloy::primitives::U256;
use anyhow::{Context, Result};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use crate::{
    config::Config,
    liquidity::LiquidityManager,
    pools,
    storage,
    types::{DemoOutcome, PoolInfo, PositionRecord, WETH_MAINNET},
    utils,
    ConcreteProvider,
};

/// Run one full position lifecycle against the configured pool: snapshot,
/// open, hold, close, snapshot again. Every lifecycle step is persisted.
pub async fn run_demo_cycle(
    manager: &LiquidityManager,
    provider: &Arc<ConcreteProvider>,
    pool: &PoolInfo,
    config: &Config,
) -> Result<DemoOutcome> {
    if config.network != "mainnet" {
        anyhow::bail!("The liquidity demo uses Base mainnet pool addresses, set NETWORK=mainnet");
    }

    info!("\n🧪 Starting liquidity demo cycle on {}", pool.name);

    let snapshot = pools::snapshot_pool(provider.as_ref(), pool).await?;
    utils::print_pool_snapshot(&pool.name, &snapshot);

    let (amount0, amount1) = size_deposit(provider, pool, config).await?;

    let open = match manager.open_position(pool, amount0, amount1).await {
        Ok(record) => record,
        Err(e) => {
            let failed = PositionRecord::failed(pool, &config.network, e.to_string());
            storage::save_position(&failed)?;
            utils::print_position_record(&failed);
            return Err(e.into());
        }
    };
    storage::save_position(&open)?;
    utils::print_position_record(&open);

    let minted = U256::from_str(&open.liquidity_raw)
        .context("Failed to parse minted liquidity")?;
    if minted.is_zero() {
        anyhow::bail!("Add liquidity confirmed but no LP tokens were minted");
    }

    info!("⏳ Holding position for {}s...", config.demo_hold_secs);
    tokio::time::sleep(Duration::from_secs(config.demo_hold_secs)).await;

    let close = match manager.close_position(pool, minted).await {
        Ok(record) => record,
        Err(e) => {
            let failed = PositionRecord::failed(pool, &config.network, e.to_string());
            storage::save_position(&failed)?;
            utils::print_position_record(&failed);
            return Err(e.into());
        }
    };
    storage::save_position(&close)?;
    utils::print_position_record(&close);

    let final_snapshot = pools::snapshot_pool(provider.as_ref(), pool).await?;
    utils::print_pool_snapshot(&pool.name, &final_snapshot);

    Ok(DemoOutcome { open, close })
}

/// Size both deposit legs: the WETH leg comes from configuration, the
/// counterpart leg pro-rata from current reserves.
async fn size_deposit(
    provider: &Arc<ConcreteProvider>,
    pool: &PoolInfo,
    config: &Config,
) -> Result<(U256, U256)> {
    let (r0, r1) = pools::get_pool_reserves_enhanced(
        provider.as_ref(), pool.address, &pool.name,
    ).await.map_err(|e| anyhow::anyhow!("Failed to get reserves for deposit sizing: {}", e))?;

    let weth_units = utils::decimal_to_u256(config.deposit_weth, 18)
        .context("Failed to convert DEPOSIT_WETH to wei")?;

    if pool.token0 == WETH_MAINNET {
        Ok((weth_units, pools::pro_rata_counterpart(weth_units, r0, r1)?))
    } else if pool.token1 == WETH_MAINNET {
        Ok((pools::pro_rata_counterpart(weth_units, r1, r0)?, weth_units))
    } else {
        anyhow::bail!("Demo pool {} does not contain WETH", pool.name)
    }
}
