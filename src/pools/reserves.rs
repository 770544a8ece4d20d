//! Pool reserves fetching and deposit sizing math

use alloy::{
    primitives::{Address, keccak256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use anyhow::{Context, Result};
use crate::{
    errors::FrameworkResult,
    network::retry::{retry_with_backoff, RetryConfig},
};

pub async fn get_pool_reserves(provider: &dyn Provider, pool: Address) -> Result<(U256, U256)> {
    let data = keccak256("getReserves()")[..4].to_vec();
    let tx = TransactionRequest::default()
        .to(pool)
        .input(data.into());

    let result = provider.call(&tx).await
        .context("Failed to call getReserves")?;
    let decoded = <(U256, U256, U256)>::abi_decode(&result, true)
        .context("Failed to decode reserves")?;
    Ok((decoded.0, decoded.1))
}

pub async fn get_pool_reserves_enhanced(
    provider: &dyn Provider,
    pool: Address,
    pool_name: &str,
) -> FrameworkResult<(U256, U256)> {
    let operation = || async {
        get_pool_reserves(provider, pool).await
    };

    retry_with_backoff(
        operation,
        &RetryConfig::default(),
        &format!("get reserves for {}", pool_name),
    ).await
}

/// Size the second deposit leg pro-rata to the pool's current reserves.
///
/// Given `amount_in` of the token behind `reserve_in`, returns the matching
/// amount of the token behind `reserve_out` so the deposit does not shift
/// the pool ratio.
pub fn pro_rata_counterpart(amount_in: U256, reserve_in: U256, reserve_out: U256) -> Result<U256> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        anyhow::bail!("Pool has zero reserves");
    }
    Ok(amount_in * reserve_out / reserve_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::providers::ProviderBuilder;
    use crate::errors::FrameworkError;
    use crate::types::POOLS_MAINNET;

    #[tokio::test]
    async fn reserve_fetch_failure_surfaces_as_network_error() {
        // Nothing listens on this port, so every attempt fails fast.
        let provider = ProviderBuilder::new()
            .on_http("http://127.0.0.1:9".parse().unwrap())
            .boxed();
        let (pool_name, pool_address) = POOLS_MAINNET[0];

        let result = get_pool_reserves_enhanced(&provider, pool_address, pool_name).await;
        match result {
            Err(FrameworkError::Network { retry_count, .. }) => {
                assert_eq!(retry_count, 3);
            }
            other => panic!("expected Network error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn counterpart_follows_reserve_ratio() {
        // 100 WETH-wei against reserves of 1000 / 4_000_000 (price 4000)
        let amount = pro_rata_counterpart(
            U256::from(100u64),
            U256::from(1000u64),
            U256::from(4_000_000u64),
        ).unwrap();
        assert_eq!(amount, U256::from(400_000u64));
    }

    #[test]
    fn counterpart_truncates_toward_zero() {
        let amount = pro_rata_counterpart(
            U256::from(1u64),
            U256::from(3u64),
            U256::from(10u64),
        ).unwrap();
        assert_eq!(amount, U256::from(3u64));
    }

    #[test]
    fn zero_reserves_rejected() {
        assert!(pro_rata_counterpart(U256::from(1u64), U256::ZERO, U256::from(1u64)).is_err());
        assert!(pro_rata_counterpart(U256::from(1u64), U256::from(1u64), U256::ZERO).is_err());
    }
}
