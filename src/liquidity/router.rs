//! Aerodrome v2 router calldata encoding and view quotes

use alloy::{
    primitives::{Address, keccak256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use anyhow::{Context, Result};
use crate::{
    tokens::erc20::{push_address, push_bool, push_u256},
    types::{AERODROME_FACTORY, AERODROME_ROUTER},
};

#[allow(clippy::too_many_arguments)]
pub fn encode_add_liquidity(
    token_a: Address,
    token_b: Address,
    stable: bool,
    amount_a_desired: U256,
    amount_b_desired: U256,
    amount_a_min: U256,
    amount_b_min: U256,
    to: Address,
    deadline: U256,
) -> Vec<u8> {
    let mut encoded = keccak256(
        "addLiquidity(address,address,bool,uint256,uint256,uint256,uint256,address,uint256)"
    )[..4].to_vec();

    push_address(&mut encoded, token_a);
    push_address(&mut encoded, token_b);
    push_bool(&mut encoded, stable);
    push_u256(&mut encoded, amount_a_desired);
    push_u256(&mut encoded, amount_b_desired);
    push_u256(&mut encoded, amount_a_min);
    push_u256(&mut encoded, amount_b_min);
    push_address(&mut encoded, to);
    push_u256(&mut encoded, deadline);

    encoded
}

#[allow(clippy::too_many_arguments)]
pub fn encode_remove_liquidity(
    token_a: Address,
    token_b: Address,
    stable: bool,
    liquidity: U256,
    amount_a_min: U256,
    amount_b_min: U256,
    to: Address,
    deadline: U256,
) -> Vec<u8> {
    let mut encoded = keccak256(
        "removeLiquidity(address,address,bool,uint256,uint256,uint256,address,uint256)"
    )[..4].to_vec();

    push_address(&mut encoded, token_a);
    push_address(&mut encoded, token_b);
    push_bool(&mut encoded, stable);
    push_u256(&mut encoded, liquidity);
    push_u256(&mut encoded, amount_a_min);
    push_u256(&mut encoded, amount_b_min);
    push_address(&mut encoded, to);
    push_u256(&mut encoded, deadline);

    encoded
}

/// Expected deposit amounts and minted liquidity for an add at current reserves.
pub async fn quote_add_liquidity(
    provider: &dyn Provider,
    token_a: Address,
    token_b: Address,
    stable: bool,
    amount_a_desired: U256,
    amount_b_desired: U256,
) -> Result<(U256, U256, U256)> {
    let mut encoded = keccak256(
        "quoteAddLiquidity(address,address,bool,address,uint256,uint256)"
    )[..4].to_vec();
    push_address(&mut encoded, token_a);
    push_address(&mut encoded, token_b);
    push_bool(&mut encoded, stable);
    push_address(&mut encoded, AERODROME_FACTORY);
    push_u256(&mut encoded, amount_a_desired);
    push_u256(&mut encoded, amount_b_desired);

    let tx = TransactionRequest::default()
        .to(AERODROME_ROUTER)
        .input(encoded.into());

    let result = provider.call(&tx).await
        .context("Failed to call quoteAddLiquidity")?;
    <(U256, U256, U256)>::abi_decode(&result, true)
        .context("Failed to decode quoteAddLiquidity result")
}

/// Expected withdrawal amounts for burning `liquidity` at current reserves.
pub async fn quote_remove_liquidity(
    provider: &dyn Provider,
    token_a: Address,
    token_b: Address,
    stable: bool,
    liquidity: U256,
) -> Result<(U256, U256)> {
    let mut encoded = keccak256(
        "quoteRemoveLiquidity(address,address,bool,address,uint256)"
    )[..4].to_vec();
    push_address(&mut encoded, token_a);
    push_address(&mut encoded, token_b);
    push_bool(&mut encoded, stable);
    push_address(&mut encoded, AERODROME_FACTORY);
    push_u256(&mut encoded, liquidity);

    let tx = TransactionRequest::default()
        .to(AERODROME_ROUTER)
        .input(encoded.into());

    let result = provider.call(&tx).await
        .context("Failed to call quoteRemoveLiquidity")?;
    <(U256, U256)>::abi_decode(&result, true)
        .context("Failed to decode quoteRemoveLiquidity result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{USDC_MAINNET, WETH_MAINNET};
    use alloy::primitives::address;

    const OWNER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn word(data: &[u8], index: usize) -> &[u8] {
        &data[4 + index * 32..4 + (index + 1) * 32]
    }

    #[test]
    fn add_liquidity_calldata_layout() {
        let deadline = U256::from(1_900_000_000u64);
        let data = encode_add_liquidity(
            WETH_MAINNET,
            USDC_MAINNET,
            false,
            U256::from(1_000u64),
            U256::from(4_000u64),
            U256::from(995u64),
            U256::from(3_980u64),
            OWNER,
            deadline,
        );

        // selector + 9 static words
        assert_eq!(data.len(), 4 + 9 * 32);
        assert_eq!(&word(&data, 0)[12..], WETH_MAINNET.as_slice());
        assert_eq!(&word(&data, 1)[12..], USDC_MAINNET.as_slice());
        assert_eq!(word(&data, 2)[31], 0); // stable = false
        assert_eq!(word(&data, 3), &U256::from(1_000u64).to_be_bytes::<32>());
        assert_eq!(word(&data, 5), &U256::from(995u64).to_be_bytes::<32>());
        assert_eq!(&word(&data, 7)[12..], OWNER.as_slice());
        assert_eq!(word(&data, 8), &deadline.to_be_bytes::<32>());
    }

    #[test]
    fn remove_liquidity_calldata_layout() {
        let data = encode_remove_liquidity(
            WETH_MAINNET,
            USDC_MAINNET,
            true,
            U256::from(12_345u64),
            U256::from(1u64),
            U256::from(2u64),
            OWNER,
            U256::from(1_900_000_000u64),
        );

        assert_eq!(data.len(), 4 + 8 * 32);
        assert_eq!(word(&data, 2)[31], 1); // stable = true
        assert_eq!(word(&data, 3), &U256::from(12_345u64).to_be_bytes::<32>());
        assert_eq!(&word(&data, 6)[12..], OWNER.as_slice());
    }

    #[test]
    fn add_and_remove_selectors_differ() {
        let add = encode_add_liquidity(
            WETH_MAINNET, USDC_MAINNET, false,
            U256::ZERO, U256::ZERO, U256::ZERO, U256::ZERO,
            OWNER, U256::ZERO,
        );
        let remove = encode_remove_liquidity(
            WETH_MAINNET, USDC_MAINNET, false,
            U256::ZERO, U256::ZERO, U256::ZERO,
            OWNER, U256::ZERO,
        );
        assert_ne!(&add[..4], &remove[..4]);
    }
}
