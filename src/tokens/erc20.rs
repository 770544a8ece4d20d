//! Raw-calldata ERC-20 helpers

use alloy::{
    primitives::{Address, keccak256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use anyhow::{Context, Result};

pub(crate) fn push_address(buf: &mut Vec<u8>, addr: Address) {
    buf.extend_from_slice(&[0u8; 12]);
    buf.extend_from_slice(addr.as_slice());
}

pub(crate) fn push_u256(buf: &mut Vec<u8>, value: U256) {
    buf.extend_from_slice(&value.to_be_bytes::<32>());
}

pub(crate) fn push_bool(buf: &mut Vec<u8>, value: bool) {
    push_u256(buf, U256::from(value as u8));
}

pub fn encode_approve(spender: Address, amount: U256) -> Vec<u8> {
    let mut encoded = keccak256("approve(address,uint256)")[..4].to_vec();
    push_address(&mut encoded, spender);
    push_u256(&mut encoded, amount);
    encoded
}

pub fn encode_balance_of(owner: Address) -> Vec<u8> {
    let mut encoded = keccak256("balanceOf(address)")[..4].to_vec();
    push_address(&mut encoded, owner);
    encoded
}

pub fn encode_allowance(owner: Address, spender: Address) -> Vec<u8> {
    let mut encoded = keccak256("allowance(address,address)")[..4].to_vec();
    push_address(&mut encoded, owner);
    push_address(&mut encoded, spender);
    encoded
}

pub async fn balance_of(provider: &dyn Provider, token: Address, owner: Address) -> Result<U256> {
    let tx = TransactionRequest::default()
        .to(token)
        .input(encode_balance_of(owner).into());

    let result = provider.call(&tx).await
        .context("Failed to call balanceOf")?;
    U256::abi_decode(&result, true)
        .context("Failed to decode balanceOf result")
}

pub async fn allowance(
    provider: &dyn Provider,
    token: Address,
    owner: Address,
    spender: Address,
) -> Result<U256> {
    let tx = TransactionRequest::default()
        .to(token)
        .input(encode_allowance(owner, spender).into());

    let result = provider.call(&tx).await
        .context("Failed to call allowance")?;
    U256::abi_decode(&result, true)
        .context("Failed to decode allowance result")
}

pub async fn total_supply(provider: &dyn Provider, token: Address) -> Result<U256> {
    let data = keccak256("totalSupply()")[..4].to_vec();
    let tx = TransactionRequest::default().to(token).input(data.into());

    let result = provider.call(&tx).await
        .context("Failed to call totalSupply")?;
    U256::abi_decode(&result, true)
        .context("Failed to decode totalSupply result")
}

pub async fn decimals(provider: &dyn Provider, token: Address) -> Result<u8> {
    let data = keccak256("decimals()")[..4].to_vec();
    let tx = TransactionRequest::default().to(token).input(data.into());

    let result = provider.call(&tx).await
        .context("Failed to call decimals")?;
    decode_decimals(&result)
}

/// Decode a `decimals()` return word. Decimal math caps at 10^28, so
/// anything above 28 is rejected rather than silently truncated.
pub(crate) fn decode_decimals(data: &[u8]) -> Result<u8> {
    let raw = U256::abi_decode(data, true)
        .context("Failed to decode decimals result")?;
    if raw > U256::from(28u64) {
        anyhow::bail!("Token reports unsupported decimals: {}", raw);
    }
    Ok(raw.to::<u8>())
}
