//! Wallet reporting types

use alloy::primitives::Address;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct TokenBalance {
    pub symbol: String,
    pub address: Address,
    pub balance: Decimal,
}

/// Snapshot of a wallet's state on Base.
#[derive(Debug, Clone)]
pub struct WalletReport {
    pub address: Address,
    pub latest_block: u64,
    pub eth_balance: Decimal,
    pub token_balances: Vec<TokenBalance>,
}
