//! Framework configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::errors::FrameworkError;

// Configuration constants
pub const MIN_DEPOSIT_WETH: Decimal = dec!(0.0001);
pub const MAX_DEPOSIT_WETH: Decimal = dec!(10.0);
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50; // 0.5%
pub const MAX_SLIPPAGE_BPS: u32 = 500; // 5%
pub const DEFAULT_GAS_PRICE_GWEI: u32 = 50;
pub const MAX_GAS_PRICE_GWEI: u32 = 200;
pub const DEFAULT_DEADLINE_SECS: u64 = 1200;
pub const RECEIPT_TIMEOUT_SECS: u64 = 90;

// Sanity range for an implied WETH/USD pool price
pub const MIN_REASONABLE_WETH_PRICE: Decimal = dec!(100);
pub const MAX_REASONABLE_WETH_PRICE: Decimal = dec!(100000);

/// RPC backend selected through the `PROVIDER` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcProvider {
    Infura,
    Alchemy,
}

impl FromStr for RpcProvider {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFURA" => Ok(RpcProvider::Infura),
            "ALCHEMY" => Ok(RpcProvider::Alchemy),
            other => Err(FrameworkError::Config {
                message: format!("Unsupported provider '{}' specified in .env", other),
            }),
        }
    }
}

impl fmt::Display for RpcProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcProvider::Infura => write!(f, "Infura"),
            RpcProvider::Alchemy => write!(f, "Alchemy"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Provider selection
    pub provider: String,
    pub infura_project_id: Option<String>,
    pub alchemy_project_id: Option<String>,
    pub private_key: Option<String>,
    pub network: String,
    // Liquidity demo configuration
    pub enable_liquidity_demo: bool,
    pub demo_pool: String,
    pub deposit_weth: Decimal,
    pub demo_hold_secs: u64,
    pub slippage_tolerance_bps: u32,
    pub deadline_secs: u64,
    pub max_gas_price_gwei: u32,
}

impl Config {
    pub fn load() -> Self {
        Self {
            provider: env::var("PROVIDER").unwrap_or_else(|_| "ALCHEMY".to_string()),
            infura_project_id: env::var("INFURA_PROJECT_ID").ok(),
            alchemy_project_id: env::var("ALCHEMY_PROJECT_ID").ok(),
            private_key: env::var("PRIVATE_KEY").ok(),
            network: env::var("NETWORK").unwrap_or_else(|_| "mainnet".to_string()),
            enable_liquidity_demo: env::var("ENABLE_LIQUIDITY_DEMO")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            demo_pool: env::var("DEMO_POOL").unwrap_or_else(|_| "WETH/USDC".to_string()),
            deposit_weth: clamp_deposit(
                env::var("DEPOSIT_WETH")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(dec!(0.001)),
            ),
            demo_hold_secs: env::var("DEMO_HOLD_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            slippage_tolerance_bps: env::var("SLIPPAGE_TOLERANCE_BPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SLIPPAGE_BPS)
                .min(MAX_SLIPPAGE_BPS),
            deadline_secs: env::var("DEADLINE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DEADLINE_SECS),
            max_gas_price_gwei: env::var("MAX_GAS_PRICE_GWEI")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_GAS_PRICE_GWEI)
                .min(MAX_GAS_PRICE_GWEI),
        }
    }

    /// Parsed form of the raw `PROVIDER` value.
    pub fn rpc_provider(&self) -> Result<RpcProvider, FrameworkError> {
        RpcProvider::from_str(&self.provider)
    }
}

/// Keep the demo deposit inside the allowed WETH range. Loading never
/// fails on a bad size; the value is pulled back to the nearest bound.
pub(crate) fn clamp_deposit(value: Decimal) -> Decimal {
    value.max(MIN_DEPOSIT_WETH).min(MAX_DEPOSIT_WETH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_env_spellings() {
        assert_eq!(RpcProvider::from_str("INFURA").unwrap(), RpcProvider::Infura);
        assert_eq!(RpcProvider::from_str("ALCHEMY").unwrap(), RpcProvider::Alchemy);
        assert_eq!(RpcProvider::from_str("infura").unwrap(), RpcProvider::Infura);
        assert_eq!(RpcProvider::from_str(" alchemy ").unwrap(), RpcProvider::Alchemy);
    }

    #[test]
    fn provider_rejects_unsupported_value() {
        let err = RpcProvider::from_str("QUICKNODE").unwrap_err();
        assert!(err.to_string().contains("Unsupported provider"));
    }

    #[test]
    fn deposit_clamped_to_bounds() {
        assert_eq!(clamp_deposit(dec!(100)), MAX_DEPOSIT_WETH);
        assert_eq!(clamp_deposit(dec!(0)), MIN_DEPOSIT_WETH);
        assert_eq!(clamp_deposit(dec!(0.5)), dec!(0.5));
    }

    #[test]
    fn provider_display_names() {
        assert_eq!(RpcProvider::Infura.to_string(), "Infura");
        assert_eq!(RpcProvider::Alchemy.to_string(), "Alchemy");
    }
}
