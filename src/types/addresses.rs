//! Base network addresses for tokens, pools, and the Aerodrome router

use alloy::primitives::{Address, address};

// Token addresses on Base mainnet
pub const WETH_MAINNET: Address = address!("4200000000000000000000000000000000000006");
pub const USDC_MAINNET: Address = address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
pub const USDBC_MAINNET: Address = address!("d9aAEc86B65D86f6A7B5B1b0c42FFA531710b6CA");
pub const AERO_MAINNET: Address = address!("940181a94A35A4569E4529A3CDfB74e38FD98631");

// Aerodrome v2 router and default pool factory on Base mainnet
pub const AERODROME_ROUTER: Address = address!("cF77a3Ba9A5CA399B7c97c74d54e5b1Beb874E43");
pub const AERODROME_FACTORY: Address = address!("420DD381b31aEf6683db6B902084cB0FFECe40Da");

// Pools eligible for the liquidity demo
pub const POOLS_MAINNET: &[(&str, Address)] = &[
    ("WETH/USDC", address!("cDAC0d6c6C59727a65F871236188350531885C43")),
    ("vAMM-WETH/USDbC", address!("B4885Bc63399BF5518b994c1d0C153334Ee579D0")),
];

// Tokens included in the wallet balance report: (symbol, address, decimals)
pub const TRACKED_TOKENS: &[(&str, Address, u32)] = &[
    ("WETH", WETH_MAINNET, 18),
    ("USDC", USDC_MAINNET, 6),
    ("AERO", AERO_MAINNET, 18),
];

/// Human-readable symbol for a known token address, short hex otherwise.
pub fn symbol_for(token: Address) -> String {
    match token {
        WETH_MAINNET => "WETH".to_string(),
        USDC_MAINNET => "USDC".to_string(),
        USDBC_MAINNET => "USDbC".to_string(),
        AERO_MAINNET => "AERO".to_string(),
        other => {
            let hex = format!("{:?}", other);
            format!("{}…", &hex[..10])
        }
    }
}
