//! Wallet connection and balance reporting
//!
//! Holds the derived signing identity and answers the read-side questions
//! the framework needs: latest block, ETH balance, tracked token balances.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::Provider,
    signers::local::PrivateKeySigner,
};
use anyhow::Context;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};
use crate::{
    config::Config,
    errors::{FrameworkError, FrameworkResult},
    network::retry::{retry_with_backoff, RetryConfig},
    tokens,
    types::{TokenBalance, WalletReport, TRACKED_TOKENS},
    utils::u256_to_decimal,
    ConcreteProvider,
};

fn parse_private_key(private_key: &str) -> FrameworkResult<PrivateKeySigner> {
    PrivateKeySigner::from_str(private_key).map_err(|e| FrameworkError::Wallet {
        message: "Failed to parse private key".to_string(),
        source: Some(e.into()),
    })
}

/// Derive the public address from a hex-encoded private key.
pub fn derive_address(private_key: &str) -> FrameworkResult<Address> {
    Ok(parse_private_key(private_key)?.address())
}

/// Check that a string is a well-formed Base address.
pub fn validate_address(candidate: &str) -> bool {
    Address::from_str(candidate).is_ok()
}

#[derive(Debug)]
pub struct WalletConnector {
    provider: Arc<ConcreteProvider>,
    pub address: Address,
    pub wallet: EthereumWallet,
}

impl WalletConnector {
    pub fn from_config(config: &Config, provider: Arc<ConcreteProvider>) -> FrameworkResult<Self> {
        let private_key = config.private_key.as_ref().ok_or_else(|| FrameworkError::Config {
            message: "PRIVATE_KEY is required in .env".to_string(),
        })?;

        let signer = parse_private_key(private_key)?;
        let address = signer.address();
        info!("Derived public address: {:?}", address);

        Ok(Self {
            provider,
            address,
            wallet: EthereumWallet::from(signer),
        })
    }

    pub async fn latest_block_number(&self) -> FrameworkResult<u64> {
        retry_with_backoff(
            || async {
                self.provider.get_block_number().await
                    .context("Failed to get block number")
            },
            &RetryConfig::default(),
            "latest block number",
        ).await
    }

    /// ETH balance in ether. Defaults to the connector's own address.
    pub async fn eth_balance(&self, address: Option<Address>) -> FrameworkResult<Decimal> {
        let address = address.unwrap_or(self.address);

        let wei = retry_with_backoff(
            || async {
                self.provider.get_balance(address).await
                    .context("Failed to get balance")
            },
            &RetryConfig::default(),
            &format!("balance of {:?}", address),
        ).await?;

        u256_to_decimal(wei, 18).map_err(|e| FrameworkError::DataParsing {
            context: format!("ETH balance for {:?}", address),
            source: e,
        })
    }

    /// Balance of a single ERC-20 token in human units.
    pub async fn token_balance(&self, token: Address, decimals: u32) -> FrameworkResult<Decimal> {
        let raw = tokens::balance_of(self.provider.as_ref(), token, self.address).await
            .map_err(|e| FrameworkError::Contract {
                contract: token,
                message: "Failed to get token balance".to_string(),
                source: e,
            })?;

        u256_to_decimal(raw, decimals).map_err(|e| FrameworkError::DataParsing {
            context: format!("token balance for {:?}", token),
            source: e,
        })
    }

    /// Full wallet snapshot: latest block, ETH balance, and tracked tokens.
    ///
    /// Failures on individual tokens are logged and skipped so the report
    /// always reflects whatever could be fetched.
    pub async fn wallet_report(&self) -> FrameworkResult<WalletReport> {
        let latest_block = self.latest_block_number().await?;
        let eth_balance = self.eth_balance(None).await?;

        let mut token_balances = Vec::with_capacity(TRACKED_TOKENS.len());
        for (symbol, token, decimals) in TRACKED_TOKENS {
            match self.token_balance(*token, *decimals).await {
                Ok(balance) => token_balances.push(TokenBalance {
                    symbol: symbol.to_string(),
                    address: *token,
                    balance,
                }),
                Err(e) => warn!("⚠️ Skipping {} balance: {}", symbol, e),
            }
        }

        Ok(WalletReport {
            address: self.address,
            latest_block,
            eth_balance,
            token_balances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy::providers::ProviderBuilder;
    use rust_decimal_macros::dec;

    // Well-known development key pair (Hardhat/Anvil account 0)
    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn offline_provider() -> Arc<ConcreteProvider> {
        Arc::new(
            ProviderBuilder::new()
                .on_http("http://127.0.0.1:8545".parse().unwrap())
                .boxed(),
        )
    }

    fn test_config(private_key: Option<&str>) -> Config {
        Config {
            provider: "ALCHEMY".to_string(),
            infura_project_id: None,
            alchemy_project_id: Some("alchemy-id".to_string()),
            private_key: private_key.map(str::to_string),
            network: "mainnet".to_string(),
            enable_liquidity_demo: false,
            demo_pool: "WETH/USDC".to_string(),
            deposit_weth: dec!(0.001),
            demo_hold_secs: 10,
            slippage_tolerance_bps: 50,
            deadline_secs: 1200,
            max_gas_price_gwei: 50,
        }
    }

    #[test]
    fn from_config_derives_known_address() {
        let connector =
            WalletConnector::from_config(&test_config(Some(DEV_KEY)), offline_provider()).unwrap();
        assert_eq!(connector.address, DEV_ADDRESS);
        assert_eq!(connector.address, derive_address(DEV_KEY).unwrap());
    }

    #[test]
    fn from_config_requires_private_key() {
        let err = WalletConnector::from_config(&test_config(None), offline_provider()).unwrap_err();
        assert!(matches!(err, FrameworkError::Config { .. }));
    }

    #[test]
    fn derives_address_from_private_key() {
        assert_eq!(derive_address(DEV_KEY).unwrap(), DEV_ADDRESS);
    }

    #[test]
    fn derive_rejects_malformed_key() {
        let err = derive_address("not-a-key").unwrap_err();
        assert!(err.to_string().contains("Wallet error"));
    }

    #[test]
    fn validate_address_valid() {
        // WETH on Base
        assert!(validate_address("0x4200000000000000000000000000000000000006"));
    }

    #[test]
    fn validate_address_invalid() {
        assert!(!validate_address("0xInvalidAddress123"));
        assert!(!validate_address(""));
        assert!(!validate_address("0x42000000000000000000000000000000000000"));
    }
}
