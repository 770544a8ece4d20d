//! Liquidity position lifecycle management

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::eth::TransactionRequest,
    transports::http::{Client, Http},
};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};
use crate::{
    config::{Config, RECEIPT_TIMEOUT_SECS},
    errors::{FrameworkError, FrameworkResult},
    liquidity::router,
    tokens,
    types::{symbol_for, PoolInfo, PositionRecord, AERODROME_ROUTER},
    utils::{apply_slippage_bps, u256_to_decimal},
    wallet::WalletConnector,
    ConcreteProvider,
};

const APPROVE_GAS_LIMIT: u64 = 100_000;
const ADD_LIQUIDITY_GAS_LIMIT: u64 = 500_000;
const REMOVE_LIQUIDITY_GAS_LIMIT: u64 = 500_000;

/// Opens and closes liquidity positions against Aerodrome v2 pools.
///
/// Reads go through the shared provider; transactions are signed locally
/// with the connector's wallet.
pub struct LiquidityManager {
    provider: Arc<ConcreteProvider>,
    wallet: EthereumWallet,
    owner: Address,
    rpc_url: String,
    network: String,
    slippage_bps: u32,
    deadline_secs: u64,
    max_gas_price_gwei: u32,
}

impl LiquidityManager {
    pub fn new(
        config: &Config,
        connector: &WalletConnector,
        provider: Arc<ConcreteProvider>,
    ) -> FrameworkResult<Self> {
        let rpc_url = crate::network::build_rpc_url(config)?;

        Ok(Self {
            provider,
            wallet: connector.wallet.clone(),
            owner: connector.address,
            rpc_url,
            network: config.network.clone(),
            slippage_bps: config.slippage_tolerance_bps,
            deadline_secs: config.deadline_secs,
            max_gas_price_gwei: config.max_gas_price_gwei,
        })
    }

    /// Deposit the desired amounts into the pool and mint LP tokens.
    pub async fn open_position(
        &self,
        pool: &PoolInfo,
        amount0_desired: U256,
        amount1_desired: U256,
    ) -> FrameworkResult<PositionRecord> {
        let legs = [
            (pool.token0, amount0_desired, pool.decimals0),
            (pool.token1, amount1_desired, pool.decimals1),
        ];
        for (token, required, decimals) in legs {
            self.check_balance(token, required, decimals as u32).await?;
        }

        let (quoted0, quoted1, expected_liquidity) = router::quote_add_liquidity(
            self.provider.as_ref(),
            pool.token0,
            pool.token1,
            pool.is_stable,
            amount0_desired,
            amount1_desired,
        ).await.map_err(|e| FrameworkError::Contract {
            contract: AERODROME_ROUTER,
            message: format!("Failed to quote add liquidity for {}", pool.name),
            source: e,
        })?;

        if expected_liquidity.is_zero() {
            return Err(FrameworkError::PoolValidation {
                pool: pool.name.clone(),
                details: "Deposit too small, quoted liquidity is zero".to_string(),
            });
        }

        let min0 = apply_slippage_bps(quoted0, self.slippage_bps);
        let min1 = apply_slippage_bps(quoted1, self.slippage_bps);

        self.ensure_allowance(pool.token0, amount0_desired).await?;
        self.ensure_allowance(pool.token1, amount1_desired).await?;

        let lp_before = self.lp_balance(pool).await?;

        let deadline = self.deadline()?;
        let calldata = router::encode_add_liquidity(
            pool.token0,
            pool.token1,
            pool.is_stable,
            amount0_desired,
            amount1_desired,
            min0,
            min1,
            self.owner,
            deadline,
        );

        info!("🚀 Adding liquidity to {} ({} / {})",
            pool.name, symbol_for(pool.token0), symbol_for(pool.token1));
        let (tx_hash, gas_used) = self.send_transaction(
            AERODROME_ROUTER,
            calldata,
            ADD_LIQUIDITY_GAS_LIMIT,
            &format!("addLiquidity {}", pool.name),
        ).await?;

        let lp_after = self.lp_balance(pool).await?;
        let minted = lp_after.checked_sub(lp_before).unwrap_or_default();

        let amount0 = self.to_human(quoted0, pool.decimals0, "amount0")?;
        let amount1 = self.to_human(quoted1, pool.decimals1, "amount1")?;

        Ok(PositionRecord::opened(
            pool,
            &self.network,
            amount0,
            amount1,
            minted.to_string(),
            tx_hash,
            gas_used,
        ))
    }

    /// Burn `liquidity` LP tokens and withdraw both legs.
    pub async fn close_position(
        &self,
        pool: &PoolInfo,
        liquidity: U256,
    ) -> FrameworkResult<PositionRecord> {
        if liquidity.is_zero() {
            return Err(FrameworkError::PoolValidation {
                pool: pool.name.clone(),
                details: "No liquidity to remove".to_string(),
            });
        }

        let (quoted0, quoted1) = router::quote_remove_liquidity(
            self.provider.as_ref(),
            pool.token0,
            pool.token1,
            pool.is_stable,
            liquidity,
        ).await.map_err(|e| FrameworkError::Contract {
            contract: AERODROME_ROUTER,
            message: format!("Failed to quote remove liquidity for {}", pool.name),
            source: e,
        })?;

        let min0 = apply_slippage_bps(quoted0, self.slippage_bps);
        let min1 = apply_slippage_bps(quoted1, self.slippage_bps);

        // The pool contract is its own LP token
        self.ensure_allowance(pool.address, liquidity).await?;

        let deadline = self.deadline()?;
        let calldata = router::encode_remove_liquidity(
            pool.token0,
            pool.token1,
            pool.is_stable,
            liquidity,
            min0,
            min1,
            self.owner,
            deadline,
        );

        info!("🔥 Removing {} raw LP units from {}", liquidity, pool.name);
        let (tx_hash, gas_used) = self.send_transaction(
            AERODROME_ROUTER,
            calldata,
            REMOVE_LIQUIDITY_GAS_LIMIT,
            &format!("removeLiquidity {}", pool.name),
        ).await?;

        let amount0 = self.to_human(quoted0, pool.decimals0, "amount0")?;
        let amount1 = self.to_human(quoted1, pool.decimals1, "amount1")?;

        Ok(PositionRecord::closed(
            pool,
            &self.network,
            amount0,
            amount1,
            liquidity.to_string(),
            tx_hash,
            gas_used,
        ))
    }

    async fn check_balance(
        &self,
        token: Address,
        required: U256,
        decimals: u32,
    ) -> FrameworkResult<()> {
        let available = tokens::balance_of(self.provider.as_ref(), token, self.owner).await
            .map_err(|e| FrameworkError::Contract {
                contract: token,
                message: "Failed to get token balance".to_string(),
                source: e,
            })?;

        if available < required {
            return Err(FrameworkError::InsufficientBalance {
                token: symbol_for(token),
                required: self.to_human(required, decimals as u8, "required amount")?,
                available: self.to_human(available, decimals as u8, "available amount")?,
            });
        }
        Ok(())
    }

    async fn ensure_allowance(&self, token: Address, amount: U256) -> FrameworkResult<()> {
        let current = tokens::allowance(
            self.provider.as_ref(), token, self.owner, AERODROME_ROUTER,
        ).await.map_err(|e| FrameworkError::Contract {
            contract: token,
            message: "Failed to get allowance".to_string(),
            source: e,
        })?;

        if current >= amount {
            debug!("Allowance for {} already sufficient", symbol_for(token));
            return Ok(());
        }

        info!("🔓 Approving {} for the Aerodrome router", symbol_for(token));
        let calldata = tokens::encode_approve(AERODROME_ROUTER, amount);
        let (tx_hash, _) = self.send_transaction(
            token,
            calldata,
            APPROVE_GAS_LIMIT,
            &format!("approve {}", symbol_for(token)),
        ).await?;
        info!("✅ Approval confirmed: {}", tx_hash);
        Ok(())
    }

    async fn lp_balance(&self, pool: &PoolInfo) -> FrameworkResult<U256> {
        tokens::balance_of(self.provider.as_ref(), pool.address, self.owner).await
            .map_err(|e| FrameworkError::Contract {
                contract: pool.address,
                message: format!("Failed to get LP balance for {}", pool.name),
                source: e,
            })
    }

    /// Signing provider for state-changing calls. The gas, nonce, and
    /// chain-id fillers must stay attached: without them the wallet filler
    /// rejects the request as incomplete before it ever reaches the node.
    fn signing_provider(&self) -> FrameworkResult<impl Provider<Http<Client>>> {
        Ok(ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(self.wallet.clone())
            .on_http(self.rpc_url.parse().map_err(|e| FrameworkError::Config {
                message: format!("Invalid RPC URL: {}", e),
            })?))
    }

    async fn send_transaction(
        &self,
        to: Address,
        calldata: Vec<u8>,
        gas_limit: u64,
        context: &str,
    ) -> FrameworkResult<(String, Option<u64>)> {
        let signer_provider = self.signing_provider()?;

        let tx = TransactionRequest::default()
            .from(self.owner)
            .to(to)
            .input(calldata.into())
            .gas_limit(gas_limit.into())
            .max_fee_per_gas(self.max_gas_price_gwei as u128 * 1_000_000_000)
            .max_priority_fee_per_gas(1_000_000_000); // 1 gwei

        let pending_tx = signer_provider
            .send_transaction(tx)
            .await
            .map_err(|e| FrameworkError::Transaction {
                context: context.to_string(),
                tx_hash: None,
                source: Some(e.into()),
            })?;

        let tx_hash = format!("{:?}", pending_tx.tx_hash());
        info!("📡 Transaction sent: {} ({})", tx_hash, context);

        tokio::select! {
            result = pending_tx.get_receipt() => {
                match result {
                    Ok(receipt) => {
                        if !receipt.status() {
                            return Err(FrameworkError::Transaction {
                                context: format!("{} reverted on-chain", context),
                                tx_hash: Some(tx_hash),
                                source: None,
                            });
                        }
                        info!("✅ Transaction confirmed: {:?}", receipt.transaction_hash);
                        Ok((tx_hash, Some(receipt.gas_used as u64)))
                    }
                    Err(e) => Err(FrameworkError::Transaction {
                        context: context.to_string(),
                        tx_hash: Some(tx_hash),
                        source: Some(e.into()),
                    }),
                }
            }
            _ = tokio::time::sleep(Duration::from_secs(RECEIPT_TIMEOUT_SECS)) => {
                Err(FrameworkError::Transaction {
                    context: format!("{} timed out after {} seconds", context, RECEIPT_TIMEOUT_SECS),
                    tx_hash: Some(tx_hash),
                    source: None,
                })
            }
        }
    }

    fn deadline(&self) -> FrameworkResult<U256> {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|e| FrameworkError::DataParsing {
                context: "system clock before unix epoch".to_string(),
                source: e.into(),
            })?;
        Ok(U256::from(now.as_secs() + self.deadline_secs))
    }

    fn to_human(&self, value: U256, decimals: u8, context: &str) -> FrameworkResult<rust_decimal::Decimal> {
        u256_to_decimal(value, decimals as u32).map_err(|e| FrameworkError::DataParsing {
            context: context.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, wallet::WalletConnector};
    use rust_decimal_macros::dec;

    // Well-known development key pair (Hardhat/Anvil account 0)
    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_config() -> Config {
        Config {
            provider: "ALCHEMY".to_string(),
            infura_project_id: None,
            alchemy_project_id: Some("alchemy-id".to_string()),
            private_key: Some(DEV_KEY.to_string()),
            network: "mainnet".to_string(),
            enable_liquidity_demo: true,
            demo_pool: "WETH/USDC".to_string(),
            deposit_weth: dec!(0.001),
            demo_hold_secs: 10,
            slippage_tolerance_bps: 50,
            deadline_secs: 1200,
            max_gas_price_gwei: 50,
        }
    }

    fn test_manager() -> LiquidityManager {
        let config = test_config();
        let provider: Arc<ConcreteProvider> = Arc::new(
            ProviderBuilder::new()
                .on_http("http://127.0.0.1:8545".parse().unwrap())
                .boxed()
        );
        let connector = WalletConnector::from_config(&config, provider.clone()).unwrap();
        LiquidityManager::new(&config, &connector, provider).unwrap()
    }

    #[test]
    fn signing_provider_builds_with_fillers() {
        // The full filler stack (gas, nonce, chain id, wallet) must compose;
        // a wallet-only provider cannot complete an EIP-1559 request.
        let manager = test_manager();
        assert!(manager.signing_provider().is_ok());
    }

    #[test]
    fn invalid_rpc_url_is_config_error() {
        let mut manager = test_manager();
        manager.rpc_url = "not a url".to_string();
        match manager.signing_provider() {
            Err(FrameworkError::Config { message }) => {
                assert!(message.contains("Invalid RPC URL"));
            }
            _ => panic!("expected Config error for malformed RPC URL"),
        }
    }

    #[test]
    fn deadline_is_in_the_future() {
        let manager = test_manager();
        let deadline = manager.deadline().unwrap();
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert!(deadline >= U256::from(now + 1199));
    }
}
