//! RPC provider selection and connection setup

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use crate::{
    config::{Config, RpcProvider},
    errors::{FrameworkError, FrameworkResult},
    network::retry::{retry_with_backoff, RetryConfig},
    ConcreteProvider,
};

/// Build the RPC endpoint URL for the configured provider and network.
pub fn build_rpc_url(config: &Config) -> FrameworkResult<String> {
    let provider = config.rpc_provider()?;

    let host = match config.network.as_str() {
        "mainnet" => "base-mainnet",
        "sepolia" => "base-sepolia",
        other => {
            return Err(FrameworkError::Config {
                message: format!("Unsupported network '{}', expected mainnet or sepolia", other),
            });
        }
    };

    match provider {
        RpcProvider::Infura => {
            let project_id = config.infura_project_id.as_ref().ok_or_else(|| {
                FrameworkError::Config {
                    message: "INFURA_PROJECT_ID is required when PROVIDER=INFURA".to_string(),
                }
            })?;
            Ok(format!("https://{}.infura.io/v3/{}", host, project_id))
        }
        RpcProvider::Alchemy => {
            let project_id = config.alchemy_project_id.as_ref().ok_or_else(|| {
                FrameworkError::Config {
                    message: "ALCHEMY_PROJECT_ID is required when PROVIDER=ALCHEMY".to_string(),
                }
            })?;
            Ok(format!("https://{}.g.alchemy.com/v2/{}", host, project_id))
        }
    }
}

/// Connect to Base through the selected provider and verify the connection.
pub async fn setup_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let rpc_provider = config.rpc_provider()?;
    let rpc_url = build_rpc_url(config)?;
    info!("Using {} provider.", rpc_provider);

    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(rpc_url.parse()?)
            .boxed()
    );

    info!("🔗 Testing connection to Base network...");
    let block = retry_with_backoff(
        || async {
            provider.get_block_number().await
                .context("Failed to get block number")
        },
        &RetryConfig {
            max_attempts: 5,
            initial_delay_ms: 500,
            max_delay_ms: 10000,
            exponential_base: 2.0,
        },
        "Base network connection",
    ).await
    .map_err(|e| {
        warn!("⚠️ Network connection attempt failed: {}", e);
        anyhow::anyhow!("Failed to connect to the Base blockchain: {}", e)
    })?;

    info!("✅ Successfully connected to the Base blockchain at block {}", block);
    Ok(provider)
}
