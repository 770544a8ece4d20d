//! Aerodrome Liquidity Framework - Main Entry Point
//!
//! Connects to Base, reports the wallet balance, and optionally runs the
//! liquidity position demo cycle.

use aero_liquidity_framework::*;
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🛩️  Aerodrome Liquidity Framework v0.1.0");
    info!("📋 Configuration:");
    info!("   Provider: {}", config.provider);
    info!("   Network: {}", config.network);
    info!("   Liquidity Demo: {}", config.enable_liquidity_demo);
    if config.enable_liquidity_demo {
        info!("   Demo Pool: {}", config.demo_pool);
        info!("   Deposit Size: {} WETH", config.deposit_weth);
        info!("   Slippage Tolerance: {} bps", config.slippage_tolerance_bps);
        info!("   Max Gas Price: {} gwei", config.max_gas_price_gwei);
        info!("   ⚠️  Real funds will be used on {}", config.network);
    }

    // Connect to Base through the selected provider
    let provider = network::setup_provider(&config).await?;

    // Derive the wallet and report balances
    let connector = wallet::WalletConnector::from_config(&config, provider.clone())?;
    let report = connector.wallet_report().await?;
    utils::print_wallet_report(&report);

    // Optionally run the open/close liquidity cycle
    if config.enable_liquidity_demo {
        let valid_pools = pools::initialize_and_validate_pools(&provider).await?;

        let pool = valid_pools
            .iter()
            .find(|p| p.name == config.demo_pool)
            .ok_or_else(|| anyhow::anyhow!(
                "Demo pool '{}' not found among validated pools", config.demo_pool
            ))?;

        let manager = liquidity::LiquidityManager::new(&config, &connector, provider.clone())?;
        let outcome = liquidity::run_demo_cycle(&manager, &provider, pool, &config).await?;
        utils::print_demo_summary(&outcome);
    }

    info!("\n👋 Done");
    Ok(())
}
