//! Display and printing utilities

use tracing::info;
use crate::types::{DemoOutcome, PoolSnapshot, PositionRecord, PositionStatus, WalletReport};

pub fn print_wallet_report(report: &WalletReport) {
    info!("\n💼 Wallet Report");
    info!("   Address: {:?}", report.address);
    info!("   Latest Base block: {}", report.latest_block);
    info!("   ETH balance: {} ETH", report.eth_balance);
    for token in &report.token_balances {
        info!("   {} balance: {}", token.symbol, token.balance);
    }
}

pub fn print_pool_snapshot(pool_name: &str, snapshot: &PoolSnapshot) {
    info!("\n🏊 Pool snapshot: {}", pool_name);
    info!("   Reserve0: {}", snapshot.reserve0);
    info!("   Reserve1: {}", snapshot.reserve1);
    match snapshot.weth_price_usd {
        Some(price) => info!("   Implied WETH price: ${:.2}", price),
        None => info!("   Implied WETH price: n/a"),
    }
    info!("   LP total supply (raw): {}", snapshot.lp_total_supply_raw);
}

pub fn print_position_record(record: &PositionRecord) {
    let label = match record.status {
        PositionStatus::Opened => "📌 Position opened",
        PositionStatus::Closed => "📭 Position closed",
        PositionStatus::Failed => "💥 Position step failed",
    };
    info!("\n{}", label);
    info!("   Pool: {} ({})", record.pool, record.pool_address);
    info!("   Amounts: {} / {}", record.amount0, record.amount1);
    info!("   Liquidity (raw LP units): {}", record.liquidity_raw);
    if let Some(tx) = &record.tx_hash {
        info!("   Tx: {}", tx);
    }
    if let Some(gas) = record.gas_used {
        info!("   Gas used: {}", gas);
    }
    if let Some(err) = &record.error_message {
        info!("   Error: {}", err);
    }
}

pub fn print_demo_summary(outcome: &DemoOutcome) {
    info!("\n📊 Liquidity Demo Summary");
    info!("   Pool: {}", outcome.open.pool);
    info!("   Deposited: {} / {}", outcome.open.amount0, outcome.open.amount1);
    info!("   Withdrawn: {} / {}", outcome.close.amount0, outcome.close.amount1);
    info!("   LP minted (raw): {}", outcome.open.liquidity_raw);
    info!(
        "   Open tx: {} | Close tx: {}",
        outcome.open.tx_hash.as_deref().unwrap_or("-"),
        outcome.close.tx_hash.as_deref().unwrap_or("-"),
    );
}
