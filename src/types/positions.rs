//! Liquidity position lifecycle types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::PoolInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PositionStatus {
    Opened,
    Closed,
    Failed,
}

/// Persistent record of one step of a position's lifecycle.
///
/// Addresses and raw LP units are stored as strings so the JSONL output
/// stays readable without custom deserializers.
#[derive(Debug, Clone, Serialize)]
pub struct PositionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub network: String,
    pub pool: String,
    pub pool_address: String,
    pub stable: bool,
    pub status: PositionStatus,
    pub amount0: Decimal,
    pub amount1: Decimal,
    pub liquidity_raw: String,
    pub tx_hash: Option<String>,
    pub gas_used: Option<u64>,
    pub error_message: Option<String>,
}

impl PositionRecord {
    fn base(pool: &PoolInfo, network: &str, status: PositionStatus) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            network: network.to_string(),
            pool: pool.name.clone(),
            pool_address: format!("{:?}", pool.address),
            stable: pool.is_stable,
            status,
            amount0: Decimal::ZERO,
            amount1: Decimal::ZERO,
            liquidity_raw: "0".to_string(),
            tx_hash: None,
            gas_used: None,
            error_message: None,
        }
    }

    pub fn opened(
        pool: &PoolInfo,
        network: &str,
        amount0: Decimal,
        amount1: Decimal,
        liquidity_raw: String,
        tx_hash: String,
        gas_used: Option<u64>,
    ) -> Self {
        Self {
            amount0,
            amount1,
            liquidity_raw,
            tx_hash: Some(tx_hash),
            gas_used,
            ..Self::base(pool, network, PositionStatus::Opened)
        }
    }

    pub fn closed(
        pool: &PoolInfo,
        network: &str,
        amount0: Decimal,
        amount1: Decimal,
        liquidity_raw: String,
        tx_hash: String,
        gas_used: Option<u64>,
    ) -> Self {
        Self {
            amount0,
            amount1,
            liquidity_raw,
            tx_hash: Some(tx_hash),
            gas_used,
            ..Self::base(pool, network, PositionStatus::Closed)
        }
    }

    pub fn failed(pool: &PoolInfo, network: &str, error: String) -> Self {
        Self {
            error_message: Some(error),
            ..Self::base(pool, network, PositionStatus::Failed)
        }
    }
}

/// Result of a complete demo open/close cycle.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub open: PositionRecord,
    pub close: PositionRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{POOLS_MAINNET, USDC_MAINNET, WETH_MAINNET};
    use rust_decimal_macros::dec;

    fn sample_pool() -> PoolInfo {
        PoolInfo {
            address: POOLS_MAINNET[0].1,
            name: "WETH/USDC".to_string(),
            token0: WETH_MAINNET,
            token1: USDC_MAINNET,
            is_stable: false,
            decimals0: 18,
            decimals1: 6,
        }
    }

    #[test]
    fn opened_record_serializes_expected_fields() {
        let record = PositionRecord::opened(
            &sample_pool(),
            "mainnet",
            dec!(0.001),
            dec!(4.2),
            "12345".to_string(),
            "0xabc".to_string(),
            Some(210_000),
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "Opened");
        assert_eq!(json["pool"], "WETH/USDC");
        assert_eq!(json["liquidity_raw"], "12345");
        assert_eq!(json["tx_hash"], "0xabc");
        assert_eq!(json["gas_used"], 210_000);
        assert!(json["pool_address"].as_str().unwrap().starts_with("0x"));
    }

    #[test]
    fn failed_record_carries_error_and_no_tx() {
        let record = PositionRecord::failed(&sample_pool(), "mainnet", "nonce too low".to_string());
        assert_eq!(record.status, PositionStatus::Failed);
        assert_eq!(record.error_message.as_deref(), Some("nonce too low"));
        assert!(record.tx_hash.is_none());
    }

    #[test]
    fn records_get_unique_ids() {
        let pool = sample_pool();
        let a = PositionRecord::failed(&pool, "mainnet", "x".to_string());
        let b = PositionRecord::failed(&pool, "mainnet", "x".to_string());
        assert_ne!(a.id, b.id);
    }
}
