//! Custom error types for the framework

use alloy::primitives::Address;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameworkError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("Wallet error: {message}")]
    Wallet {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Insufficient balance: need {required} {token}, have {available}")]
    InsufficientBalance {
        token: String,
        required: Decimal,
        available: Decimal,
    },

    #[error("Pool validation failed: {pool} - {details}")]
    PoolValidation {
        pool: String,
        details: String,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Transaction failed: {context}")]
    Transaction {
        context: String,
        tx_hash: Option<String>,
        #[source]
        source: Option<anyhow::Error>,
    },
}

pub type FrameworkResult<T> = Result<T, FrameworkError>;
