//! Aerodrome Liquidity Framework - Liquidity position management for Base network
//!
//! Connects to the Base blockchain through Infura or Alchemy, reports wallet
//! balances, and manages the open/close lifecycle of liquidity positions on
//! Aerodrome Finance pools.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod wallet;
pub mod tokens;
pub mod pools;
pub mod liquidity;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{FrameworkError, FrameworkResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
