//! Liquidity position management

pub mod router;
pub mod manager;
pub mod demo;

pub use router::*;
pub use manager::*;
pub use demo::*;
