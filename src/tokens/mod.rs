//! ERC-20 token interaction helpers

pub mod erc20;

pub use erc20::*;
