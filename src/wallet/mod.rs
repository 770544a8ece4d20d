//! Wallet connection and account management

pub mod connector;

pub use connector::*;
