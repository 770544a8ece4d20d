//! Core data types and structures

pub mod addresses;
pub mod pools;
pub mod positions;
pub mod wallet;

pub use addresses::*;
pub use pools::*;
pub use positions::*;
pub use wallet::*;
