//! Data persistence and file operations

pub mod positions;

pub use positions::*;
