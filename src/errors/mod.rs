//! Error types and result aliases

pub mod framework_error;

pub use framework_error::*;
