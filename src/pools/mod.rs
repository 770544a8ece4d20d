//! Pool management and validation

pub mod info;
pub mod reserves;
pub mod snapshot;
pub mod validation;

pub use info::*;
pub use reserves::*;
pub use snapshot::*;
pub use validation::*;
