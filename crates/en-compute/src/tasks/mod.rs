//! Search task building blocks

pub mod partition;
pub mod signal;
