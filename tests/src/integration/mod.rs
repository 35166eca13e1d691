//! Cross-subsystem tests driven through the engine facade.

pub mod pipeline;
pub mod properties;
pub mod scenarios;
