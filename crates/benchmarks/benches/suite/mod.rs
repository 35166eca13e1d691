//! Benchmark groups, one module per subsystem.

pub mod en_01_signing;
pub mod en_02_pow;
pub mod en_03_miner;
pub mod sponge;
