//! Compute backends
//!
//! Only the CPU backend exists; the search kernels are integer bit
//! operations that keep every core busy without device offload.

pub mod cpu;
