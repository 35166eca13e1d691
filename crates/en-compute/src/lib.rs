//! # EN-Compute: Worker Pools for Search Workloads
//!
//! The PoW nonce search and the bundle index miner are both embarrassingly
//! parallel scans. This crate owns the worker contexts they run in:
//!
//! - a CPU engine backed by a dedicated Rayon pool, sized from `nprocs`
//!   (`0` meaning every core),
//! - contiguous range partitioning of an index space,
//! - a first-hit search harness with cooperative cancellation.
//!
//! ## Subsystem Compute Requirements
//!
//! | Subsystem | Workload Type | Harness |
//! |-----------|---------------|---------|
//! | EN-02 (Proof of Work) | 64-lane Curl transforms | `search_first` |
//! | EN-03 (Bundle Miner) | Kerl + normalize per index | `map_ranges` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use en_compute::create_engine;
//!
//! let engine = create_engine(0)?;
//! println!("Using: {}", engine.device_info().name);
//! ```

pub mod backends;
pub mod tasks;

pub use backends::cpu::CpuEngine;
pub use tasks::partition::partition;

use thiserror::Error;

/// Compute backend kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// CPU with Rayon parallelism
    Cpu,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Cpu => write!(f, "CPU (Rayon)"),
        }
    }
}

/// Compute engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    #[error("Backend initialization failed: {0}")]
    InitializationFailed(String),
}

/// Device information
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub name: String,
    pub backend: Backend,
    /// Worker threads in the pool
    pub compute_units: usize,
}

/// Resolve a requested worker count: `0` means every available core, and
/// no request gets more workers than there are cores.
pub fn resolve_workers(requested: usize) -> usize {
    let cores = num_cpus::get().max(1);
    if requested == 0 {
        cores
    } else {
        requested.min(cores)
    }
}

/// Create the CPU engine with `threads` workers (`0` = all cores).
pub fn create_engine(threads: usize) -> Result<CpuEngine, ComputeError> {
    let engine = CpuEngine::with_threads(threads)?;
    tracing::debug!(
        "Using CPU compute: {} workers (Rayon)",
        engine.device_info().compute_units
    );
    Ok(engine)
}
