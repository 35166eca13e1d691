//! CPU compute backend using Rayon
//!
//! Each engine owns a dedicated Rayon pool so a search never competes with
//! the global pool and its width matches the requested `nprocs`.

use crate::tasks::partition::partition;
use crate::tasks::signal::StopSignal;
use crate::{resolve_workers, Backend, ComputeError, DeviceInfo};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::ops::Range;

/// CPU-based compute engine using Rayon
pub struct CpuEngine {
    device_info: DeviceInfo,
    pool: ThreadPool,
}

impl CpuEngine {
    /// Engine with `threads` workers; `0` uses every core.
    pub fn with_threads(threads: usize) -> Result<Self, ComputeError> {
        let workers = resolve_workers(threads);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("en-worker-{i}"))
            .build()
            .map_err(|e| ComputeError::InitializationFailed(e.to_string()))?;

        Ok(Self {
            device_info: DeviceInfo {
                name: format!("CPU ({} workers)", workers),
                backend: Backend::Cpu,
                compute_units: workers,
            },
            pool,
        })
    }

    pub fn backend(&self) -> Backend {
        Backend::Cpu
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    /// Worker count.
    pub fn workers(&self) -> usize {
        self.device_info.compute_units
    }

    /// Run `search(worker_id, signal)` on every worker and return the first
    /// hit. The worker that hits stops the others through `signal`; workers
    /// are expected to poll it between iterations.
    pub fn search_first<T, F>(&self, search: F) -> Option<T>
    where
        T: Send,
        F: Fn(usize, &StopSignal) -> Option<T> + Sync + Send,
    {
        let signal = StopSignal::new();
        let workers = self.workers();

        self.pool.install(|| {
            (0..workers).into_par_iter().find_map_any(|worker| {
                if signal.is_stopped() {
                    return None;
                }
                let hit = search(worker, &signal);
                if hit.is_some() {
                    signal.stop();
                }
                hit
            })
        })
    }

    /// Partition `0..count` into contiguous ranges (one per worker, capped
    /// at `count`) and run `scan(worker_id, range)` on each. Results come
    /// back in range order.
    pub fn map_ranges<T, F>(&self, count: u64, scan: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize, Range<u64>) -> T + Sync + Send,
    {
        let ranges = partition(count, self.workers());

        self.pool.install(|| {
            ranges
                .into_par_iter()
                .enumerate()
                .map(|(worker, range)| scan(worker, range))
                .collect()
        })
    }
}
