// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bench/harness.rs
// Version: 1.0.0
//
// This file implements the measured-run harness for ParaBench. A Bencher
// carries the framework-supplied iteration count and the wall-clock timer
// for one benchmark run; the runner resets the timer once all workers are
// ready so startup and scheduling overhead never lands in the timed region.
//
// Tree Location:
// - src/bench/harness.rs (measured-run harness)
// - Depends on: std

use crate::Result;
use std::time::{Duration, Instant};

/// A runnable benchmark entry: invoked with the harness state for one run.
pub type BenchFn = dyn Fn(&mut Bencher) -> Result<()> + Send + Sync;

/// Per-run measurement state: the total iteration count N and the wall-clock
/// timer bracketing the measured region.
///
/// The timer starts at construction. Callers reset it immediately before the
/// measured call pattern begins (the parallel runner does this itself, after
/// the scheduled-barrier is satisfied) and read `elapsed` immediately after
/// it ends.
#[derive(Debug)]
pub struct Bencher {
    iterations: u64,
    started: Instant,
}

impl Bencher {
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            started: Instant::now(),
        }
    }

    /// Total measured iterations for this run, across all workers.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Restart the wall-clock measurement. One-way: there is no pause.
    pub fn reset_timer(&mut self) {
        self.started = Instant::now();
    }

    /// Wall-clock time since the last reset.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Iterations per second over the elapsed window, 0.0 for an empty run.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            0.0
        }
    }
}
