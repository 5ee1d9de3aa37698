// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bench/runner.rs
// Version: 1.0.0
//
// This file implements the parallel benchmark runner, the engineering core
// of ParaBench. It coordinates a fixed pool of worker threads so they start
// their measured work simultaneously: workers announce readiness on a
// scheduled-barrier, suspend on a one-shot start gate, and report completion
// on a finished-barrier. The harness timer is reset between the ready wait
// and the gate broadcast, so thread startup and scheduling jitter are
// excluded from the timed region.
//
// Tree Location:
// - src/bench/runner.rs (parallel benchmark runner)
// - Depends on: bench/harness, log, std

use crate::Result;
use crate::bench::harness::Bencher;
use log::debug;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

const LOG_TARGET: &str = "parabench::runner";

/// One-shot broadcast signal releasing all waiting workers simultaneously.
///
/// Exactly one closed-to-open transition per gate: the coordinator opens it
/// once, every worker reads it. Not reusable; the runner builds a fresh gate
/// per run.
#[derive(Debug, Default)]
pub struct StartGate {
    opened: Mutex<bool>,
    signal: Condvar,
}

impl StartGate {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(false),
            signal: Condvar::new(),
        }
    }

    /// Open the gate and wake every waiter at once.
    pub fn open(&self) {
        let mut opened = self.opened.lock().unwrap();
        *opened = true;
        self.signal.notify_all();
    }

    /// Block until the gate is open. Returns immediately for late arrivals.
    pub fn wait(&self) {
        let mut opened = self.opened.lock().unwrap();
        while !*opened {
            opened = self.signal.wait(opened).unwrap();
        }
    }

    pub fn is_open(&self) -> bool {
        *self.opened.lock().unwrap()
    }
}

/// Split `bencher.iterations()` evenly across `concurrency` workers, release
/// them simultaneously, and block until all of them have finished.
///
/// Each worker receives `N / P` iterations (integer division): when N is not
/// evenly divisible by P, up to P-1 iterations are silently dropped. That
/// truncation is an accepted approximation inherited from the measured call
/// pattern, not something the runner redistributes.
///
/// The workload must perform exactly the requested number of work units, be
/// callable from P threads concurrently, and must not spawn workers of its
/// own. The first worker error is returned after every worker has finished;
/// there is no retry and no isolation between workers. A workload that never
/// returns blocks the runner forever.
pub fn run_parallel<W>(bencher: &mut Bencher, concurrency: usize, workload: W) -> Result<()>
where
    W: Fn(u64) -> Result<()> + Send + Sync,
{
    assert!(concurrency >= 1, "run_parallel needs at least one worker");

    let share = bencher.iterations() / concurrency as u64;
    let gate = Arc::new(StartGate::new());
    let (ready_tx, ready_rx) = mpsc::channel::<usize>();
    let (done_tx, done_rx) = mpsc::channel::<(usize, Result<()>)>();
    let workload = &workload;

    thread::scope(|scope| -> Result<()> {
        for worker_id in 0..concurrency {
            let gate = Arc::clone(&gate);
            let ready_tx = ready_tx.clone();
            let done_tx = done_tx.clone();
            scope.spawn(move || {
                let _ = ready_tx.send(worker_id);
                gate.wait();
                debug_assert!(gate.is_open(), "workload invoked behind a closed gate");
                let result = workload(share);
                let _ = done_tx.send((worker_id, result));
            });
        }

        // Only worker clones remain; a worker dying early turns the recv
        // below into an error instead of a hang.
        drop(ready_tx);
        drop(done_tx);

        // Scheduled-barrier: no worker's startup latency lands in the timed
        // region because the clock only resets after all P are parked on the
        // gate or about to be.
        for _ in 0..concurrency {
            let worker_id = match ready_rx.recv() {
                Ok(id) => id,
                Err(_) => {
                    // Unpark survivors so the scope can still join them.
                    gate.open();
                    return Err("benchmark worker exited before signalling ready".into());
                }
            };
            debug!(target: LOG_TARGET, "Worker {}: scheduled", worker_id);
        }

        bencher.reset_timer();
        gate.open();
        debug!(target: LOG_TARGET,
            "Gate opened: {} workers x {} iterations", concurrency, share
        );

        // Finished-barrier: the timed region ends when this loop returns,
        // the caller reads the elapsed time right after.
        let mut first_error = None;
        for _ in 0..concurrency {
            let (worker_id, result) = done_rx
                .recv()
                .map_err(|_| "benchmark worker exited before signalling done")?;
            if let Err(err) = result {
                debug!(target: LOG_TARGET, "Worker {}: failed: {}", worker_id, err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            } else {
                debug!(target: LOG_TARGET, "Worker {}: finished", worker_id);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    })
}
