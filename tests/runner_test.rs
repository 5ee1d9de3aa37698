// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/runner_test.rs
// Version: 1.0.0
//
// This file contains property tests for the parallel benchmark runner. It
// verifies the work-splitting arithmetic, the simultaneous release through
// the start gate, and the all-workers-done guarantee on return.
//
// Tree Location:
// - tests/runner_test.rs (parallel runner property tests)
// - Depends on: bench/runner, bench/harness

use parabench::{Bencher, run_parallel};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_even_split_across_workers() {
    println!("🧪 Testing even split: N=100, P=4");

    let calls = Arc::new(AtomicUsize::new(0));
    let units = Arc::new(AtomicU64::new(0));
    let mut bencher = Bencher::new(100);

    let calls_ref = Arc::clone(&calls);
    let units_ref = Arc::clone(&units);
    run_parallel(&mut bencher, 4, move |share| {
        assert_eq!(share, 25, "each of 4 workers must receive 100/4 iterations");
        calls_ref.fetch_add(1, Ordering::SeqCst);
        units_ref.fetch_add(share, Ordering::SeqCst);
        Ok(())
    })
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(units.load(Ordering::SeqCst), 100, "zero iterations dropped");
}

#[test]
fn test_remainder_is_silently_dropped() {
    println!("🧪 Testing truncating split: N=101, P=4");

    let units = Arc::new(AtomicU64::new(0));
    let mut bencher = Bencher::new(101);

    let units_ref = Arc::clone(&units);
    run_parallel(&mut bencher, 4, move |share| {
        assert_eq!(share, 25, "101/4 floors to 25");
        units_ref.fetch_add(share, Ordering::SeqCst);
        Ok(())
    })
    .unwrap();

    // 1 of the 101 requested iterations is never executed.
    assert_eq!(units.load(Ordering::SeqCst), 100);
}

#[test]
fn test_single_worker_matches_sequential_call_count() {
    println!("🧪 Testing degenerate case: P=1");

    let total_iterations = 57u64;

    // Sequential reference: the full N in one call.
    let sequential_units = {
        let mut executed = 0u64;
        for _ in 0..total_iterations {
            executed += 1;
        }
        executed
    };

    let parallel_units = Arc::new(AtomicU64::new(0));
    let calls = Arc::new(AtomicUsize::new(0));
    let mut bencher = Bencher::new(total_iterations);

    let units_ref = Arc::clone(&parallel_units);
    let calls_ref = Arc::clone(&calls);
    run_parallel(&mut bencher, 1, move |share| {
        calls_ref.fetch_add(1, Ordering::SeqCst);
        for _ in 0..share {
            units_ref.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1, "one gate-open, one worker");
    assert_eq!(parallel_units.load(Ordering::SeqCst), sequential_units);
}

#[test]
fn test_all_workers_released_together() {
    println!("🧪 Testing simultaneous release through the start gate");

    // Every invocation rendezvouses with the others before returning: this
    // only terminates if all P workloads are in flight at the same time,
    // i.e. the gate released everyone rather than serializing the pool.
    let workers = 4;
    let started = Arc::new(AtomicUsize::new(0));
    let mut bencher = Bencher::new(workers as u64);

    let started_ref = Arc::clone(&started);
    run_parallel(&mut bencher, workers, move |_share| {
        started_ref.fetch_add(1, Ordering::SeqCst);
        let deadline = Instant::now() + Duration::from_secs(10);
        while started_ref.load(Ordering::SeqCst) < workers {
            assert!(
                Instant::now() < deadline,
                "workers were not released simultaneously"
            );
            thread::yield_now();
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(started.load(Ordering::SeqCst), workers);
}

#[test]
fn test_runner_returns_only_after_every_worker_is_done() {
    println!("🧪 Testing completion barrier: return implies all workers done");

    let workers = 4;
    let completed = Arc::new(AtomicUsize::new(0));
    let mut bencher = Bencher::new(400);

    let completed_ref = Arc::clone(&completed);
    run_parallel(&mut bencher, workers, move |_share| {
        // Slow workers: the runner must still wait for every one of them.
        thread::sleep(Duration::from_millis(25));
        completed_ref.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
    .unwrap();

    assert_eq!(completed.load(Ordering::SeqCst), workers);
}

#[test]
fn test_one_failing_worker_does_not_stop_the_others() {
    println!("🧪 Testing failure propagation without isolation");

    let workers = 4;
    let calls = Arc::new(AtomicUsize::new(0));
    let mut bencher = Bencher::new(40);

    let calls_ref = Arc::clone(&calls);
    let result = run_parallel(&mut bencher, workers, move |_share| {
        if calls_ref.fetch_add(1, Ordering::SeqCst) == 0 {
            Err("first worker failed".into())
        } else {
            Ok(())
        }
    });

    assert!(result.is_err());
    assert_eq!(
        calls.load(Ordering::SeqCst),
        workers,
        "remaining workers still ran their share"
    );
}

#[test]
fn test_startup_latency_is_excluded_from_timing() {
    println!("🧪 Testing that the timer resets after the scheduled-barrier");

    // The Bencher starts its clock at construction. Sleep before the run so
    // any implementation that fails to reset after the ready wait reports a
    // grossly inflated elapsed time.
    let mut bencher = Bencher::new(4);
    thread::sleep(Duration::from_millis(200));

    run_parallel(&mut bencher, 2, |_share| Ok(())).unwrap();

    assert!(
        bencher.elapsed() < Duration::from_millis(150),
        "pre-run setup time leaked into the measured region: {:?}",
        bencher.elapsed()
    );
}
