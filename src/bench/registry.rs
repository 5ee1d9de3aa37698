// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bench/registry.rs
// Version: 1.0.0
//
// This file implements the benchmark registry: an explicit mapping from
// benchmark name to runnable closure, constructed once during process
// startup. The standard registry wires the two workloads (identifier
// generation and adaptive hashing) into sequential and parallel variants
// over injected capability traits, so fakes substitute freely in tests.
//
// Tree Location:
// - src/bench/registry.rs (benchmark registry)
// - Depends on: bench/harness, bench/runner, workloads

use crate::Result;
use crate::bench::harness::{BenchFn, Bencher};
use crate::bench::runner::run_parallel;
use crate::workloads::hashing::{AdaptiveHasher, run_hashing_workload};
use crate::workloads::ident::{RandomIdentifierSource, run_identifier_workload};
use std::sync::Arc;

/// Length of the identifier prefix fed to the hashing workload as its fixed
/// input, in bytes.
const HASH_INPUT_LEN: usize = 8;

/// A named, registered benchmark entry.
pub struct Benchmark {
    pub name: &'static str,
    pub description: &'static str,
    /// Worker threads the entry runs on: 1 for sequential variants.
    pub threads: usize,
    runner: Box<BenchFn>,
}

impl Benchmark {
    pub fn new<F>(name: &'static str, description: &'static str, threads: usize, runner: F) -> Self
    where
        F: Fn(&mut Bencher) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name,
            description,
            threads,
            runner: Box::new(runner),
        }
    }

    pub fn run(&self, bencher: &mut Bencher) -> Result<()> {
        (self.runner)(bencher)
    }
}

/// Registry of runnable benchmarks, built once at startup. No other global
/// mutable state exists in the harness.
#[derive(Default)]
pub struct BenchmarkRegistry {
    entries: Vec<Benchmark>,
}

impl BenchmarkRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, benchmark: Benchmark) {
        self.entries.push(benchmark);
    }

    pub fn get(&self, name: &str) -> Option<&Benchmark> {
        self.entries.iter().find(|b| b.name == name)
    }

    pub fn entries(&self) -> &[Benchmark] {
        &self.entries
    }

    /// The standard four entries: each workload sequentially and through the
    /// parallel runner with `parallelism` workers.
    pub fn standard(
        identifiers: Arc<dyn RandomIdentifierSource>,
        hasher: Arc<dyn AdaptiveHasher>,
        parallelism: usize,
    ) -> Self {
        let mut registry = Self::new();

        let source = Arc::clone(&identifiers);
        registry.register(Benchmark::new(
            "uuid",
            "Sequential random identifier generation",
            1,
            move |b| run_identifier_workload(source.as_ref(), b.iterations()),
        ));

        let source = Arc::clone(&identifiers);
        registry.register(Benchmark::new(
            "uuid-parallel",
            "Parallel random identifier generation",
            parallelism,
            move |b| {
                let source = Arc::clone(&source);
                run_parallel(b, parallelism, move |share| {
                    run_identifier_workload(source.as_ref(), share)
                })
            },
        ));

        let source = Arc::clone(&identifiers);
        let hash = Arc::clone(&hasher);
        registry.register(Benchmark::new(
            "bcrypt",
            "Sequential adaptive hashing of a fixed 8-byte input",
            1,
            move |b| {
                let seed = source.generate();
                run_hashing_workload(hash.as_ref(), &seed.as_bytes()[..HASH_INPUT_LEN], b.iterations())
            },
        ));

        let source = Arc::clone(&identifiers);
        let hash = Arc::clone(&hasher);
        registry.register(Benchmark::new(
            "bcrypt-parallel",
            "Parallel adaptive hashing, fresh fixed input per worker",
            parallelism,
            move |b| {
                let source = Arc::clone(&source);
                let hash = Arc::clone(&hash);
                run_parallel(b, parallelism, move |share| {
                    let seed = source.generate();
                    run_hashing_workload(hash.as_ref(), &seed.as_bytes()[..HASH_INPUT_LEN], share)
                })
            },
        ));

        registry
    }
}
