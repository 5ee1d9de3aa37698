// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bench/mod.rs
// Version: 1.0.0
//
// This file declares the bench module, the measurement infrastructure of
// ParaBench. It provides the measured-run harness, the parallel benchmark
// runner, the benchmark registry, and JSON run reports.
//
// Tree Location:
// - src/bench/mod.rs (bench module entry point)
// - Submodules: harness, runner, registry, report

pub mod harness;
pub mod registry;
pub mod report;
pub mod runner;

// Re-export key bench types and functions
pub use harness::Bencher;
pub use registry::{Benchmark, BenchmarkRegistry};
pub use report::{BenchReport, RunRecord};
pub use runner::{StartGate, run_parallel};

// Changelog:
// - v1.0.0 (2025-08-25): Initial bench module creation.
//   - Purpose: Provides the measurement infrastructure for ParaBench,
//     including the wall-clock harness, the gate/barrier parallel runner,
//     the startup-built benchmark registry, and JSON result reports.
//   - Note: The runner is the engineering core; everything else exists to
//     invoke it and record what it measured.
