// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for ParaBench, located at
// the root of the source tree. It exports all public modules and types that
// the benchmark binary and integration tests can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: bench, workloads, utils, help

pub mod bench;
pub mod help;
pub mod utils;
pub mod workloads;

// Re-export commonly used types at the crate root for convenience
pub use crate::bench::harness::Bencher;
pub use crate::bench::registry::{Benchmark, BenchmarkRegistry};
pub use crate::bench::report::{BenchReport, RunRecord};
pub use crate::bench::runner::{StartGate, run_parallel};
pub use crate::workloads::hashing::{AdaptiveHasher, BcryptHasher};
pub use crate::workloads::ident::{RandomIdentifierSource, UuidV4Source};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.0.0 (2025-08-25): Initial library root.
//   - Purpose: Establishes the library root, organizing the project into
//     bench, workloads, utils, and help modules.
//   - Features: Exports key types (Bencher, BenchmarkRegistry, run_parallel,
//     workload traits) for easy access, and defines a common Result type.
//   - Note: This file acts as the public interface, simplifying integration
//     with main.rs and the integration test suite.
