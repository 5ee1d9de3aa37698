// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/workloads/mod.rs
// Version: 1.0.0
//
// This file declares the workloads module: the two measured primitives of
// ParaBench. Both are thin wrappers over external libraries, exposed behind
// capability traits so the concurrency core never depends on a concrete
// implementation.
//
// Tree Location:
// - src/workloads/mod.rs (workloads module entry point)
// - Submodules: ident, hashing

pub mod hashing;
pub mod ident;

// Re-export key workload types and functions
pub use hashing::{AdaptiveHasher, BcryptHasher, run_hashing_workload};
pub use ident::{RandomIdentifierSource, UuidV4Source, run_identifier_workload};
