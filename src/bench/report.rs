// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bench/report.rs
// Version: 1.0.0
//
// This file implements JSON run reports for ParaBench. A report collects one
// record per benchmark run and is written as pretty-printed JSON when the
// user asks for a report file. This is the only file output of the harness.
//
// Tree Location:
// - src/bench/report.rs (JSON run reports)
// - Depends on: serde, serde_json

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// One benchmark run. `iterations` is the requested N; for parallel runs the
/// executed count is `thread_count * (N / thread_count)`, which the integer
/// division may truncate below N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub benchmark: String,
    pub iterations: u64,
    pub thread_count: usize,
    pub elapsed_secs: f64,
    pub ops_per_sec: f64,
}

/// A full harness invocation's worth of run records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    pub created_unix: u64,
    pub records: Vec<RunRecord>,
}

impl BenchReport {
    pub fn new() -> Self {
        let created_unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            created_unix,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// Write the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a report back from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl Default for BenchReport {
    fn default() -> Self {
        Self::new()
    }
}
