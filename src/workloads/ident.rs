// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/workloads/ident.rs
// Version: 1.0.0
//
// This file implements the random identifier workload: one statistically
// unique 128-bit identifier per call, canonical 8-4-4-4-12 hyphenated hex
// form. The measured loop consumes every produced value through black_box
// and a non-emptiness tally, so the call cannot be elided by the optimizer.
//
// Tree Location:
// - src/workloads/ident.rs (random identifier workload)
// - Depends on: uuid

use crate::Result;
use std::hint::black_box;
use uuid::Uuid;

/// Capability interface for the identifier workload. Implementations must be
/// callable concurrently from many threads with no external locking.
pub trait RandomIdentifierSource: Send + Sync {
    /// Produce one 128-bit identifier in canonical hyphenated textual form.
    fn generate(&self) -> String;
}

/// Version-4 UUIDs from the operating system's entropy source.
#[derive(Debug, Default)]
pub struct UuidV4Source;

impl RandomIdentifierSource for UuidV4Source {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Whether `text` is a canonical 8-4-4-4-12 identifier: 36 characters,
/// hyphens at positions 8/13/18/23, lowercase hex everywhere else.
pub fn is_canonical(text: &str) -> bool {
    if text.len() != 36 {
        return false;
    }
    text.bytes().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        _ => b.is_ascii_digit() || (b'a'..=b'f').contains(&b),
    })
}

/// Generate `iterations` identifiers, observing every one.
///
/// An empty value fails the whole run immediately: the point of the tally is
/// to guarantee the measured call is actually used, so a conforming build
/// cannot discard the work being timed.
pub fn run_identifier_workload(
    source: &dyn RandomIdentifierSource,
    iterations: u64,
) -> Result<()> {
    let mut observed = 0u64;
    for _ in 0..iterations {
        let id = source.generate();
        if !id.is_empty() {
            observed += 1;
        }
        black_box(id);
    }
    if observed != iterations {
        return Err("identifier workload produced an empty value; measured results must be observable".into());
    }
    Ok(())
}

#[cfg(test)]
pub mod tests_support {
    use super::RandomIdentifierSource;

    /// Deterministic stand-in: always the same canonical identifier.
    #[derive(Debug)]
    pub struct FixedSource(pub &'static str);

    impl Default for FixedSource {
        fn default() -> Self {
            Self("00000000-0000-4000-8000-000000000000")
        }
    }

    impl RandomIdentifierSource for FixedSource {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }
}
