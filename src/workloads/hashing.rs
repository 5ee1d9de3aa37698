// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/workloads/hashing.rs
// Version: 1.0.0
//
// This file implements the adaptive hashing workload: bcrypt with a
// cost/work-factor parameter, 2^cost internal rounds, fresh random salt per
// call. Identical inputs therefore hash to different encodings, each of
// which verifies against the input; that is the behavior being measured,
// not nondeterminism to be fixed.
//
// Tree Location:
// - src/workloads/hashing.rs (adaptive hashing workload)
// - Depends on: bcrypt

use crate::Result;
use std::hint::black_box;

/// Supported cost/work-factor range; each step doubles the rounds.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// bcrypt's maximum input length in bytes.
pub const MAX_INPUT_LEN: usize = 72;

/// Capability interface for the hashing workload. Implementations must be
/// callable concurrently from many threads with no external locking.
pub trait AdaptiveHasher: Send + Sync {
    /// Salted one-way hash of `input`, encoded with algorithm identifier,
    /// cost, salt, and digest. Fails on oversized input.
    fn hash(&self, input: &[u8]) -> Result<String>;

    /// Whether `encoded` was produced from `input`.
    fn verify(&self, input: &[u8], encoded: &str) -> Result<bool>;

    fn cost(&self) -> u32;
}

/// bcrypt behind the capability interface, cost fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Result<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(format!(
                "bcrypt cost {} outside supported range {}..={}",
                cost, MIN_COST, MAX_COST
            )
            .into());
        }
        Ok(Self { cost })
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AdaptiveHasher for BcryptHasher {
    fn hash(&self, input: &[u8]) -> Result<String> {
        if input.len() > MAX_INPUT_LEN {
            return Err(format!(
                "bcrypt input of {} bytes exceeds the {}-byte maximum",
                input.len(),
                MAX_INPUT_LEN
            )
            .into());
        }
        Ok(bcrypt::hash(input, self.cost)?)
    }

    fn verify(&self, input: &[u8], encoded: &str) -> Result<bool> {
        Ok(bcrypt::verify(input, encoded)?)
    }

    fn cost(&self) -> u32 {
        self.cost
    }
}

/// Hash the fixed `input` `iterations` times, observing every encoding.
///
/// Same guard contract as the identifier workload: an empty encoding fails
/// the run immediately, hashing errors propagate as-is.
pub fn run_hashing_workload(
    hasher: &dyn AdaptiveHasher,
    input: &[u8],
    iterations: u64,
) -> Result<()> {
    let mut observed = 0u64;
    for _ in 0..iterations {
        let encoded = hasher.hash(input)?;
        if !encoded.is_empty() {
            observed += 1;
        }
        black_box(encoded);
    }
    if observed != iterations {
        return Err("hashing workload produced an empty encoding; measured results must be observable".into());
    }
    Ok(())
}

#[cfg(test)]
pub mod tests_support {
    use super::AdaptiveHasher;
    use crate::Result;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Cheap stand-in: counts calls, encodes the input length.
    #[derive(Debug, Default)]
    pub struct CountingHasher {
        pub calls: AtomicU64,
    }

    impl AdaptiveHasher for CountingHasher {
        fn hash(&self, input: &[u8]) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("$fake$04${}", input.len()))
        }

        fn verify(&self, input: &[u8], encoded: &str) -> Result<bool> {
            Ok(encoded == format!("$fake$04${}", input.len()))
        }

        fn cost(&self) -> u32 {
            4
        }
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::CountingHasher;
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_cost_below_range_is_rejected() {
        let err = BcryptHasher::new(3).unwrap_err();
        assert!(err.to_string().contains("cost 3"));
    }

    #[test]
    fn test_cost_above_range_is_rejected() {
        assert!(BcryptHasher::new(32).is_err());
    }

    #[test]
    fn test_range_boundaries_are_accepted() {
        assert_eq!(BcryptHasher::new(MIN_COST).unwrap().cost(), MIN_COST);
        assert_eq!(BcryptHasher::new(MAX_COST).unwrap().cost(), MAX_COST);
    }

    #[test]
    fn test_default_cost_matches_library_default() {
        assert_eq!(BcryptHasher::default().cost(), bcrypt::DEFAULT_COST);
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        let hasher = BcryptHasher::new(MIN_COST).unwrap();
        let input = [0u8; MAX_INPUT_LEN + 1];
        let err = hasher.hash(&input).unwrap_err();
        assert!(err.to_string().contains("73 bytes"));
    }

    #[test]
    fn test_workload_counts_every_call() {
        let hasher = CountingHasher::default();
        run_hashing_workload(&hasher, b"states", 25).unwrap();
        assert_eq!(hasher.calls.load(Ordering::SeqCst), 25);
    }

    #[test]
    fn test_workload_rejects_empty_encodings() {
        struct EmptyHasher;
        impl AdaptiveHasher for EmptyHasher {
            fn hash(&self, _input: &[u8]) -> crate::Result<String> {
                Ok(String::new())
            }
            fn verify(&self, _input: &[u8], _encoded: &str) -> crate::Result<bool> {
                Ok(false)
            }
            fn cost(&self) -> u32 {
                4
            }
        }
        let err = run_hashing_workload(&EmptyHasher, b"states", 3).unwrap_err();
        assert!(err.to_string().contains("hashing workload"));
    }

    #[test]
    fn test_hashing_error_propagates_unwrapped() {
        let hasher = BcryptHasher::new(MIN_COST).unwrap();
        let oversized = [7u8; 100];
        assert!(run_hashing_workload(&hasher, &oversized, 10).is_err());
    }
}
