// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
//
// This file provides utility functions for formatting benchmark statistics,
// located in the utils subdirectory. It formats throughput, duration, and
// numbers for consistent output in logs and reports.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting benchmark statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format throughput in appropriate units (ops/s, Kops/s, Mops/s)
    pub fn format_throughput(ops_per_sec: f64) -> String {
        if ops_per_sec >= 1_000_000.0 {
            format!("{:.2} Mops/s", ops_per_sec / 1_000_000.0)
        } else if ops_per_sec >= 1_000.0 {
            format!("{:.2} Kops/s", ops_per_sec / 1_000.0)
        } else {
            format!("{:.2} ops/s", ops_per_sec)
        }
    }

    /// Format duration for human-readable output (ms, seconds, minutes)
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs_f64();
        if secs < 1.0 {
            format!("{:.0}ms", secs * 1_000.0)
        } else if secs < 60.0 {
            format!("{:.2}s", secs)
        } else {
            format!("{}m {:02}s", duration.as_secs() / 60, duration.as_secs() % 60)
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_tiers() {
        assert_eq!(FormatUtils::format_throughput(12.5), "12.50 ops/s");
        assert_eq!(FormatUtils::format_throughput(2_500.0), "2.50 Kops/s");
        assert_eq!(FormatUtils::format_throughput(3_000_000.0), "3.00 Mops/s");
    }

    #[test]
    fn test_duration_tiers() {
        assert_eq!(FormatUtils::format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(FormatUtils::format_duration(Duration::from_millis(2500)), "2.50s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(125)), "2m 05s");
    }

    #[test]
    fn test_number_suffixes() {
        assert_eq!(FormatUtils::format_number(950), "950");
        assert_eq!(FormatUtils::format_number(1_500), "1.5K");
        assert_eq!(FormatUtils::format_number(2_500_000), "2.5M");
        assert_eq!(FormatUtils::format_number(3_000_000_000), "3.0B");
    }
}
