// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
//
// This file is the command-line entry point for ParaBench. It parses and
// validates arguments, initializes logging, builds the benchmark registry
// over the concrete workload implementations, runs the selected benchmarks,
// and optionally writes a JSON report.
//
// Tree Location:
// - src/main.rs (binary entry point)
// - Depends on: clap, log, log4rs, num_cpus, parabench (lib)

use clap::Parser;
use log::{LevelFilter, error, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use parabench::bench::registry::Benchmark;
use parabench::utils::format::FormatUtils;
use parabench::{
    AdaptiveHasher, BcryptHasher, BenchReport, Bencher, BenchmarkRegistry,
    RandomIdentifierSource, Result, RunRecord, UuidV4Source, help,
    workloads::hashing::{MAX_COST, MIN_COST},
};
use std::path::PathBuf;
use std::sync::Arc;

const LOG_TARGET: &str = "parabench::main";

/// Command-line arguments for the ParaBench harness
#[derive(Parser, Debug)]
#[command(
    name = "parabench",
    version,
    about = "Micro-benchmark harness for UUID generation and bcrypt hashing",
    long_about = "ParaBench measures the wall-clock throughput of two primitives, random\n\
                  128-bit identifier generation and bcrypt adaptive hashing, sequentially\n\
                  and across a pool of worker threads released through a one-shot start\n\
                  gate, so thread startup never pollutes the timed region.\n\n\
                  Examples:\n\
                    All benchmarks:   parabench --iterations 1000 --cost 4\n\
                    One benchmark:    parabench --bench uuid-parallel --iterations 1000000\n\
                    JSON report:      parabench --report results.json\n\n\
                  For the extended guide, use: parabench --guide"
)]
pub struct Args {
    /// Run a single benchmark by name; see --list for the registered names
    #[arg(
        long,
        value_name = "NAME",
        help = "Benchmark to run (default: run all registered benchmarks)"
    )]
    pub bench: Option<String>,

    /// Total measured iterations N, split across workers in parallel variants
    /// (integer division; a remainder of up to P-1 iterations is dropped)
    #[arg(
        short = 'n',
        long,
        default_value = "1000",
        value_name = "COUNT",
        help = "Total measured iterations per benchmark"
    )]
    pub iterations: u64,

    /// Worker threads for the parallel variants
    /// 0 = auto: hardware parallelism / 2 (min 1), leaving headroom for the
    /// coordinating thread. A tunable default, not a load-bearing constant.
    #[arg(
        short,
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Worker threads for parallel benchmarks (0 = auto-detect)"
    )]
    pub threads: usize,

    /// bcrypt work factor; each step doubles the hashing rounds
    /// 4 = fastest (testing), 12 = library default, 31 = absurdly slow
    #[arg(
        long,
        default_value = "12",
        value_name = "COST",
        help = "bcrypt cost factor [4..=31; 12 = default, 4 = quick tests]"
    )]
    pub cost: u32,

    /// Write a JSON report of all runs to this path
    #[arg(long, value_name = "FILE", help = "Write a JSON run report to FILE")]
    pub report: Option<PathBuf>,

    /// List registered benchmarks and exit
    #[arg(long, default_value = "false", help = "List registered benchmarks and exit")]
    pub list: bool,

    /// Show the extended benchmarking guide and exit
    #[arg(long, default_value = "false", help = "Show the extended guide and exit")]
    pub guide: bool,
}

impl Args {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(MIN_COST..=MAX_COST).contains(&self.cost) {
            return Err(format!(
                "cost {} is outside the supported range {}..={}",
                self.cost, MIN_COST, MAX_COST
            ));
        }
        Ok(())
    }

    /// Resolved parallel worker count: auto (0) halves the hardware
    /// parallelism to leave headroom for the coordinating thread.
    pub fn resolved_threads(&self) -> usize {
        if self.threads == 0 {
            (num_cpus::get() / 2).max(1)
        } else {
            self.threads
        }
    }
}

fn init_logging() -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} [{l}] {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    if args.guide {
        help::display_guide();
        return Ok(());
    }

    init_logging()?;

    let threads = args.resolved_threads();
    let identifiers: Arc<dyn RandomIdentifierSource> = Arc::new(UuidV4Source);
    let hasher: Arc<dyn AdaptiveHasher> = Arc::new(BcryptHasher::new(args.cost)?);
    let registry = BenchmarkRegistry::standard(identifiers, hasher, threads);

    if args.list {
        for benchmark in registry.entries() {
            println!("{:<16} {}", benchmark.name, benchmark.description);
        }
        return Ok(());
    }

    let selected: Vec<&Benchmark> = match &args.bench {
        Some(name) => match registry.get(name) {
            Some(benchmark) => vec![benchmark],
            None => {
                eprintln!("❌ Error: unknown benchmark '{}' (see --list)", name);
                std::process::exit(1);
            }
        },
        None => registry.entries().iter().collect(),
    };

    info!(target: LOG_TARGET,
        "🧪 Running {} benchmark(s): {} iterations each, {} parallel workers, bcrypt cost {}",
        selected.len(),
        FormatUtils::format_number(args.iterations),
        threads,
        args.cost
    );

    let mut report = BenchReport::new();
    for benchmark in selected {
        let mut bencher = Bencher::new(args.iterations);
        bencher.reset_timer();
        if let Err(err) = benchmark.run(&mut bencher) {
            error!(target: LOG_TARGET, "❌ Benchmark '{}' failed: {}", benchmark.name, err);
            return Err(err);
        }
        let elapsed = bencher.elapsed();
        let ops_per_sec = bencher.throughput();
        info!(target: LOG_TARGET,
            "✅ {}: {} iterations in {} ({})",
            benchmark.name,
            FormatUtils::format_number(args.iterations),
            FormatUtils::format_duration(elapsed),
            FormatUtils::format_throughput(ops_per_sec)
        );
        report.push(RunRecord {
            benchmark: benchmark.name.to_string(),
            iterations: args.iterations,
            thread_count: benchmark.threads,
            elapsed_secs: elapsed.as_secs_f64(),
            ops_per_sec,
        });
    }

    if let Some(path) = &args.report {
        report.save(path)?;
        info!(target: LOG_TARGET, "📋 Report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_out_of_range_fails_validation() {
        let args = Args::parse_from(["parabench", "--cost", "2"]);
        assert!(args.validate().is_err());
        let args = Args::parse_from(["parabench", "--cost", "40"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_defaults_validate() {
        let args = Args::parse_from(["parabench"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.iterations, 1000);
        assert!(args.resolved_threads() >= 1);
    }

    #[test]
    fn test_explicit_thread_count_wins_over_auto() {
        let args = Args::parse_from(["parabench", "--threads", "3"]);
        assert_eq!(args.resolved_threads(), 3);
    }
}
