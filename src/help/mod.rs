// ParaBench - Free and Open Source Software Statement
//
// This project, parabench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/mod.rs
// Version: 1.0.0
//
// This file provides the extended benchmarking guide for ParaBench: what
// each benchmark measures, how iteration counts and thread counts interact,
// and practical invocation examples.
//
// Tree Location:
// - src/help/mod.rs (help module, extended guide text)
// - Depends on: none

/// Display the full benchmarking guide
pub fn display_guide() {
    println!("🧪 ParaBench - Micro-Benchmark Harness");
    println!("======================================");
    println!();
    print_benchmark_overview();
    println!();
    print_benchmark_options();
    println!();
    print_examples();
    println!();
    print_result_interpretation();
}

/// Print what each registered benchmark measures
pub fn print_benchmark_overview() {
    println!("BENCHMARKS:");
    println!("  uuid              Sequential random 128-bit identifier generation");
    println!("  uuid-parallel     Same workload, split across worker threads");
    println!("  bcrypt            Sequential adaptive hashing (deliberately slow)");
    println!("  bcrypt-parallel   Same workload, split across worker threads");
    println!();
    println!("Parallel variants divide the iteration count evenly across workers");
    println!("(integer division: a remainder of up to P-1 iterations is dropped),");
    println!("release all workers through a one-shot start gate, and exclude thread");
    println!("startup from the timed region.");
}

/// Print benchmark command options
pub fn print_benchmark_options() {
    println!("OPTIONS:");
    println!("  --bench <NAME>        Run one benchmark by name [default: run all]");
    println!("  --iterations <N>      Total measured iterations [default: 1000]");
    println!("  --threads <P>         Workers for parallel variants; 0 = auto,");
    println!("                        hardware parallelism / 2, leaving headroom");
    println!("                        for the coordinating thread [default: 0]");
    println!("  --cost <C>            bcrypt work factor, 4..=31; each step doubles");
    println!("                        the hashing rounds [default: 12]");
    println!("  --report <FILE>       Write a JSON report of all runs");
    println!("  --list                List registered benchmarks and exit");
}

/// Get invocation examples for different use cases
pub fn get_examples() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Quick identifier throughput check",
            "parabench --bench uuid --iterations 100000",
        ),
        (
            "Parallel identifier scaling on 8 workers",
            "parabench --bench uuid-parallel --iterations 1000000 --threads 8",
        ),
        (
            "Fast bcrypt run (minimum cost)",
            "parabench --bench bcrypt --iterations 200 --cost 4",
        ),
        (
            "Realistic bcrypt cost, few iterations",
            "parabench --bench bcrypt-parallel --iterations 50 --cost 12",
        ),
        (
            "Everything, with a JSON report",
            "parabench --iterations 1000 --cost 4 --report results.json",
        ),
    ]
}

fn print_examples() {
    println!("EXAMPLES:");
    for (label, command) in get_examples() {
        println!("  {}", label);
        println!("    {}", command);
    }
}

/// Print guidance for reading the numbers
pub fn print_result_interpretation() {
    println!("READING RESULTS:");
    println!("  • Identifier generation is allocation-light and RNG-bound; expect");
    println!("    millions of ops per second and near-linear thread scaling.");
    println!("  • bcrypt is designed to be slow: at cost 12 a single hash takes");
    println!("    hundreds of milliseconds of CPU. Keep iteration counts small or");
    println!("    drop --cost to 4 for quick comparisons.");
    println!("  • Parallel throughput below sequential x threads usually means the");
    println!("    machine is oversubscribed, not that the harness added overhead.");
}
