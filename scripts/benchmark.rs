// scripts/benchmark.rs
use chrono::{Days, NaiveDate};
use fast_digital::math_utils::Timer;
use fast_digital::mc::mc_engine::{mc_convergence, McConfig};
use fast_digital::output;
use fast_digital::{DigitalOption, MarketState, OptionType};
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::process::Command;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Command::new("rustc")
                .arg("--version")
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown Rust version".to_string()),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    time_ms: f64,
    value: f64,
    analytic_value: f64,
}

impl BenchmarkResult {
    fn abs_error(&self) -> f64 {
        (self.value - self.analytic_value).abs()
    }
}

fn run_benchmarks(
    option: &DigitalOption,
    market: &MarketState,
) -> Result<Vec<BenchmarkResult>, Box<dyn Error>> {
    let mut results = Vec::new();
    let mut timer = Timer::new();

    let repeats = 100_000;
    timer.start();
    let mut analytic = 0.0;
    for _ in 0..repeats {
        analytic = option.value(market)?;
    }
    let per_call_ms = timer.elapsed_ms() / repeats as f64;
    results.push(BenchmarkResult {
        name: format!("{} analytic (per call)", option.option_type()),
        paths: 0,
        time_ms: per_call_ms,
        value: analytic,
        analytic_value: analytic,
    });

    for &paths in &[10_000, 100_000, 1_000_000] {
        info!(paths, "running Monte Carlo benchmark");
        timer.start();
        let price = option.value_mc(market, &McConfig { num_paths: paths, seed: 4242 })?;
        results.push(BenchmarkResult {
            name: format!("{} Monte Carlo", option.option_type()),
            paths,
            time_ms: timer.elapsed_ms(),
            value: price,
            analytic_value: analytic,
        });
    }

    let counts = [10_000, 20_000, 50_000, 100_000, 200_000, 500_000];
    timer.start();
    let rows = mc_convergence(option, market, &counts, 4242)?;
    let sweep_ms = timer.elapsed_ms();
    let last = rows.last().ok_or("empty convergence sweep")?;
    results.push(BenchmarkResult {
        name: format!("Parallel sweep ({} runs)", rows.len()),
        paths: counts.iter().sum(),
        time_ms: sweep_ms,
        value: last.mc_price,
        analytic_value: last.analytic_price,
    });

    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> std::io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(file, "# Benchmark Date: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;

    writeln!(file, "Benchmark,Paths,Time_ms,Value,Analytic_Value,Abs_Error")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.4},{:.8},{:.8},{:.8}",
            result.name,
            result.paths,
            result.time_ms,
            result.value,
            result.analytic_value,
            result.abs_error()
        )?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("fast-digital Benchmark Suite");
    println!("============================\n");

    let system_info = SystemInfo::gather();
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  Rayon Threads: {}\n", system_info.rayon_threads);

    let value_date = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("invalid value date")?;
    let option = DigitalOption::new(value_date + Days::new(365), 100.0, OptionType::DigitalCall)?;
    let market = MarketState::new(value_date, 100.0, 0.0, 0.2, 0.05);

    let results = run_benchmarks(&option, &market)?;

    println!(
        "{:<35} {:>10} {:>12} {:>12} {:>12}",
        "Benchmark", "Paths", "Time (ms)", "Value", "Abs Error"
    );
    println!("{:-<85}", "");
    for result in &results {
        println!(
            "{:<35} {:>10} {:>12.4} {:>12.6} {:>12.2e}",
            result.name,
            result.paths,
            result.time_ms,
            result.value,
            result.abs_error()
        );
    }

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename)?;

    let cores = system_info.cpu_cores.to_string();
    let threads = system_info.rayon_threads.to_string();
    let summary_file = format!("benchmark_summary_{}.csv", timestamp);
    output::write_summary_to_csv(
        &summary_file,
        &[
            ("os", system_info.os.as_str()),
            ("cpu_cores", cores.as_str()),
            ("rayon_threads", threads.as_str()),
            ("rust_version", system_info.rust_version.as_str()),
        ],
    )?;

    println!("\nResults saved to: {} and {}", filename, summary_file);
    println!("Run: cargo run --bin benchmark --release");
    Ok(())
}
