use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Satchel workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run this bench target
        #[arg(long)]
        only: Option<String>,

        /// Also write the raw numbers as JSON next to the markdown report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

const BENCHES: &[&str] = &["bag_benchmark", "graph_benchmark"];

/// Workloads reported side by side: (ours, reference).
const COMPARISONS: &[(&str, &str)] = &[
    ("weighted_graph_dijkstra", "petgraph_dijkstra"),
    ("bag_from_iter", "std_hash_map_counts"),
];

#[derive(Debug, Serialize)]
struct Estimate {
    mean_ns: f64,
    ops_per_sec: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            only,
            json,
        } => {
            if !report_only {
                run_benchmarks(quick, only.as_deref())?;
            }
            generate_report(json)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, only: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match only {
        Some(name) => {
            if !BENCHES.contains(&name) {
                anyhow::bail!("unknown bench target `{}` (expected one of {:?})", name, BENCHES);
            }
            vec![name]
        }
        None => BENCHES.to_vec(),
    };

    for bench in targets {
        println!("\n>>> Benchmarking {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {}", bench))?;

        if !status.success() {
            eprintln!("Warning: Benchmark {} failed", bench);
        } else {
            println!("Finished {} in {:.2?}", bench, start.elapsed());
        }
    }

    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{:.0}", ops)
    }
}

fn generate_report(json: bool) -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, Estimate> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;
    for (workload, estimate) in &results {
        writeln!(
            file,
            "| {} | {:.1} ns | {} |",
            workload,
            estimate.mean_ns,
            format_ops(estimate.ops_per_sec)
        )?;
    }

    writeln!(file)?;
    writeln!(file, "## Against reference implementations")?;
    writeln!(file)?;
    writeln!(file, "| Ours | Reference | Relative speed |")?;
    writeln!(file, "|---|---|---|")?;
    for (ours, reference) in COMPARISONS {
        match (results.get(*ours), results.get(*reference)) {
            (Some(a), Some(b)) if b.ops_per_sec > 0.0 => {
                writeln!(
                    file,
                    "| {} | {} | **{:.2}x** |",
                    ours,
                    reference,
                    a.ops_per_sec / b.ops_per_sec
                )?;
            }
            _ => writeln!(file, "| {} | {} | N/A |", ours, reference)?,
        }
    }

    println!("Report written to {}", report_path.display());

    if json {
        let json_path = report_path.with_extension("json");
        fs::write(&json_path, serde_json::to_string_pretty(&results)?)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("Raw estimates written to {}", json_path.display());
    }
    Ok(())
}

fn read_mean_ns(path: &Path) -> Option<f64> {
    let content = fs::read_to_string(path).ok()?;
    let json = serde_json::from_str::<serde_json::Value>(&content).ok()?;
    json.get("mean")?.get("point_estimate")?.as_f64()
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, Estimate>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../workload/new/estimates.json
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(workload) = run_dir
            .parent()
            .and_then(|w| w.file_name())
            .and_then(|s| s.to_str())
        else {
            continue;
        };

        if let Some(mean_ns) = read_mean_ns(&path).filter(|t| *t > 0.0) {
            results.insert(
                workload.to_string(),
                Estimate {
                    mean_ns,
                    ops_per_sec: 1e9 / mean_ns,
                },
            );
        }
    }
}
