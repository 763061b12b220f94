//! # Scheduler Simulation Driver
//!
//! Runs a workload file through the configured scheduling policy and
//! prints the resulting execution trace.

use std::env;
use std::path::PathBuf;
use std::process;

use sim_driver::{load_workload, run_workload, SimReport};

struct DriverConfig {
    workload: PathBuf,
    json: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let workload = load_workload(&config.workload).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let report = run_workload(&workload).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_report(&report);
    }
}

fn parse_args(args: &[String]) -> Result<DriverConfig, String> {
    let mut workload: Option<PathBuf> = None;
    let mut json = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--workload" | "-w" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --workload".to_string());
                }
                workload = Some(PathBuf::from(&args[i]));
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    let workload = workload.ok_or_else(|| "Missing required --workload".to_string())?;
    Ok(DriverConfig { workload, json })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} --workload <file.json> [--json]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -w, --workload <file>  Workload description to simulate");
    eprintln!("      --json             Emit the report as JSON");
}

fn print_report(report: &SimReport) {
    println!("PID        START          END");
    for entry in &report.trace {
        println!(
            "{:<8} {:>7} {:>12}",
            entry.process_id, entry.start, entry.end
        );
    }
    println!();
    for completion in &report.completions {
        println!(
            "process {} finished at tick {}",
            completion.process_id, completion.finish_time
        );
    }
}
