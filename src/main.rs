//! Bias-add harness entry point.
//!
//! Runs one timed dispatch with the default configuration and reports the
//! four device timestamps, the kernel cost, the host wall clock, and the
//! verification outcome on stdout. Exits 0 on a fully verified run, 1 on
//! any failure.

use std::process;
use std::time::Instant;

use anyhow::Result;
use clprofile::{dispatch, verify, HarnessConfig, Runtime};
use tracing::{debug, info};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

fn main() {
    setup_logging();

    let wall = Instant::now();
    if let Err(e) = run(wall) {
        println!("{e}");
        for cause in e.chain().skip(1) {
            println!("  caused by: {cause}");
        }
        process::exit(EXIT_FAILURE);
    }
    process::exit(EXIT_SUCCESS);
}

fn run(wall: Instant) -> Result<()> {
    let config = HarnessConfig::default();
    info!(
        "bias-add harness: {} elements, kernel '{}' from {}",
        config.array_size,
        config.kernel_name,
        config.kernel_path.display()
    );

    // Heap-resident host payload: the input is an index ramp, the bias a
    // constant the kernel reads as a scalar.
    let input: Vec<f32> = (0..config.array_size).map(|i| i as f32).collect();
    let bias = vec![10_000.0_f32; config.array_size];

    let runtime = Runtime::create(&config, &input, &bias)?;
    info!("running on {}", runtime.device_name());

    let (output, timing) = dispatch::run(&runtime)?;
    debug!("device breakdown: {timing}");

    println!("command queued at    {} ns", timing.queued_ns);
    println!("command submitted at {} ns", timing.submitted_ns);
    println!("kernel started at    {} ns", timing.start_ns);
    println!("kernel finished at   {} ns", timing.end_ns);
    println!("kernel execute cost  {} ns", timing.exec_ns());
    println!(
        "host wall clock      {:.3} ms",
        wall.elapsed().as_secs_f64() * 1e3
    );

    verify::verify(&input, &bias, &output, config.tolerance)?;
    println!("all {} elements passed verification", output.len());
    Ok(())
}

fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
