// Copyright @yucwang 2026

use console::style;

use ple63::core::rng::LcgRng;
use ple63::math::constants::Float;

use std::env;

// Compensated accumulator: (sum, carry).
fn kahan_add(s: (Float, Float), r: Float) -> (Float, Float) {
    let y = r - s.1;
    let t = s.0 + y;
    (t, (t - s.0) - y)
}

fn estimate_mean_sigma(seed: u64, n: u64) -> (Float, Float) {
    let mut rng = LcgRng::new(seed);

    let mut sum = (0.0, 0.0);
    let mut sum_sq = (0.0, 0.0);
    for _ in 0..n {
        let r = rng.next_f64();
        sum = kahan_add(sum, r);
        sum_sq = kahan_add(sum_sq, r * r);
    }

    let mean = sum.0 / n as Float;
    let rms = (sum_sq.0 / n as Float).sqrt();
    let mut variance = (rms - mean) * (rms + mean);
    if variance < 0.0 {
        variance = 0.0;
    }

    (mean, variance)
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut n: u64 = 50_000_000;
    let mut seed: u64 = 1;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--samples" => {
                i += 1;
                n = args
                    .get(i)
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(50_000_000);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(1);
            }
            other => {
                eprintln!("Usage: {} [--samples N] [--seed N]", args[0]);
                eprintln!("unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    log::info!("Estimating mean and variance over {} samples, seed = {}.", n, seed);
    let (mean, variance) = estimate_mean_sigma(seed, n);

    // A uniform [0, 1) stream has mean 1/2 and variance 1/12.
    println!(
        "mean = {:.8} ({} 0.5), variance = {:.8} ({} {:.8})",
        mean,
        style("expect").dim(),
        variance,
        style("expect").dim(),
        1.0 / 12.0
    );
    println!("2 * mean = {:.8}, 12 * variance = {:.8}", 2.0 * mean, 12.0 * variance);
}
