// Copyright @yucwang 2026

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use ple63::core::params::{LcgParams, DEFAULT_SEED, PLE63};
use ple63::core::rng::LcgRng;
use ple63::core::skip;

use std::env;

// Walk the recurrence until the seed comes back, so the analytic period
// claim can be checked by brute force on a reduced-width analog.
fn find_period_forward(params: LcgParams, limit: u64) -> Option<u64> {
    let mut rng = LcgRng::with_params(params, DEFAULT_SEED);
    let seed = rng.state();

    let progress = ProgressBar::new(limit);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} steps")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut count: u64 = 0;
    while count < limit {
        rng.step();
        count += 1;
        if rng.state() == seed {
            progress.finish_and_clear();
            return Some(count);
        }
        if count % (1 << 20) == 0 {
            progress.set_position(count);
        }
    }
    progress.finish_and_clear();
    None
}

// Whole-period jumps compose to the identity in O(bits) multiplies, so
// the full 63-bit generator can be checked without walking 2^63 states.
fn check_period_by_jump(params: LcgParams, seed: u64) -> bool {
    let whole = skip::jump_transform(&params, params.mask()); // 2^bits - 1 steps
    let back_to_seed = skip::skip(&params, 1, whole.apply(seed, params.mask()));
    let half = skip::skip(&params, (params.modulus() / 2) as i64, seed);

    back_to_seed == seed && half != seed
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut bits: u32 = 24;
    let mut limit: u64 = 1 << 26;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bits" => {
                i += 1;
                bits = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(24);
            }
            "--limit" => {
                i += 1;
                limit = args
                    .get(i)
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1 << 26);
            }
            other => {
                eprintln!("Usage: {} [--bits N] [--limit N]", args[0]);
                eprintln!("unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if bits < 2 || bits > 32 {
        eprintln!("--bits must be in [2, 32], got {}", bits);
        std::process::exit(1);
    }

    // Masking the 63-bit multiplier preserves mult mod 4 = 1, so the
    // analog keeps the full-period property at any reduced width.
    let reduced = LcgParams::new(bits, PLE63.mult & ((1u64 << bits) - 1), PLE63.add);
    log::info!(
        "Searching the period of the {}-bit analog by iteration, limit = {}.",
        bits,
        limit
    );
    match find_period_forward(reduced, limit) {
        Some(period) => {
            println!(
                "{} period of the {}-bit analog: {} (modulus = {})",
                style("Found").green(),
                bits,
                period,
                reduced.modulus()
            );
        }
        None => {
            println!(
                "{}: no return to the seed within {} steps",
                style("Exhausted").yellow(),
                limit
            );
        }
    }

    log::info!("Checking the 63-bit generator period by jump-ahead.");
    let full = check_period_by_jump(PLE63, DEFAULT_SEED);
    println!(
        "63-bit full-period check via O(log n) jumps: {}",
        if full {
            style("passed").green()
        } else {
            style("FAILED").red()
        }
    );
}
