use clap::Parser;

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use contest_check::{assert_check, catch_failure, debug_print, warn_check};

/// Demo of the catch-and-collect stress workflow: run a buggy routine
/// against random cases and report the seeds that failed.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
  /// Number of random cases to run
  #[clap(short, long, default_value_t = 100)]
  cases: u64,

  /// Base seed for case generation
  #[clap(short, long, default_value_t = 0)]
  seed: u64,
}

// Deliberately wrong: only adjacent duplicates collapse, so any value
// that reappears after a gap is counted twice.
fn distinct_fast(values: &[u32]) -> usize {
  let mut count = 0;
  for (i, v) in values.iter().enumerate() {
    if i == 0 || values[i - 1] != *v {
      count += 1;
    }
  }
  count
}

fn distinct_slow(values: &[u32]) -> usize {
  let mut sorted = values.to_vec();
  sorted.sort_unstable();
  sorted.dedup();
  sorted.len()
}

fn run_case(seed: u64) {
  let mut rng = StdRng::seed_from_u64(seed);
  let len = rng.gen_range(1..16);
  let values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..8)).collect();
  warn_check!(values.len() < 16);

  let fast = distinct_fast(&values);
  let slow = distinct_slow(&values);
  if fast != slow {
    debug_print!(values);
  }
  assert_check!(fast == slow, "distinct_fast disagrees with brute force");
}

fn main() -> Result<()> {
  let args = Args::parse();
  ensure!(args.cases > 0, "need at least one case");

  if cfg!(feature = "checks") {
    // the macros already print the diagnostic line
    std::panic::set_hook(Box::new(|_| {}));
  }

  let mut failing = Vec::new();
  for case in 0..args.cases {
    let seed = args.seed.wrapping_add(case);
    if let Err(failure) = catch_failure(|| run_case(seed)) {
      failing.push((seed, failure));
    }
  }

  if failing.is_empty() {
    println!("{} cases passed", args.cases);
  } else {
    println!("{} of {} cases failed", failing.len(), args.cases);
    for (seed, failure) in &failing {
      println!("  seed {seed}: {failure}");
    }
  }
  Ok(())
}
