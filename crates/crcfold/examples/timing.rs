//! Average nanoseconds per fresh-engine checksum.
//!
//! Each iteration builds an engine, seeds it with 125, folds a few typed
//! values and finalizes; digests are XOR-folded into a sink so the loop
//! cannot be optimized away.
//!
//! Run with: `cargo run -p crcfold --release --example timing [iterations]`

use std::{hint::black_box, time::Instant};

use crcfold::{Crc32, DispatchInfo, Strategy};

const DEFAULT_ITERATIONS: u64 = 10_000_000;

fn time<F: Fn() -> u32>(label: &str, iterations: u64, f: F) {
  let mut sink = 0u32;
  let start = Instant::now();
  for _ in 0..iterations {
    sink ^= f();
  }
  let elapsed = start.elapsed();
  let avg = elapsed.as_nanos() as f64 / iterations as f64;
  println!("{label:<28} {avg:>8.3} ns/call  (sink {:#010x})", black_box(sink));
}

fn main() {
  let iterations = std::env::args()
    .nth(1)
    .and_then(|arg| arg.parse().ok())
    .unwrap_or(DEFAULT_ITERATIONS);

  println!("dispatch: {}", DispatchInfo::current());
  println!("iterations: {iterations}");

  time("auto: 2.5f32, true", iterations, || {
    Crc32::new()
      .seed(black_box(125))
      .accumulate(black_box(2.5f32))
      .accumulate(black_box(true))
      .finalize()
  });

  for strategy in Strategy::ALL {
    let Ok(engine) = Crc32::with_strategy(strategy) else {
      println!("{strategy}: unavailable");
      continue;
    };
    time(&format!("{strategy}: 2.5f32, true"), iterations, || {
      let mut crc = engine;
      crc.seed(black_box(125)).accumulate(black_box(2.5f32)).accumulate(black_box(true)).finalize()
    });
    time(&format!("{strategy}: 2.5f32, 0.1f32, true"), iterations, || {
      let mut crc = engine;
      crc
        .seed(black_box(125))
        .accumulate(black_box(2.5f32))
        .accumulate(black_box(0.1f32))
        .accumulate(black_box(true))
        .finalize()
    });
  }
}
