//! Seed-and-fold harness: fresh engine, fixed seed, a few typed values.

use core::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use crcfold::{Crc32, DispatchInfo, Le, Strategy};

fn two_values(mut crc: Crc32) -> u32 {
  crc.seed(black_box(125)).accumulate(Le(black_box(2.5f32))).accumulate(black_box(true)).finalize()
}

fn three_values(mut crc: Crc32) -> u32 {
  crc
    .seed(black_box(125))
    .accumulate(Le(black_box(2.5f32)))
    .accumulate(Le(black_box(0.1f32)))
    .accumulate(black_box(true))
    .finalize()
}

fn harness(c: &mut Criterion) {
  eprintln!("dispatch: {}", DispatchInfo::current());

  let mut group = c.benchmark_group("crc32/harness");
  for strategy in Strategy::ALL {
    let Ok(engine) = Crc32::with_strategy(strategy) else {
      eprintln!("{strategy}: unavailable, skipped");
      continue;
    };
    eprintln!("{strategy}: {}", engine.backend_name());

    group.bench_function(format!("{strategy}/2-values"), |b| b.iter(|| two_values(black_box(engine))));
    group.bench_function(format!("{strategy}/3-values"), |b| b.iter(|| three_values(black_box(engine))));
  }
  group.bench_function("auto/2-values", |b| b.iter(|| two_values(Crc32::new())));
  group.finish();
}

fn block(c: &mut Criterion) {
  let data = [0x5Au8; 4096];
  let mut group = c.benchmark_group("crc32/4KiB");
  group.throughput(criterion::Throughput::Bytes(data.len() as u64));
  for strategy in Strategy::ALL {
    let Ok(engine) = Crc32::with_strategy(strategy) else {
      continue;
    };
    group.bench_function(engine.backend_name(), |b| {
      b.iter(|| {
        let mut crc = engine;
        crc.seed(Crc32::STANDARD_SEED).accumulate(black_box(data)).finalize()
      })
    });
  }
  group.finish();
}

criterion_group!(benches, harness, block);
criterion_main!(benches);
