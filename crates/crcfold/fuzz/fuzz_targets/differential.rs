//! Differential fuzz target for CRC-32 (IEEE).
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Portable and hardware kernels agree for any seed
//! - Split accumulation equals one pass
//! - Standard-seeded digests match crc32fast

#![no_main]

use arbitrary::Arbitrary;
use crcfold::{Crc32, Span, Strategy};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u32,
  data: Vec<u8>,
  split_point: usize,
}

struct Bytes<'a>(&'a [u8]);

impl Span for Bytes<'_> {
  fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
    sink(self.0);
  }
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let (a, b) = data.split_at(split);

  let mut portable = Crc32::portable();
  let oneshot = portable.seed(input.seed).accumulate(Bytes(data)).finalize();
  let split_digest = portable.seed(input.seed).accumulate(Bytes(a)).accumulate(Bytes(b)).finalize();
  assert_eq!(oneshot, split_digest, "split mismatch");

  if let Ok(mut hw) = Crc32::with_strategy(Strategy::Hardware) {
    let hw_digest = hw.seed(input.seed).accumulate(Bytes(a)).accumulate(Bytes(b)).finalize();
    assert_eq!(oneshot, hw_digest, "hardware/portable mismatch");
  }

  let standard = Crc32::standard().accumulate(Bytes(data)).finalize();
  assert_eq!(standard, crc32fast::hash(data), "crc32fast mismatch");
});
