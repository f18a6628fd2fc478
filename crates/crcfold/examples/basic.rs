//! Tour of the crcfold API.
//!
//! Run with: `cargo run -p crcfold --example basic`

use crcfold::{Be, Checksum, Crc32, DispatchInfo, Le, Strategy};

fn main() {
  println!("dispatch: {}", DispatchInfo::current());

  // Standard CRC-32, as in zlib/gzip/PNG.
  let check = Crc32::checksum(*b"123456789");
  println!("crc32(\"123456789\") = {check:#010x}");
  assert_eq!(check, 0xCBF4_3926);

  // Streaming typed values under a custom seed.
  let mut crc = Crc32::new();
  let seeded = crc.seed(125).accumulate(Le(2.5f32)).accumulate(true).finalize();
  println!("seed 125, 2.5f32, true = {seeded:#010x} via {}", crc.backend_name());

  // Canonical byte order for cross-platform digests.
  let header = Crc32::standard()
    .accumulate(Be(0xCAFE_u16))
    .accumulate(Le(42u32))
    .accumulate([1u8, 2, 3, 4])
    .finalize();
  println!("header digest = {header:#010x}");

  // Split a stream and pick it back up from the digest.
  let head = Crc32::standard().accumulate(*b"1234").finalize();
  let resumed = Crc32::resume(head).accumulate(*b"56789").finalize();
  assert_eq!(resumed, check);

  // Pin a strategy.
  for strategy in Strategy::ALL {
    match Crc32::with_strategy(strategy) {
      Ok(mut crc) => {
        let d = crc.seed(Crc32::STANDARD_SEED).accumulate(*b"123456789").finalize();
        println!("{strategy:>8}: {} -> {d:#010x}", crc.backend_name());
      }
      Err(err) => println!("{strategy:>8}: {err}"),
    }
  }

  // Through the generic trait.
  fn generic_digest<C: Checksum<Output = u32>>(seed: u32) -> u32 {
    C::checksum_with_seed(seed, Le(7u64))
  }
  println!("generic digest = {:#010x}", generic_digest::<Crc32>(Crc32::STANDARD_SEED));
}
