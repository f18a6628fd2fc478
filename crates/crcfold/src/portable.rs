//! Portable CRC-32 (IEEE) kernel.
//!
//! Byte-at-a-time lookup through the const-generated [`TABLE`]. Runs on every
//! target and is the reference every hardware kernel is checked against.

use crate::table::TABLE;

/// Canonical kernel name for the table-driven kernel.
pub(crate) const KERNEL_NAME: &str = "portable/table";

/// Fold `data` into the running value `crc` one byte at a time.
#[inline]
#[allow(clippy::indexing_slicing)] // index is 0..=255 by mask, table is [u32; 256]
pub fn update(mut crc: u32, data: &[u8]) -> u32 {
  for &b in data {
    let index = ((crc ^ u32::from(b)) & 0xFF) as usize;
    crc = (crc >> 8) ^ TABLE[index];
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Bitwise reference, no table.
  fn bitwise(mut crc: u32, data: &[u8]) -> u32 {
    for &b in data {
      crc ^= u32::from(b);
      for _ in 0..8 {
        let mask = (crc & 1).wrapping_neg();
        crc = (crc >> 1) ^ (crate::table::POLY & mask);
      }
    }
    crc
  }

  #[test]
  fn test_check_vector() {
    assert_eq!(update(!0, b"123456789") ^ !0, 0xCBF4_3926);
  }

  #[test]
  fn test_raw_zero_seed() {
    assert_eq!(update(0, b"") ^ !0, 0xFFFF_FFFF);
    assert_eq!(update(0, b"123456789") ^ !0, 0xD202_D277);
  }

  #[test]
  fn test_matches_bitwise() {
    let data: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(31).wrapping_add(7));
    for seed in [0u32, 1, 125, 0xFFFF_FFFF, 0xDEAD_BEEF] {
      for len in 0..=data.len() {
        assert_eq!(update(seed, &data[..len]), bitwise(seed, &data[..len]), "seed={seed:#x} len={len}");
      }
    }
  }

  #[test]
  fn test_split_is_associative() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let whole = update(!0, data);
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      assert_eq!(update(update(!0, a), b), whole, "split={split}");
    }
    assert_eq!(whole ^ !0, 0x414F_A339);
  }
}
