//! Const-fn CRC-32 (IEEE) lookup table.
//!
//! The table is computed at compile time and embedded in the binary, so every
//! engine instance shares one immutable copy and there is no "is it built yet"
//! state to check at runtime.
//!
//! # Construction
//!
//! Entry `i` of a reflected CRC table is the CRC of the single byte `i`. The
//! table is linear over XOR, so it only needs the 8 single-bit entries
//! (`128, 64, .., 1`); every other entry is the XOR of the entries for its set
//! bits. Walking `k` from 128 down to 1, the running `crc` is the entry for
//! bit `k`, and `table[k + j] = crc ^ table[j]` fills in every slot whose
//! lowest set bit is `k`.

// SAFETY: All array indexing in this module uses bounded loop indices (< 256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// CRC-32 IEEE 802.3 polynomial (0x04C11DB7) in reflected form.
/// Used by Ethernet, gzip, zip, PNG.
pub const POLY: u32 = 0xEDB8_8320;

/// The 256-entry byte-at-a-time table for [`POLY`].
pub static TABLE: [u32; 256] = build(POLY);

/// Build the 256-entry reflected lookup table for `poly`.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn build(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut crc = 1u32;

  let mut k = 128usize;
  while k > 0 {
    crc = (crc >> 1) ^ if crc & 1 != 0 { poly } else { 0 };

    let mut j = 0usize;
    while j < 256 {
      table[k + j] = crc ^ table[j];
      j += 2 * k;
    }
    k >>= 1;
  }

  table
}
