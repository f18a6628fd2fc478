//! x86_64 hardware CRC-32 (IEEE) kernel (`PCLMULQDQ` carry-less multiply).
//!
//! The SSE4.2 `crc32` instruction only computes CRC-32C, so the IEEE
//! polynomial is folded with carry-less multiplies and Barrett reduction:
//!
//! - 8 bytes per step: the low half of the state-xored word is multiplied by
//!   `x^64 mod P`, the high half is added, and the 64-bit product is reduced.
//! - 0-7 tail bytes: one byte per step, `x^32 * b mod P` via the same reduction.
//!
//! All constants are bit-reflected and every product fits in 64 bits, so a
//! single `pclmulqdq` on the low lanes is enough.
//!
//! # Safety
//!
//! Uses `unsafe` for x86 SIMD intrinsics. Callers must ensure `pclmulqdq` is
//! available before executing the accelerated path (the dispatcher does this).
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::x86_64::*;

/// Canonical kernel name.
pub(crate) const KERNEL_NAME: &str = "x86_64/pclmulqdq";

/// Reflected `P(x)` with the implicit `x^32` term (33 bits, shifted left by one).
const POLY: u64 = 0x1_DB71_0641;

/// Reflected Barrett constant `floor(x^64 / P(x))` (33 bits).
const MU: u64 = 0x1_F701_1641;

/// Reflected `x^64 mod P(x)`, pre-shifted for the 8-byte fold.
const K64: u64 = 0x1_63CD_6124;

/// 64-bit carry-less product of two operands whose product fits in 64 bits.
#[inline]
#[target_feature(enable = "pclmulqdq")]
unsafe fn clmul(a: u64, b: u64) -> u64 {
  let product = _mm_clmulepi64_si128(_mm_cvtsi64_si128(a as i64), _mm_cvtsi64_si128(b as i64), 0x00);
  _mm_cvtsi128_si64(product) as u64
}

/// Reduce a reflected 64-bit remainder modulo `P(x)` to 32 bits.
#[inline]
#[target_feature(enable = "pclmulqdq")]
unsafe fn barrett(v: u64) -> u32 {
  let t = clmul(v & 0xFFFF_FFFF, MU) & 0xFFFF_FFFF;
  ((v ^ clmul(t, POLY)) >> 32) as u32
}

/// CRC-32 (IEEE) update using `pclmulqdq`.
///
/// `crc` is the raw running value (not inverted).
#[inline]
#[target_feature(enable = "pclmulqdq")]
unsafe fn crc32_pclmul(crc: u32, data: &[u8]) -> u32 {
  let mut state = crc;

  let (chunks8, tail) = data.as_chunks::<8>();
  for chunk in chunks8 {
    let x = u64::from_le_bytes(*chunk) ^ u64::from(state);
    state = barrett(clmul(x & 0xFFFF_FFFF, K64) ^ (x >> 32));
  }

  for &b in tail {
    let low = u64::from((state ^ u32::from(b)) & 0xFF);
    state = barrett(low << 24) ^ (state >> 8);
  }

  state
}

/// Safe wrapper for the `pclmulqdq` kernel.
#[inline]
pub(crate) fn update(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: Dispatcher verifies PCLMULQDQ before selecting this kernel.
  unsafe { crc32_pclmul(crc, data) }
}
