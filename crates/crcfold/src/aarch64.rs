//! aarch64 hardware CRC-32 (IEEE).
//!
//! Uses the ARMv8 CRC32 extension (`crc32x` / `crc32b`), which implements the
//! IEEE polynomial directly.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::aarch64::{__crc32b, __crc32d};

/// Canonical kernel name.
pub(crate) const KERNEL_NAME: &str = "aarch64/crc";

/// Compute CRC-32 (IEEE) using the ARMv8 CRC32 extension.
///
/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[inline]
#[target_feature(enable = "crc")]
unsafe fn crc32_armv8(crc: u32, data: &[u8]) -> u32 {
  let mut state = crc;

  let (chunks8, tail) = data.as_chunks::<8>();
  for chunk in chunks8 {
    state = __crc32d(state, u64::from_le_bytes(*chunk));
  }

  for &b in tail {
    state = __crc32b(state, b);
  }

  state
}

/// Safe wrapper for the ARMv8 CRC kernel.
#[inline]
pub(crate) fn update(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: Dispatcher verifies the `crc` feature before selecting this kernel.
  unsafe { crc32_armv8(crc, data) }
}
