//! CPU detection and capabilities for crcfold.
//!
//! This crate is the **single source of truth** for deciding whether the
//! hardware CRC-32 path may run on the current machine.
//!
//! # Core Types
//!
//! - [`Caps`]: What instructions can run on this machine
//! - [`Arch`]: Which architecture this build targets
//! - [`Description`]: Printable summary of both
//!
//! # Main Entry Point
//!
//! ```
//! if platform::has_hardware_crc32() {
//!   // hardware kernel is safe to call
//! }
//!
//! println!("{}", platform::describe());
//! ```
//!
//! # Design Philosophy
//!
//! 1. **One API**: Callers query `platform::caps()` instead of doing ad-hoc detection.
//! 2. **Zero-cost when possible**: Compile-time features are detected via `cfg!`.
//! 3. **Cached otherwise**: Runtime detection is cached in `OnceLock` (std).
//! 4. **Miri-safe**: Under Miri, always returns portable-only caps.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

use core::fmt;

pub use caps::{Arch, Caps};
pub use detect::{
  OverrideError, caps, caps_static, detect_uncached, has_hardware_crc32, has_override, set_override,
  try_set_override,
};

/// Printable summary of the detected platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  /// Target architecture of this build.
  pub arch: Arch,
  /// Detected capabilities.
  pub caps: Caps,
}

impl Description {
  /// Whether the hardware CRC-32 path may run.
  #[inline]
  #[must_use]
  pub fn has_hardware_crc32(&self) -> bool {
    caps::hw_crc32_requirement().is_some_and(|required| self.caps.has(required))
  }
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.arch, self.caps)
  }
}

/// Describe the current platform (cached after the first call).
#[inline]
#[must_use]
pub fn describe() -> Description {
  Description {
    arch: Arch::current(),
    caps: caps(),
  }
}
