//! Runtime CPU detection.
//!
//! This module provides the unified [`caps()`] function that returns detected
//! CPU capabilities. It handles:
//!
//! - Compile-time detection (via `cfg!(target_feature = "...")`)
//! - Runtime detection (via `is_x86_feature_detected!` / `is_aarch64_feature_detected!`)
//! - Caching (via `OnceLock` with `std`)
//! - User-supplied overrides for bare metal and testing
//! - Miri fallback (always returns portable caps)
//!
//! # Overrides
//!
//! ```ignore
//! // Pin the portable path (call before any caps())
//! platform::set_override(Some(platform::Caps::NONE));
//! ```

use core::fmt;

use crate::caps::Caps;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Why an override could not be installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OverrideError {
  /// Detection already ran; the cached result can no longer change.
  AlreadyInitialized,
  /// Overrides need the `std` feature.
  Unsupported,
}

impl fmt::Display for OverrideError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::AlreadyInitialized => f.write_str("capabilities were already detected; override rejected"),
      Self::Unsupported => f.write_str("capability overrides are not supported in this build"),
    }
  }
}

impl core::error::Error for OverrideError {}

// ─────────────────────────────────────────────────────────────────────────────
// Override System
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "std")]
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

#[cfg(feature = "std")]
static CACHE: OnceLock<Caps> = OnceLock::new();

/// Override value plus whether detection has already consumed it.
///
/// Setters and the first detection both go through this lock, so an override
/// is either seen by detection or rejected, never accepted and then ignored.
#[cfg(feature = "std")]
struct OverrideSlot {
  value: Option<Caps>,
  sealed: bool,
}

#[cfg(feature = "std")]
static OVERRIDE: Mutex<OverrideSlot> = Mutex::new(OverrideSlot {
  value: None,
  sealed: false,
});

#[cfg(feature = "std")]
fn override_slot() -> MutexGuard<'static, OverrideSlot> {
  // The slot is plain data; a panic elsewhere cannot leave it half-written.
  OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Set detection override.
///
/// Must be called **before** the first call to [`caps()`]. After caching occurs,
/// updates are rejected.
///
/// # Panics
///
/// Panics if the override is rejected (see [`try_set_override`]).
#[cold]
pub fn set_override(value: Option<Caps>) {
  if let Err(err) = try_set_override(value) {
    panic!("platform::set_override failed: {err}");
  }
}

/// Try to set detection override.
///
/// Contract: pre-init only. Once [`caps()`] has started detection, this
/// returns [`OverrideError::AlreadyInitialized`]. An `Ok` is always honored
/// by the detection that follows, even if it runs on another thread.
#[cold]
pub fn try_set_override(value: Option<Caps>) -> Result<(), OverrideError> {
  #[cfg(feature = "std")]
  {
    if CACHE.get().is_some() {
      return Err(OverrideError::AlreadyInitialized);
    }

    let mut slot = override_slot();
    if slot.sealed {
      return Err(OverrideError::AlreadyInitialized);
    }
    slot.value = value;
    Ok(())
  }

  #[cfg(not(feature = "std"))]
  {
    let _ = value;
    Err(OverrideError::Unsupported)
  }
}

/// Check if an override is set.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  #[cfg(feature = "std")]
  {
    override_slot().value.is_some()
  }

  #[cfg(not(feature = "std"))]
  {
    false
  }
}

#[cfg(feature = "std")]
#[cold]
fn detect_with_override() -> Caps {
  let value = {
    let mut slot = override_slot();
    slot.sealed = true;
    slot.value
  };
  value.unwrap_or_else(detect_uncached)
}

// ─────────────────────────────────────────────────────────────────────────────
// Public Entry Points
// ─────────────────────────────────────────────────────────────────────────────

/// Get detected CPU capabilities.
///
/// # Caching
///
/// - With `std`: the first call detects (or takes the override) and caches the
///   result in a `OnceLock`. Later calls are a single atomic load.
/// - Without `std`: returns the compile-time feature set, which is free to
///   recompute.
///
/// # Miri
///
/// Under Miri, always returns [`Caps::NONE`] to avoid interpreting SIMD
/// intrinsics.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }

  #[cfg(feature = "std")]
  {
    *CACHE.get_or_init(detect_with_override)
  }

  #[cfg(not(feature = "std"))]
  {
    detect_uncached()
  }
}

/// Returns true iff the executing CPU can run the hardware CRC-32 (IEEE) path.
///
/// Total and idempotent: on targets without such a path this is always false.
#[inline]
#[must_use]
pub fn has_hardware_crc32() -> bool {
  match crate::caps::hw_crc32_requirement() {
    Some(required) => caps().has(required),
    None => false,
  }
}

/// Detect capabilities without caching or overrides.
#[inline]
#[must_use]
pub fn detect_uncached() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }
  caps_static() | caps_runtime()
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Features the compiler was told it may assume.
#[inline]
#[must_use]
pub const fn caps_static() -> Caps {
  #[allow(unused_mut)]
  let mut caps = Caps::NONE;

  #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "sse4.2"))]
  {
    caps = caps.union(crate::caps::x86::SSE42);
  }
  #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "pclmulqdq"))]
  {
    caps = caps.union(crate::caps::x86::PCLMULQDQ);
  }
  #[cfg(all(target_arch = "aarch64", target_feature = "crc"))]
  {
    caps = caps.union(crate::caps::aarch64::CRC);
  }

  caps
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime Detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(all(target_arch = "x86_64", feature = "std"))]
fn caps_runtime() -> Caps {
  use crate::caps::x86;

  let mut caps = Caps::NONE;
  if std::arch::is_x86_feature_detected!("sse4.2") {
    caps |= x86::SSE42;
  }
  if std::arch::is_x86_feature_detected!("pclmulqdq") {
    caps |= x86::PCLMULQDQ;
  }
  caps
}

#[cfg(all(target_arch = "aarch64", feature = "std"))]
fn caps_runtime() -> Caps {
  use crate::caps::aarch64;

  let mut caps = Caps::NONE;
  if std::arch::is_aarch64_feature_detected!("crc") {
    caps |= aarch64::CRC;
  }
  caps
}

#[cfg(not(all(any(target_arch = "x86_64", target_arch = "aarch64"), feature = "std")))]
const fn caps_runtime() -> Caps {
  Caps::NONE
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn test_detect_uncached_is_consistent() {
    assert_eq!(detect_uncached(), detect_uncached());
  }

  #[test]
  fn test_runtime_includes_static() {
    assert!(detect_uncached().has(caps_static()));
  }

  #[test]
  fn test_caps_is_cached() {
    let first = caps();
    for _ in 0..16 {
      assert_eq!(caps(), first);
    }
  }

  #[test]
  fn test_hardware_crc32_is_idempotent() {
    let first = has_hardware_crc32();
    assert_eq!(has_hardware_crc32(), first);
  }

  #[test]
  #[cfg(all(target_arch = "x86_64", feature = "std", not(miri)))]
  fn test_x86_64_matches_std_detection() {
    let caps = detect_uncached();
    assert_eq!(
      caps.has(crate::caps::x86::PCLMULQDQ),
      std::arch::is_x86_feature_detected!("pclmulqdq")
    );
    assert_eq!(caps.has(crate::caps::x86::SSE42), std::arch::is_x86_feature_detected!("sse4.2"));
  }

  #[test]
  #[cfg(all(target_arch = "aarch64", feature = "std", not(miri)))]
  fn test_aarch64_matches_std_detection() {
    let caps = detect_uncached();
    assert_eq!(
      caps.has(crate::caps::aarch64::CRC),
      std::arch::is_aarch64_feature_detected!("crc")
    );
  }

  #[test]
  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  fn test_other_arch_has_no_hardware_path() {
    assert!(!has_hardware_crc32());
  }

  #[test]
  #[cfg(miri)]
  fn test_miri_returns_portable() {
    assert_eq!(caps(), Caps::NONE);
    assert!(!has_hardware_crc32());
  }

  #[test]
  #[cfg(all(feature = "std", not(miri)))]
  fn test_detection_seals_override() {
    let detected = caps();
    assert_eq!(try_set_override(Some(Caps::NONE)), Err(OverrideError::AlreadyInitialized));
    assert!(override_slot().sealed);
    assert_eq!(caps(), detected);
  }

  #[test]
  fn test_override_error_display() {
    assert!(OverrideError::AlreadyInitialized.to_string().contains("already"));
    assert!(OverrideError::Unsupported.to_string().contains("not supported"));
  }
}
