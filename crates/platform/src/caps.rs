//! CPU capability representation.
//!
//! This module answers the question: "Which checksum instructions can I
//! legally run on this machine?"
//!
//! # Design
//!
//! [`Caps`] is a 64-bit feature bitset. Each bit corresponds to a specific ISA
//! extension. The bits are architecture-specific but the API is uniform across
//! all targets.
//!
//! # Bit Layout
//!
//! - Bits 0-31: x86/x86_64 features
//! - Bits 32-63: aarch64 features
//!
//! # Usage
//!
//! ```
//! use platform::caps::{Caps, x86};
//!
//! let c = platform::caps();
//! if c.has(x86::PCLMULQDQ) {
//!   // carry-less multiply CRC path
//! }
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a 64-bit feature bitset.
///
/// `Caps` is `Copy`, `Send`, and `Sync`. It can be freely shared across threads.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(u64);

impl Caps {
  /// Empty capability set (no features).
  pub const NONE: Self = Self(0);

  /// Create a capability set from a raw word.
  ///
  /// This is primarily useful for testing and fuzzing.
  /// Normal usage should prefer the predefined constants.
  #[inline]
  #[must_use]
  pub const fn from_raw(bits: u64) -> Self {
    Self(bits)
  }

  /// Access the raw underlying word.
  #[inline]
  #[must_use]
  pub const fn to_raw(self) -> u64 {
    self.0
  }

  /// Create a capability set with a single bit set.
  ///
  /// `bit` is taken modulo 64.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Check if a specific bit is set.
  #[inline]
  #[must_use]
  pub const fn has_bit(self, bit: u8) -> bool {
    self.has(Self::bit(bit))
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Intersection of two capability sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Features in `self` that are not in `other`.
  #[inline]
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  /// Check if the capability set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Count the number of features present.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// Returns an iterator over the names of all set feature bits.
  pub fn feature_names(self) -> impl Iterator<Item = &'static str> {
    FEATURES
      .iter()
      .filter_map(move |(bit, name)| if self.has_bit(*bit) { Some(*name) } else { None })
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitAnd for Caps {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self::Output {
    self.intersection(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl core::fmt::Debug for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Caps({}, ", Arch::current())?;
    core::fmt::Display::fmt(self, f)?;
    f.write_str(")")
  }
}

impl core::fmt::Display for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut iter = self.feature_names().peekable();
    if iter.peek().is_none() {
      return f.write_str("[none]");
    }

    f.write_str("[")?;
    let mut first = true;
    for name in iter {
      if !first {
        f.write_str(", ")?;
      }
      first = false;
      f.write_str(name)?;
    }
    f.write_str("]")
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  Arm,
  Riscv64,
  Wasm32,
  #[default]
  Other,
}

impl Arch {
  /// Get the architecture for the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    #[cfg(target_arch = "x86_64")]
    {
      Self::X86_64
    }
    #[cfg(target_arch = "x86")]
    {
      Self::X86
    }
    #[cfg(target_arch = "aarch64")]
    {
      Self::Aarch64
    }
    #[cfg(target_arch = "arm")]
    {
      Self::Arm
    }
    #[cfg(target_arch = "riscv64")]
    {
      Self::Riscv64
    }
    #[cfg(target_arch = "wasm32")]
    {
      Self::Wasm32
    }
    #[cfg(not(any(
      target_arch = "x86_64",
      target_arch = "x86",
      target_arch = "aarch64",
      target_arch = "arm",
      target_arch = "riscv64",
      target_arch = "wasm32"
    )))]
    {
      Self::Other
    }
  }

  /// Returns the human-readable name for this architecture.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Arm => "arm",
      Self::Riscv64 => "riscv64",
      Self::Wasm32 => "wasm32",
      Self::Other => "other",
    }
  }
}

impl core::fmt::Display for Arch {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 0-31)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 feature bits.
pub mod x86 {
  use super::Caps;

  /// SSE4.2, which carries the `crc32` instruction (CRC-32C polynomial only).
  pub const SSE42: Caps = Caps::bit(0);
  /// Carry-less multiplication (`pclmulqdq`).
  pub const PCLMULQDQ: Caps = Caps::bit(1);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 32-63)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 feature bits.
pub mod aarch64 {
  use super::Caps;

  /// ARMv8 CRC32 extension (`crc32*` and `crc32c*` instructions).
  pub const CRC: Caps = Caps::bit(32);
}

/// Capabilities required by the hardware CRC-32 (IEEE) path on this target.
///
/// - x86_64: `pclmulqdq` (the SSE4.2 `crc32` instruction computes CRC-32C and
///   cannot serve the IEEE polynomial)
/// - aarch64: the CRC32 extension
/// - elsewhere: `None`, no hardware path exists
#[inline]
#[must_use]
pub const fn hw_crc32_requirement() -> Option<Caps> {
  #[cfg(target_arch = "x86_64")]
  {
    Some(x86::PCLMULQDQ)
  }
  #[cfg(target_arch = "aarch64")]
  {
    Some(aarch64::CRC)
  }
  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  {
    None
  }
}

const FEATURES: &[(u8, &str)] = &[(0, "sse4.2"), (1, "pclmulqdq"), (32, "crc")];

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
