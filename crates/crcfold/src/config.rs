//! Runtime configuration (forced strategy selection).
//!
//! The only knob is `CRCFOLD_FORCE`, read once per process:
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` (default) | hardware when the CPU has it, portable otherwise |
//! | `portable`, `table`, `software` | always the table kernel |
//! | `hardware`, `hw`, `hwcrc` | the hardware kernel, if available |
//!
//! Values are trimmed and case-insensitive; empty or unknown values are ignored.
//!
//! Safety note: forced modes are always clamped to detected CPU capabilities.

use core::{fmt, str::FromStr};

use crate::{dispatch::Strategy, error::ParseStrategyError};

/// Environment variable consulted for the forced strategy.
pub const FORCE_ENV: &str = "CRCFOLD_FORCE";

/// Forced strategy selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Force {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the portable table-based implementation.
  Portable,
  /// Force the hardware kernel (if available).
  ///
  /// - x86_64: `pclmulqdq` carry-less multiply
  /// - aarch64: ARMv8 CRC extension
  Hardware,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Hardware => "hardware",
    }
  }

  /// The pinned strategy, or `None` for [`Force::Auto`].
  #[inline]
  #[must_use]
  pub const fn strategy(self) -> Option<Strategy> {
    match self {
      Self::Auto => None,
      Self::Portable => Some(Strategy::Portable),
      Self::Hardware => Some(Strategy::Hardware),
    }
  }
}

impl From<Strategy> for Force {
  #[inline]
  fn from(strategy: Strategy) -> Self {
    match strategy {
      Strategy::Portable => Self::Portable,
      Strategy::Hardware => Self::Hardware,
    }
  }
}

impl fmt::Display for Force {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Force {
  type Err = ParseStrategyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }
    s.parse::<Strategy>().map(Self::from)
  }
}

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Requested force mode (env).
  pub requested_force: Force,
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: Force,
  /// Whether the hardware kernel may run on this CPU.
  pub hardware_available: bool,
}

impl Config {
  /// Build a configuration from a request and the detected capability.
  #[inline]
  #[must_use]
  pub const fn resolve(requested_force: Force, hardware_available: bool) -> Self {
    Self {
      requested_force,
      effective_force: clamp_force_to_caps(requested_force, hardware_available),
      hardware_available,
    }
  }

  /// Whether the request had to be downgraded.
  #[inline]
  #[must_use]
  pub const fn is_clamped(&self) -> bool {
    !matches!(
      (self.requested_force, self.effective_force),
      (Force::Auto, Force::Auto) | (Force::Portable, Force::Portable) | (Force::Hardware, Force::Hardware)
    )
  }
}

/// Parse a force value as found in the environment.
///
/// Returns `None` for empty or unrecognized values.
#[must_use]
pub fn parse_force(value: &str) -> Option<Force> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse().ok()
}

#[cfg(feature = "std")]
fn read_env_force() -> Force {
  std::env::var(FORCE_ENV)
    .ok()
    .and_then(|value| parse_force(&value))
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested_force() -> Force {
  use std::sync::OnceLock;
  static FORCE: OnceLock<Force> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> Force {
  Force::Auto
}

#[inline]
#[must_use]
const fn clamp_force_to_caps(requested: Force, hardware_available: bool) -> Force {
  match requested {
    Force::Auto | Force::Portable => requested,
    Force::Hardware if hardware_available => Force::Hardware,
    Force::Hardware => Force::Auto,
  }
}

fn load() -> Config {
  let cfg = Config::resolve(requested_force(), platform::has_hardware_crc32());
  if cfg.is_clamped() {
    crate::diag::force_clamped(&cfg);
  }
  cfg
}

/// Get the effective configuration (cached after the first call with `std`).
#[inline]
#[must_use]
pub fn get() -> Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CONFIG: OnceLock<Config> = OnceLock::new();
    *CONFIG.get_or_init(load)
  }

  #[cfg(not(feature = "std"))]
  {
    load()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_force_aliases() {
    assert_eq!(parse_force("auto"), Some(Force::Auto));
    assert_eq!(parse_force("  AUTO "), Some(Force::Auto));
    for name in ["portable", "table", "software", "Table"] {
      assert_eq!(parse_force(name), Some(Force::Portable), "{name}");
    }
    for name in ["hardware", "hw", "hwcrc", "HW"] {
      assert_eq!(parse_force(name), Some(Force::Hardware), "{name}");
    }
  }

  #[test]
  fn test_parse_force_rejects_junk() {
    assert_eq!(parse_force(""), None);
    assert_eq!(parse_force("   "), None);
    assert_eq!(parse_force("crc32c"), None);
    assert!("fast".parse::<Force>().is_err());
  }

  #[test]
  fn test_clamp() {
    assert_eq!(clamp_force_to_caps(Force::Auto, false), Force::Auto);
    assert_eq!(clamp_force_to_caps(Force::Portable, true), Force::Portable);
    assert_eq!(clamp_force_to_caps(Force::Hardware, true), Force::Hardware);
    assert_eq!(clamp_force_to_caps(Force::Hardware, false), Force::Auto);
  }

  #[test]
  fn test_resolve_reports_clamping() {
    let cfg = Config::resolve(Force::Hardware, false);
    assert_eq!(cfg.effective_force, Force::Auto);
    assert!(cfg.is_clamped());
    assert!(!Config::resolve(Force::Hardware, true).is_clamped());
    assert!(!Config::resolve(Force::Portable, false).is_clamped());
  }

  #[test]
  fn test_get_is_consistent() {
    let cfg = get();
    assert_eq!(cfg, get());
    assert_eq!(cfg.hardware_available, platform::has_hardware_crc32());
    if !cfg.hardware_available {
      assert_ne!(cfg.effective_force, Force::Hardware);
    }
  }

  #[test]
  fn test_force_strategy() {
    assert_eq!(Force::Auto.strategy(), None);
    assert_eq!(Force::from(Strategy::Hardware).strategy(), Some(Strategy::Hardware));
    assert_eq!(Force::Portable.as_str(), "portable");
  }
}
