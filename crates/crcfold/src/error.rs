//! Error types for strategy selection.
//!
//! Checksum computation itself never fails; only asking for a strategy the
//! CPU cannot run, or naming one that does not exist, does.

use core::fmt;

use crate::dispatch::Strategy;

/// The requested strategy has no kernel on this CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct StrategyUnavailable {
  /// Strategy that was requested.
  pub strategy: Strategy,
}

impl StrategyUnavailable {
  #[inline]
  #[must_use]
  pub(crate) const fn new(strategy: Strategy) -> Self {
    Self { strategy }
  }
}

impl fmt::Display for StrategyUnavailable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} strategy is not available on this CPU", self.strategy)
  }
}

impl core::error::Error for StrategyUnavailable {}

/// A strategy or force name was not recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParseStrategyError;

impl ParseStrategyError {
  #[inline]
  #[must_use]
  pub(crate) const fn new() -> Self {
    Self
  }
}

impl fmt::Display for ParseStrategyError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unrecognized strategy name (expected auto, portable, or hardware)")
  }
}

impl core::error::Error for ParseStrategyError {}
