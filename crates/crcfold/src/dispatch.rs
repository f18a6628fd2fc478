//! Kernel dispatch: strategies, selection, and caching.
//!
//! Kernels are registered as an ordered list of candidates, best first. The
//! default kernel is the first candidate whose capability requirements are met
//! by [`platform::caps()`], after applying the configured force mode. It is
//! selected once and cached, so every engine pays one indirect call per
//! `accumulate` and never re-checks the CPU.
//!
//! ```
//! use crcfold::dispatch::{self, Strategy};
//!
//! let kernel = dispatch::auto();
//! println!("{} ({})", kernel.name(), kernel.strategy());
//!
//! // The portable kernel always exists.
//! assert!(dispatch::kernel(Strategy::Portable).is_some());
//! ```

use core::{fmt, str::FromStr};

use platform::Caps;

use crate::{
  config::{self, Config, Force},
  error::ParseStrategyError,
  portable,
};

/// Signature for CRC-32 kernels: `fn(state: u32, data: &[u8]) -> u32`.
///
/// `state` is the raw running value; kernels neither invert it on entry nor
/// on exit.
pub type Crc32Fn = fn(u32, &[u8]) -> u32;

// ─────────────────────────────────────────────────────────────────────────────
// Strategy
// ─────────────────────────────────────────────────────────────────────────────

/// How the running value is folded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
  /// 256-entry lookup table, one byte per step. Always available.
  Portable,
  /// Dedicated CPU instructions, eight bytes per step.
  Hardware,
}

impl Strategy {
  /// All strategies, portable first.
  pub const ALL: [Self; 2] = [Self::Portable, Self::Hardware];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      Self::Hardware => "hardware",
    }
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Strategy {
  type Err = ParseStrategyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("portable") || s.eq_ignore_ascii_case("table") || s.eq_ignore_ascii_case("software") {
      return Ok(Self::Portable);
    }
    if s.eq_ignore_ascii_case("hardware") || s.eq_ignore_ascii_case("hw") || s.eq_ignore_ascii_case("hwcrc") {
      return Ok(Self::Hardware);
    }
    Err(ParseStrategyError::new())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernel
// ─────────────────────────────────────────────────────────────────────────────

/// A selected kernel: strategy tag, diagnostic name, and function pointer.
#[derive(Clone, Copy)]
pub struct Kernel {
  strategy: Strategy,
  name: &'static str,
  func: Crc32Fn,
}

impl Kernel {
  #[inline]
  #[must_use]
  const fn new(strategy: Strategy, name: &'static str, func: Crc32Fn) -> Self {
    Self { strategy, name, func }
  }

  /// Strategy this kernel implements.
  #[inline]
  #[must_use]
  pub const fn strategy(&self) -> Strategy {
    self.strategy
  }

  /// Human-readable name (e.g. `"portable/table"`, `"aarch64/crc"`).
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Fold `data` into the raw running value `state`.
  #[inline]
  #[must_use]
  pub fn update(&self, state: u32, data: &[u8]) -> u32 {
    (self.func)(state, data)
  }
}

impl PartialEq for Kernel {
  fn eq(&self, other: &Self) -> bool {
    self.strategy == other.strategy && self.name == other.name
  }
}

impl Eq for Kernel {}

impl fmt::Debug for Kernel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Kernel")
      .field("strategy", &self.strategy)
      .field("name", &self.name)
      .finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Candidates
// ─────────────────────────────────────────────────────────────────────────────

/// A kernel with capability requirements.
#[derive(Clone, Copy, Debug)]
struct Candidate {
  /// Required CPU capabilities. Must be a subset of detected caps.
  requires: Caps,
  kernel: Kernel,
}

impl Candidate {
  const fn new(strategy: Strategy, name: &'static str, requires: Caps, func: Crc32Fn) -> Self {
    Self {
      requires,
      kernel: Kernel::new(strategy, name, func),
    }
  }
}

const PORTABLE: Candidate = Candidate::new(Strategy::Portable, portable::KERNEL_NAME, Caps::NONE, portable::update);

#[cfg(target_arch = "x86_64")]
const HARDWARE: Option<Candidate> = Some(Candidate::new(
  Strategy::Hardware,
  crate::x86_64::KERNEL_NAME,
  platform::caps::x86::PCLMULQDQ,
  crate::x86_64::update,
));

#[cfg(target_arch = "aarch64")]
const HARDWARE: Option<Candidate> = Some(Candidate::new(
  Strategy::Hardware,
  crate::aarch64::KERNEL_NAME,
  platform::caps::aarch64::CRC,
  crate::aarch64::update,
));

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const HARDWARE: Option<Candidate> = None;

/// Returns the first candidate whose requirements `caps` satisfies.
///
/// Falls back to the portable kernel, which has no requirements.
fn select(caps: Caps, candidates: &[Candidate]) -> Kernel {
  candidates
    .iter()
    .find(|c| caps.has(c.requires))
    .map_or(PORTABLE.kernel, |c| c.kernel)
}

fn hardware_if(caps: Caps) -> Option<Kernel> {
  HARDWARE.filter(|c| caps.has(c.requires)).map(|c| c.kernel)
}

// ─────────────────────────────────────────────────────────────────────────────
// Public Entry Points
// ─────────────────────────────────────────────────────────────────────────────

/// The portable table kernel.
#[inline]
#[must_use]
pub const fn portable() -> Kernel {
  PORTABLE.kernel
}

/// The kernel for `strategy`, or `None` if this CPU cannot run it.
#[inline]
#[must_use]
pub fn kernel(strategy: Strategy) -> Option<Kernel> {
  match strategy {
    Strategy::Portable => Some(PORTABLE.kernel),
    Strategy::Hardware => hardware_if(platform::caps()),
  }
}

/// Kernel for a configuration and a capability set.
#[must_use]
fn select_for(cfg: &Config, caps: Caps) -> Kernel {
  match cfg.effective_force {
    Force::Portable => PORTABLE.kernel,
    Force::Hardware => hardware_if(caps).unwrap_or(PORTABLE.kernel),
    Force::Auto => match HARDWARE {
      Some(hw) => select(caps, &[hw, PORTABLE]),
      None => select(caps, &[PORTABLE]),
    },
  }
}

fn select_default() -> Kernel {
  let cfg = config::get();
  let kernel = select_for(&cfg, platform::caps());
  crate::diag::kernel_selected(&kernel, &cfg);
  kernel
}

/// The default kernel for this process.
///
/// Selected on first use from the detected capabilities and `CRCFOLD_FORCE`,
/// then cached (with `std`).
#[inline]
#[must_use]
pub fn auto() -> Kernel {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static DEFAULT: OnceLock<Kernel> = OnceLock::new();
    *DEFAULT.get_or_init(select_default)
  }

  // Without std the selection uses compile-time caps and is cheap to redo.
  #[cfg(not(feature = "std"))]
  {
    select_default()
  }
}
