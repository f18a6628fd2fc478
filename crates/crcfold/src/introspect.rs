//! Dispatch introspection.
//!
//! Reports which kernel this process runs and the platform it was chosen
//! for, without touching the hot path.
//!
//! ```
//! use crcfold::DispatchInfo;
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//! // Example output: "aarch64 [crc] -> aarch64/crc"
//! ```

use core::fmt;

use crate::dispatch::{self, Strategy};

/// Platform description plus the default kernel.
#[derive(Clone, Copy)]
pub struct DispatchInfo {
  platform: platform::Description,
  kernel: &'static str,
  strategy: Strategy,
}

impl DispatchInfo {
  /// Returns dispatch info for the current process.
  ///
  /// Both halves are cached after the first call.
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    let kernel = dispatch::auto();
    Self {
      platform: platform::describe(),
      kernel: kernel.name(),
      strategy: kernel.strategy(),
    }
  }

  #[inline]
  #[must_use]
  pub fn platform(&self) -> platform::Description {
    self.platform
  }

  /// Name of the default kernel.
  #[inline]
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    self.kernel
  }

  #[inline]
  #[must_use]
  pub fn strategy(&self) -> Strategy {
    self.strategy
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.platform, self.kernel)
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("platform", &format_args!("{}", self.platform))
      .field("kernel", &self.kernel)
      .field("strategy", &self.strategy)
      .finish()
  }
}
