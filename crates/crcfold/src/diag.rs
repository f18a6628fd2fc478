//! Optional diagnostics for kernel selection.
//!
//! With the `diag` feature, kernel selection emits `tracing` events and
//! [`selection`] explains the outcome. Without it the hooks compile to nothing.

use crate::{config::Config, dispatch::Kernel};

/// Emitted once, when the process-wide default kernel is chosen.
#[inline]
#[allow(unused_variables)]
pub(crate) fn kernel_selected(kernel: &Kernel, cfg: &Config) {
  #[cfg(feature = "diag")]
  tracing::debug!(
    target: "crcfold",
    kernel = kernel.name(),
    strategy = kernel.strategy().name(),
    requested = cfg.requested_force.as_str(),
    effective = cfg.effective_force.as_str(),
    "selected default crc32 kernel"
  );
}

/// Emitted when a forced strategy cannot run on this CPU.
#[inline]
#[allow(unused_variables)]
pub(crate) fn force_clamped(cfg: &Config) {
  #[cfg(feature = "diag")]
  tracing::warn!(
    target: "crcfold",
    requested = cfg.requested_force.as_str(),
    effective = cfg.effective_force.as_str(),
    "{} requested {} but the CPU lacks the instruction; falling back",
    crate::config::FORCE_ENV,
    cfg.requested_force,
  );
}

#[cfg(feature = "diag")]
pub use selection_diag::{SelectionDiag, selection};

#[cfg(feature = "diag")]
mod selection_diag {
  use core::fmt;

  use platform::Arch;

  use crate::{config, config::Force, dispatch};

  /// Why the default kernel is what it is.
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub struct SelectionDiag {
    pub arch: Arch,
    pub requested_force: Force,
    pub effective_force: Force,
    pub hardware_available: bool,
    pub selected_kernel: &'static str,
  }

  impl fmt::Display for SelectionDiag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(
        f,
        "{}: kernel={} force={}->{} hw={}",
        self.arch, self.selected_kernel, self.requested_force, self.effective_force, self.hardware_available
      )
    }
  }

  /// Diagnose the default kernel selection.
  #[must_use]
  pub fn selection() -> SelectionDiag {
    let cfg = config::get();
    SelectionDiag {
      arch: Arch::current(),
      requested_force: cfg.requested_force,
      effective_force: cfg.effective_force,
      hardware_available: cfg.hardware_available,
      selected_kernel: dispatch::auto().name(),
    }
  }

}
