//! The streaming CRC-32 engine.

use traits::{Checksum, Span};

use crate::{
  dispatch::{self, Kernel, Strategy},
  error::StrategyUnavailable,
};

/// Where an engine is in its lifecycle.
///
/// Construction, [`Crc32::seed`] and [`Crc32::reset`] return to `Fresh`; any
/// [`Crc32::accumulate`] moves to `Accumulating`. [`Crc32::finalize`] is a
/// read-only projection and is valid in either phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
  /// No value accumulated since construction, seed, or reset.
  #[default]
  Fresh,
  /// At least one value accumulated.
  Accumulating,
}

/// CRC-32 (IEEE 802.3) over a stream of typed values.
///
/// Holds the raw running value (not inverted) and a kernel chosen once at
/// construction. `finalize` applies the output inversion without touching the
/// running value.
///
/// # Seeds
///
/// A fresh engine starts from `0`, so its empty digest is `0xFFFF_FFFF`. Seed
/// with [`Crc32::STANDARD_SEED`] (or use [`Crc32::standard`]) for the CRC-32
/// found in zlib, gzip and PNG.
///
/// ```
/// use crcfold::Crc32;
///
/// let digest = Crc32::standard().accumulate(*b"123456789").finalize();
/// assert_eq!(digest, 0xCBF4_3926);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Crc32 {
  state: u32,
  phase: Phase,
  kernel: Kernel,
  hardware_available: bool,
}

impl Crc32 {
  /// Seed that yields the standard CRC-32 (init `0xFFFF_FFFF`).
  pub const STANDARD_SEED: u32 = 0xFFFF_FFFF;

  /// Output inversion applied by [`finalize`](Self::finalize).
  pub const XOR_OUT: u32 = 0xFFFF_FFFF;

  #[inline]
  fn with_kernel(kernel: Kernel) -> Self {
    Self {
      state: 0,
      phase: Phase::Fresh,
      kernel,
      hardware_available: platform::has_hardware_crc32(),
    }
  }

  /// Create an engine with running value `0` and the process default kernel.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::with_kernel(dispatch::auto())
  }

  /// Create an engine pinned to `strategy`.
  ///
  /// # Errors
  ///
  /// Returns [`StrategyUnavailable`] if this CPU cannot run the strategy.
  /// [`Strategy::Portable`] never fails.
  #[inline]
  pub fn with_strategy(strategy: Strategy) -> Result<Self, StrategyUnavailable> {
    dispatch::kernel(strategy)
      .map(Self::with_kernel)
      .ok_or(StrategyUnavailable::new(strategy))
  }

  /// Create an engine pinned to the portable table kernel.
  #[inline]
  #[must_use]
  pub fn portable() -> Self {
    Self::with_kernel(dispatch::portable())
  }

  /// Create an engine seeded with [`STANDARD_SEED`](Self::STANDARD_SEED).
  #[inline]
  #[must_use]
  pub fn standard() -> Self {
    let mut crc = Self::new();
    crc.seed(Self::STANDARD_SEED);
    crc
  }

  /// Continue a stream whose digest so far is `digest`.
  ///
  /// `Crc32::resume(a.finalize())` followed by accumulating `b` gives the same
  /// digest as accumulating `b` on `a` directly.
  #[inline]
  #[must_use]
  pub fn resume(digest: u32) -> Self {
    let mut crc = Self::new();
    crc.seed(digest ^ Self::XOR_OUT);
    crc
  }

  /// Overwrite the running value with `value`. Any 32-bit value is accepted.
  #[inline]
  pub fn seed(&mut self, value: u32) -> &mut Self {
    self.state = value;
    self.phase = Phase::Fresh;
    self
  }

  /// Clear the running value to `0`.
  #[inline]
  pub fn reset(&mut self) -> &mut Self {
    self.seed(0)
  }

  /// Fold the byte representation of `value` into the running value.
  #[inline]
  pub fn accumulate<T: Span>(&mut self, value: T) -> &mut Self {
    let kernel = self.kernel;
    let mut state = self.state;
    value.feed(&mut |bytes: &[u8]| state = kernel.update(state, bytes));
    self.state = state;
    self.phase = Phase::Accumulating;
    self
  }

  /// The digest: running value XOR `0xFFFF_FFFF`. Does not modify the engine.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    self.state ^ Self::XOR_OUT
  }

  /// Standard CRC-32 of a single value.
  #[inline]
  #[must_use]
  pub fn checksum<T: Span>(value: T) -> u32 {
    Self::standard().accumulate(value).finalize()
  }

  /// The raw running value.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> u32 {
    self.state
  }

  #[inline]
  #[must_use]
  pub const fn phase(&self) -> Phase {
    self.phase
  }

  /// Strategy of the kernel this engine runs.
  #[inline]
  #[must_use]
  pub const fn strategy(&self) -> Strategy {
    self.kernel.strategy()
  }

  /// Name of the kernel this engine runs (e.g. `"x86_64/pclmulqdq"`).
  #[inline]
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    self.kernel.name()
  }

  /// Whether the CPU offered the hardware kernel when this engine was built.
  #[inline]
  #[must_use]
  pub const fn hardware_available(&self) -> bool {
    self.hardware_available
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Crc32::new()
  }

  #[inline]
  fn with_seed(seed: u32) -> Self {
    let mut crc = Crc32::new();
    crc.seed(seed);
    crc
  }

  #[inline]
  fn accumulate<T: Span>(&mut self, value: T) -> &mut Self {
    Crc32::accumulate(self, value)
  }

  #[inline]
  fn finalize(&self) -> u32 {
    Crc32::finalize(self)
  }

  #[inline]
  fn reset(&mut self) -> &mut Self {
    Crc32::reset(self)
  }
}

#[cfg(test)]
mod tests {
  use traits::Le;

  use super::*;

  fn engines() -> impl Iterator<Item = Crc32> {
    Strategy::ALL.into_iter().filter_map(|s| Crc32::with_strategy(s).ok())
  }

  #[test]
  fn test_fresh_engine() {
    let crc = Crc32::new();
    assert_eq!(crc.state(), 0);
    assert_eq!(crc.phase(), Phase::Fresh);
    assert_eq!(crc.finalize(), 0xFFFF_FFFF);
    assert_eq!(crc.hardware_available(), platform::has_hardware_crc32());
  }

  #[test]
  fn test_standard_vectors() {
    for mut crc in engines() {
      crc.seed(Crc32::STANDARD_SEED);
      assert_eq!(crc.finalize(), 0);
      assert_eq!(crc.accumulate(*b"123456789").finalize(), 0xCBF4_3926, "{}", crc.backend_name());
    }
    assert_eq!(Crc32::checksum(*b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn test_zero_seed_vector() {
    for mut crc in engines() {
      assert_eq!(crc.accumulate(*b"123456789").finalize(), 0xD202_D277);
    }
  }

  #[test]
  fn test_phase_transitions() {
    let mut crc = Crc32::new();
    crc.accumulate(());
    assert_eq!(crc.phase(), Phase::Accumulating);
    let _ = crc.finalize();
    assert_eq!(crc.phase(), Phase::Accumulating);
    crc.seed(7);
    assert_eq!(crc.phase(), Phase::Fresh);
    crc.accumulate(1u8).reset();
    assert_eq!(crc.phase(), Phase::Fresh);
    assert_eq!(crc.state(), 0);
  }

  #[test]
  fn test_finalize_is_idempotent() {
    let mut crc = Crc32::new();
    crc.seed(125).accumulate(Le(2.5f32));
    let first = crc.finalize();
    assert_eq!(crc.finalize(), first);
    assert_eq!(crc.state(), first ^ Crc32::XOR_OUT);
  }

  #[test]
  fn test_harness_baselines() {
    for mut crc in engines() {
      let two = crc.seed(125).accumulate(Le(2.5f32)).accumulate(true).finalize();
      assert_eq!(two, 0x418E_E2F2, "{}", crc.backend_name());

      let three = crc
        .seed(125)
        .accumulate(Le(2.5f32))
        .accumulate(Le(0.1f32))
        .accumulate(true)
        .finalize();
      assert_eq!(three, 0x96B2_8255, "{}", crc.backend_name());
    }
  }

  #[test]
  #[cfg(target_endian = "little")]
  fn test_native_order_baseline() {
    let digest = Crc32::new().seed(125).accumulate(2.5f32).accumulate(true).finalize();
    assert_eq!(digest, 0x418E_E2F2);
  }

  #[test]
  fn test_small_seeds_differ() {
    let digests: [u32; 3] =
      core::array::from_fn(|s| Crc32::new().seed(s as u32).accumulate(Le(2.5f32)).accumulate(true).finalize());
    assert_eq!(digests, [0x40CC_C68C, 0x7DAC_EF3C, 0x3A0C_95EC]);
  }

  #[test]
  fn test_resume_continues_stream() {
    let mut whole = Crc32::standard();
    whole.accumulate(*b"hello, ").accumulate(*b"world");

    let head = Crc32::standard().accumulate(*b"hello, ").finalize();
    let tail = Crc32::resume(head).accumulate(*b"world").finalize();
    assert_eq!(tail, whole.finalize());
  }

  #[test]
  fn test_with_strategy() {
    let crc = Crc32::with_strategy(Strategy::Portable).unwrap();
    assert_eq!(crc.strategy(), Strategy::Portable);
    assert_eq!(crc.backend_name(), "portable/table");

    match Crc32::with_strategy(Strategy::Hardware) {
      Ok(crc) => {
        assert!(platform::has_hardware_crc32());
        assert_eq!(crc.strategy(), Strategy::Hardware);
      }
      Err(err) => {
        assert!(!platform::has_hardware_crc32());
        assert_eq!(err.strategy, Strategy::Hardware);
      }
    }
  }

  #[test]
  fn test_checksum_trait() {
    fn generic<C: Checksum<Output = u32>>() -> u32 {
      C::checksum_with_seed(Crc32::STANDARD_SEED, *b"123456789")
    }
    assert_eq!(generic::<Crc32>(), 0xCBF4_3926);
    assert_eq!(<Crc32 as Checksum>::OUTPUT_SIZE, 4);

    let mut crc = <Crc32 as Checksum>::with_seed(9);
    Checksum::accumulate(&mut crc, 1u8);
    Checksum::reset(&mut crc);
    assert_eq!(Checksum::finalize(&crc), Crc32::new().finalize());
  }

  #[test]
  fn test_generic_digest_matches_inherent() {
    fn generic_digest<C: Checksum<Output = u32>>(seed: u32) -> u32 {
      C::checksum_with_seed(seed, Le(7u64))
    }
    let seeded = Crc32::new().seed(125).accumulate(Le(2.5f32)).accumulate(true).finalize();
    assert_eq!(seeded, 0x418E_E2F2);
    let inherent = Crc32::standard().accumulate(Le(7u64)).finalize();
    assert_eq!(generic_digest::<Crc32>(Crc32::STANDARD_SEED), inherent);
    assert_eq!(inherent, Crc32::checksum(7u64.to_le_bytes()));
  }

  #[test]
  fn test_default_matches_new() {
    let a = Crc32::default();
    let b = Crc32::new();
    assert_eq!(a.state(), b.state());
    assert_eq!(a.backend_name(), b.backend_name());
  }
}
