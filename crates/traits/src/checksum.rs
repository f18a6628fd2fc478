//! Streaming checksum trait.
//!
//! - **Typed input**: values are folded through their fixed-size byte representation
//! - **Streaming**: a running value is seeded once and fed incrementally
//! - **Chaining**: mutating operations return `&mut Self`

use core::fmt::Debug;

use crate::span::Span;

/// Checksum over a stream of typed values.
///
/// An engine owns a running value. Callers seed it, feed it any number of
/// [`Span`]s and read a digest with [`finalize`](Self::finalize).
///
/// # Usage
///
/// ```rust,ignore
/// use crcfold::{Checksum, Crc32};
///
/// let digest = Crc32::new().seed(125).accumulate(2.5f32).accumulate(true).finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the engine to the state returned by `new()`
/// - accumulating `a` then `b` must equal accumulating the concatenation of their bytes
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a fresh engine.
  #[must_use]
  fn new() -> Self;

  /// Create an engine whose running value is `seed`.
  #[must_use]
  fn with_seed(seed: Self::Output) -> Self;

  /// Fold the byte representation of `value` into the running value.
  fn accumulate<T: Span>(&mut self, value: T) -> &mut Self;

  /// Return the digest for everything accumulated so far.
  ///
  /// This does not consume or modify the engine.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Restore the engine to its fresh state.
  fn reset(&mut self) -> &mut Self;

  /// Digest of a single value under `seed`.
  #[inline]
  #[must_use]
  fn checksum_with_seed<T: Span>(seed: Self::Output, value: T) -> Self::Output {
    let mut engine = Self::with_seed(seed);
    engine.accumulate(value);
    engine.finalize()
  }
}
