//! Typed byte spans.
//!
//! A [`Span`] is a value with a fixed-size byte representation. Checksum
//! engines consume spans rather than arbitrary buffers: the length of every
//! input is known from its type.
//!
//! # Byte Order
//!
//! Primitive spans use the **native** byte order of the target (`to_ne_bytes`),
//! so the same value produces different digests on little- and big-endian
//! machines. Wrap a value in [`Le`] or [`Be`] to fold a canonical order instead.
//!
//! | Type | Bytes |
//! |------|-------|
//! | `u8`..`u128`, `i8`..`i128`, `usize`, `isize` | `to_ne_bytes()` |
//! | `f32`, `f64` | `to_ne_bytes()` (IEEE 754 bit pattern) |
//! | `bool` | one byte, `0` or `1` |
//! | `char` | scalar value as `u32` |
//! | `()` | none |
//! | `[u8; N]` | the array itself |
//! | `[T; N]` | each element in order |
//! | `Le<T>` / `Be<T>` | `to_le_bytes()` / `to_be_bytes()` |

/// A value with a fixed-size byte representation.
///
/// # Contract
///
/// `feed` hands the value's bytes to `sink` in memory order. It may call
/// `sink` any number of times; the concatenation of all slices must equal the
/// value's full byte representation and must not depend on anything but the
/// value itself.
pub trait Span {
  /// Hand the byte representation of `self` to `sink`.
  fn feed<F: FnMut(&[u8])>(&self, sink: &mut F);
}

impl<T: Span + ?Sized> Span for &T {
  #[inline]
  fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
    (**self).feed(sink);
  }
}

macro_rules! impl_span_ne {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Span for $ty {
        #[inline]
        fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
          sink(&self.to_ne_bytes());
        }
      }
    )*
  };
}

impl_span_ne!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Span for bool {
  #[inline]
  fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
    sink(&[u8::from(*self)]);
  }
}

impl Span for char {
  #[inline]
  fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
    sink(&u32::from(*self).to_ne_bytes());
  }
}

impl Span for () {
  #[inline]
  fn feed<F: FnMut(&[u8])>(&self, _sink: &mut F) {}
}

impl<const N: usize> Span for [u8; N] {
  #[inline]
  fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
    sink(self);
  }
}

// Arrays of wider elements are fed element by element. Arrays carry no
// padding, so this matches the array's in-memory representation.
macro_rules! impl_span_array {
  ($($ty:ty),* $(,)?) => {
    $(
      impl<const N: usize> Span for [$ty; N] {
        #[inline]
        fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
          for item in self {
            item.feed(sink);
          }
        }
      }
    )*
  };
}

impl_span_array!(u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char);

/// Little-endian view of a numeric value.
///
/// Folds `to_le_bytes()` regardless of the target's byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Le<T>(pub T);

/// Big-endian view of a numeric value.
///
/// Folds `to_be_bytes()` regardless of the target's byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Be<T>(pub T);

macro_rules! impl_span_endian {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Span for Le<$ty> {
        #[inline]
        fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
          sink(&self.0.to_le_bytes());
        }
      }

      impl Span for Be<$ty> {
        #[inline]
        fn feed<F: FnMut(&[u8])>(&self, sink: &mut F) {
          sink(&self.0.to_be_bytes());
        }
      }
    )*
  };
}

impl_span_endian!(u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64);
