//! Digests of typed values equal digests of their byte representations.

use crcfold::{Be, Crc32, Le, Span};

fn bytes_of<T: Span>(value: T) -> Vec<u8> {
  let mut out = Vec::new();
  value.feed(&mut |bytes: &[u8]| out.extend_from_slice(bytes));
  out
}

fn digest_of_bytes(seed: u32, bytes: &[u8]) -> u32 {
  let mut crc = Crc32::portable();
  crc.seed(seed);
  for &b in bytes {
    crc.accumulate(b);
  }
  crc.finalize()
}

fn check<T: Span + Copy>(value: T, expected_bytes: &[u8]) {
  assert_eq!(bytes_of(value), expected_bytes);
  let typed = Crc32::new().seed(0x1234_5678).accumulate(value).finalize();
  assert_eq!(typed, digest_of_bytes(0x1234_5678, expected_bytes));
}

#[test]
fn integers_use_native_order() {
  check(0xABu8, &[0xAB]);
  check(-1i8, &[0xFF]);
  check(0x0102u16, &0x0102u16.to_ne_bytes());
  check(0x0102_0304u32, &0x0102_0304u32.to_ne_bytes());
  check(-5i64, &(-5i64).to_ne_bytes());
  check(u128::MAX - 1, &(u128::MAX - 1).to_ne_bytes());
  check(usize::MAX, &usize::MAX.to_ne_bytes());
  check(isize::MIN, &isize::MIN.to_ne_bytes());
}

#[test]
fn floats_use_bit_pattern() {
  check(2.5f32, &2.5f32.to_ne_bytes());
  check(-0.0f64, &(-0.0f64).to_ne_bytes());
  check(f32::NAN, &f32::NAN.to_ne_bytes());
  assert_ne!(bytes_of(0.0f32), bytes_of(-0.0f32));
}

#[test]
fn bool_char_unit() {
  check(true, &[1]);
  check(false, &[0]);
  check('é', &u32::from('é').to_ne_bytes());
  check((), &[]);
  assert_eq!(Crc32::new().accumulate(()).finalize(), Crc32::new().finalize());
}

#[test]
fn arrays() {
  check(*b"abc", b"abc");
  check([0u8; 0], &[]);
  let mut expected = Vec::new();
  for v in [1u32, 2, 3] {
    expected.extend_from_slice(&v.to_ne_bytes());
  }
  check([1u32, 2, 3], &expected);
  check([true, false], &[1, 0]);
}

#[test]
fn references_forward() {
  let value = 0x55AA_u16;
  check(&value, &value.to_ne_bytes());
}

#[test]
fn endian_wrappers_are_platform_independent() {
  check(Le(0x0102_0304u32), &[4, 3, 2, 1]);
  check(Be(0x0102_0304u32), &[1, 2, 3, 4]);
  check(Le(2.5f32), &[0x00, 0x00, 0x20, 0x40]);
  check(Be(2.5f32), &[0x40, 0x20, 0x00, 0x00]);
  check(Be(-2i16), &[0xFF, 0xFE]);
}

#[test]
#[cfg(target_endian = "little")]
fn native_equals_le_on_little_endian() {
  assert_eq!(
    Crc32::new().seed(125).accumulate(2.5f32).accumulate(true).finalize(),
    Crc32::new().seed(125).accumulate(Le(2.5f32)).accumulate(true).finalize()
  );
}
