//! CRC-32 (IEEE 802.3) over typed values, with runtime-selected hardware
//! acceleration.
//!
//! An engine is seeded, fed any number of fixed-size values (integers, floats,
//! `bool`, `char`, arrays of those) and finalized into a 32-bit digest. Every
//! value is folded through its byte representation, so `accumulate(a)` then
//! `accumulate(b)` equals one pass over `a`'s bytes followed by `b`'s.
//!
//! # Strategies
//!
//! | Strategy | Kernel | Where |
//! |----------|--------|-------|
//! | [`Strategy::Portable`] | `portable/table` | everywhere (256-entry const table) |
//! | [`Strategy::Hardware`] | `x86_64/pclmulqdq` | x86_64 with PCLMULQDQ |
//! | [`Strategy::Hardware`] | `aarch64/crc` | aarch64 with the CRC extension |
//!
//! Both strategies compute the same polynomial (reflected `0xEDB88320`), so
//! digests never depend on which one ran. The default is chosen once per
//! process; set `CRCFOLD_FORCE=portable` (or `hardware`) to pin it.
//!
//! # Example
//!
//! ```rust
//! use crcfold::{Crc32, Le};
//!
//! // Standard CRC-32 (as in zlib, gzip, PNG)
//! assert_eq!(Crc32::checksum(*b"123456789"), 0xCBF4_3926);
//!
//! // Streaming over typed values
//! let digest = Crc32::new().seed(125).accumulate(Le(2.5f32)).accumulate(true).finalize();
//! assert_eq!(digest, 0x418E_E2F2);
//! ```
//!
//! # Byte Order
//!
//! Plain values are folded in the target's native byte order; wrap them in
//! [`Le`] or [`Be`] for digests that agree across platforms.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Without `std` the kernel is selected from
//! compile-time target features and the environment is not consulted:
//!
//! ```toml
//! [dependencies]
//! crcfold = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_arch = "aarch64")]
mod aarch64;
pub mod config;
pub mod diag;
pub mod dispatch;
mod engine;
mod error;
mod introspect;
pub mod portable;
pub mod table;
#[cfg(target_arch = "x86_64")]
mod x86_64;

pub use config::Force;
pub use dispatch::{Kernel, Strategy};
pub use engine::{Crc32, Phase};
pub use error::{ParseStrategyError, StrategyUnavailable};
pub use introspect::DispatchInfo;
pub use traits::{Be, Checksum, Le, Span};
