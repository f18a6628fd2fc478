//! Core traits for crcfold.
//!
//! This crate provides the vocabulary shared by the checksum engine and its
//! callers. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Seeded, chainable checksum over typed values | CRC-32 |
//! | [`Span`] | Fixed-size byte representation of a value | `u32`, `f32`, `bool`, `[u8; N]` |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod span;

pub use checksum::Checksum;
pub use span::{Be, Le, Span};
