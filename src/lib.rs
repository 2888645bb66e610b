//! # charxform
//!
//! A validating, allocation-free library for converting strings
//! between LATIN-1, UTF-8, UTF-16 (little- and big-endian) and
//! UTF-32. For every ordered source/destination pair it offers three
//! execution modes — [`Validating`](tag::Validating),
//! [`PureAscii`](tag::PureAscii) and [`Correct`](tag::Correct) — plus
//! a length-prediction query for pre-sizing destination buffers.
//!
//! The public surface lives in [`convert`]; [`tag`] holds the
//! encoding/mode marker types every operation is generic over.
//!
//! SIMD, BOM handling, normalization, case folding and grapheme
//! segmentation are out of scope: this crate converts between encodings
//! and nothing else, leaving those concerns to dedicated crates built
//! on top of it. This crate is `no_std`; the `alloc` feature
//! additionally unlocks [`buffered`], a thin allocating convenience
//! layer.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod convert;
pub mod decode;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod length;
pub mod primitive;
pub mod rewind;
pub mod scan;
pub mod tag;

#[cfg(feature = "alloc")]
pub mod buffered;

pub use error::{ConvertResult, ErrorKind, ValidateResult};
pub use tag::{Correct, Encoding, Latin1, Mode, PureAscii, Utf16Be, Utf16Le, Utf32, Utf8, Validating};

pub use convert::{convert, convert_correct, convert_pure, flip, length_for, validate};
