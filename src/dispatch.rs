//! The runtime dispatch helper (spec.md §9 Design Notes).
//!
//! [`crate::convert`] is generic over compile-time marker types, so
//! every `(S, D, Mode)` triple a caller actually invokes is a distinct
//! monomorphic path with no virtual dispatch. This module is the one
//! place that bridges a *runtime* `(Encoding, Encoding, Mode)` value —
//! e.g. parsed from a command-line flag by some external wrapper, per
//! spec.md §6 — back into the correct monomorphic call, via a single
//! closed match generated once by macro instead of by hand for each
//! of the 25 encoding pairs.

use crate::encode::Encode;
use crate::error::ConvertResult;
use crate::scan::AsciiScan;
use crate::tag::{Encoding, Latin1, Mode, Utf16Be, Utf16Le, Utf32, Utf8};

/// A borrowed source buffer whose code unit width matches some
/// runtime [`Encoding`].
#[derive(Debug, Clone, Copy)]
pub enum Units<'a> {
    Bytes(&'a [u8]),
    Words(&'a [u16]),
    DWords(&'a [u32]),
}

/// A borrowed, writable destination buffer whose code unit width
/// matches some runtime [`Encoding`].
#[derive(Debug)]
pub enum UnitsMut<'a> {
    Bytes(&'a mut [u8]),
    Words(&'a mut [u16]),
    DWords(&'a mut [u32]),
}

/// `convert_runtime` was called with a buffer whose code unit width
/// does not match the runtime encoding tag it was paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitWidthMismatch;

macro_rules! with_source {
    ($encoding:expr, $units:expr, |$bound:ident: $marker:ty| $body:expr) => {
        match ($encoding, $units) {
            (Encoding::Latin1, Units::Bytes($bound)) => {
                type $marker = Latin1;
                $body
            }
            (Encoding::Utf8, Units::Bytes($bound)) => {
                type $marker = Utf8;
                $body
            }
            (Encoding::Utf16Le, Units::Words($bound)) => {
                type $marker = Utf16Le;
                $body
            }
            (Encoding::Utf16Be, Units::Words($bound)) => {
                type $marker = Utf16Be;
                $body
            }
            (Encoding::Utf32, Units::DWords($bound)) => {
                type $marker = Utf32;
                $body
            }
            _ => return Err(UnitWidthMismatch),
        }
    };
}

macro_rules! with_dest {
    ($encoding:expr, $units:expr, |$bound:ident: $marker:ty| $body:expr) => {
        match ($encoding, $units) {
            (Encoding::Latin1, UnitsMut::Bytes($bound)) => {
                type $marker = Latin1;
                $body
            }
            (Encoding::Utf8, UnitsMut::Bytes($bound)) => {
                type $marker = Utf8;
                $body
            }
            (Encoding::Utf16Le, UnitsMut::Words($bound)) => {
                type $marker = Utf16Le;
                $body
            }
            (Encoding::Utf16Be, UnitsMut::Words($bound)) => {
                type $marker = Utf16Be;
                $body
            }
            (Encoding::Utf32, UnitsMut::DWords($bound)) => {
                type $marker = Utf32;
                $body
            }
            _ => return Err(UnitWidthMismatch),
        }
    };
}

/// Convert `input` (tagged `src`) into `output` (tagged `dst`) under
/// `mode`, resolving the five-by-five-by-three matrix of concrete
/// `(S, D, Mode)` instantiations via one closed match.
///
/// Returns `Err(UnitWidthMismatch)` if `input`'s or `output`'s variant
/// does not match the code unit width `src`/`dst` implies — this is a
/// caller bug (mismatched runtime tag and buffer), not a decode error.
pub fn convert_runtime(
    src: Encoding,
    dst: Encoding,
    mode: Mode,
    input: Units<'_>,
    output: UnitsMut<'_>,
) -> Result<ConvertResult, UnitWidthMismatch> {
    with_source!(src, input, |input: S| {
        with_dest!(dst, output, |output: D| Ok(convert_one::<S, D>(
            mode, input, output
        )))
    })
}

fn convert_one<S, D>(mode: Mode, input: &[S::Unit], output: &mut [D::Unit]) -> ConvertResult
where
    S: AsciiScan,
    D: Encode,
{
    match mode {
        Mode::Validating => crate::convert::convert::<S, D>(input, output),
        Mode::PureAscii => crate::convert::convert_pure::<S, D>(input, output),
        Mode::Correct => ConvertResult {
            error: None,
            input_consumed: input.len(),
            output_written: crate::convert::convert_correct::<S, D>(input, output),
        },
    }
}
