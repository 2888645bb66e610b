//! The mode dispatcher (spec.md §4.6): the public surface over every
//! `(S, D, Mode)` combination. Each function here is a thin,
//! fully-monomorphizing wrapper around [`crate::scan`] and
//! [`crate::length`] — grounded on the teacher's `from_utf8` /
//! `from_utf8_unchecked` pairing, generalized from "one encoding, two
//! trust levels" to "five encodings, three trust levels".

use crate::encode::Encode;
use crate::error::{ConvertResult, ErrorKind, ValidateResult};
use crate::scan::{scan_correct, scan_pure_ascii, scan_validating, AsciiScan};
use crate::tag::{Utf16Be, Utf16Le};

/// Validate `input` for well-formedness under its own encoding,
/// without producing any output.
///
/// Walks the same decoder `convert` uses, but writes nothing — there
/// is no destination encoding to size a throwaway buffer for.
pub fn validate<S>(input: &[S::Unit]) -> ValidateResult
where
    S: crate::decode::Decode,
{
    let mut cursor = 0usize;
    while cursor < input.len() {
        let (advance, outcome) = S::decode(&input[cursor..]);
        match outcome {
            Ok(_) => cursor += advance,
            Err(kind) => {
                return ValidateResult {
                    error: Some(kind),
                    input_consumed: cursor,
                };
            }
        }
    }
    ValidateResult {
        error: None,
        input_consumed: input.len(),
    }
}

/// Predict the number of destination elements a validating `convert`
/// to `D` would write for `input`.
pub fn length_for<S, D>(input: &[S::Unit]) -> usize
where
    S: AsciiScan,
    D: Encode,
{
    crate::length::length_for::<S, D>(input)
}

/// Validate and convert `input` into `output`, stopping at the first
/// malformed source element.
pub fn convert<S, D>(input: &[S::Unit], output: &mut [D::Unit]) -> ConvertResult
where
    S: AsciiScan,
    D: Encode,
{
    scan_validating::<S, D>(input, output)
}

/// Convert `input` into `output` assuming `input` is entirely ASCII.
/// Validation is elided; behavior on non-ASCII input is unspecified
/// but not unsafe (see [`crate::scan::scan_pure_ascii`]).
pub fn convert_pure<S, D>(input: &[S::Unit], output: &mut [D::Unit]) -> ConvertResult
where
    S: AsciiScan,
    D: Encode,
{
    scan_pure_ascii::<S, D>(input, output)
}

/// Convert `input` into `output` assuming `input` is well-formed for
/// its encoding. All error checks are elided.
pub fn convert_correct<S, D>(input: &[S::Unit], output: &mut [D::Unit]) -> usize
where
    S: AsciiScan,
    D: Encode,
{
    scan_correct::<S, D>(input, output)
}

/// Byte-swap a UTF-16 buffer with no validation at all — neither
/// `input` nor `output` is checked for well-formedness.
pub fn flip(input: &[u16], output: &mut [u16]) {
    for (i, &unit) in input.iter().enumerate() {
        output[i] = unit.swap_bytes();
    }
}

/// Byte-order-flipping conversion `Utf16Le -> Utf16Be`, validating as
/// it goes (stops at the first surrogate mismatch).
pub fn utf16le_to_utf16be(input: &[u16], output: &mut [u16]) -> ConvertResult {
    convert::<Utf16Le, Utf16Be>(input, output)
}

/// Byte-order-flipping conversion `Utf16Be -> Utf16Le`, validating as
/// it goes (stops at the first surrogate mismatch).
pub fn utf16be_to_utf16le(input: &[u16], output: &mut [u16]) -> ConvertResult {
    convert::<Utf16Be, Utf16Le>(input, output)
}

// Identity conversions (S == D) are structural copies with
// validation; they fall out of the generic `convert`/`validate`
// machinery above without any special-casing, since `Decode`/`Encode`
// are implemented per concrete marker type rather than per pair.
