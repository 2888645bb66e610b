//! The block-oriented scan loop (spec.md §4.5).
//!
//! Mirrors the teacher's `Utf8Validator::next`/`validate_utf8`: peek a
//! block of source elements, take a fast path when the block is pure
//! ASCII, otherwise fall back to decoding one element at a time. The
//! teacher's block is 64 bytes processed as four 16-lane SIMD chunks;
//! this scalar reference uses an 8-element block (`tag::BLOCK`) and a
//! plain loop, per spec.md's "eight source elements" chunk size.

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::ConvertResult;
use crate::tag::BLOCK;

/// Per-encoding ASCII block test and single-unit ASCII widening, used
/// by the scan loop's fast path. ASCII code points are numerically
/// identical to their code unit in every supported encoding, so the
/// fast path never needs the full decoder.
pub trait AsciiScan: Decode {
    /// True when every unit in `block` is an ASCII code point.
    /// `block.len()` may be less than [`BLOCK`] for a tail block.
    fn pure_ascii_block(block: &[Self::Unit]) -> bool;

    /// The scalar value of a code unit already known to be ASCII.
    fn ascii_scalar(unit: Self::Unit) -> u32;
}

impl AsciiScan for crate::tag::Latin1 {
    #[inline]
    fn pure_ascii_block(block: &[u8]) -> bool {
        crate::primitive::pure_ascii_bytes(block)
    }
    #[inline]
    fn ascii_scalar(unit: u8) -> u32 {
        unit as u32
    }
}

impl AsciiScan for crate::tag::Utf8 {
    #[inline]
    fn pure_ascii_block(block: &[u8]) -> bool {
        crate::primitive::pure_ascii_bytes(block)
    }
    #[inline]
    fn ascii_scalar(unit: u8) -> u32 {
        unit as u32
    }
}

impl AsciiScan for crate::tag::Utf16Le {
    #[inline]
    fn pure_ascii_block(block: &[u16]) -> bool {
        block.iter().all(|&u| u16::from_le(u) & 0xFF80 == 0)
    }
    #[inline]
    fn ascii_scalar(unit: u16) -> u32 {
        u16::from_le(unit) as u32
    }
}

impl AsciiScan for crate::tag::Utf16Be {
    #[inline]
    fn pure_ascii_block(block: &[u16]) -> bool {
        block.iter().all(|&u| u16::from_be(u) & 0xFF80 == 0)
    }
    #[inline]
    fn ascii_scalar(unit: u16) -> u32 {
        u16::from_be(unit) as u32
    }
}

impl AsciiScan for crate::tag::Utf32 {
    #[inline]
    fn pure_ascii_block(block: &[u32]) -> bool {
        crate::primitive::pure_ascii_u32(block)
    }
    #[inline]
    fn ascii_scalar(unit: u32) -> u32 {
        unit
    }
}

/// The validating scan: every source element is checked. Stops and
/// reports at the first malformed element.
pub fn scan_validating<S, D>(input: &[S::Unit], output: &mut [D::Unit]) -> ConvertResult
where
    S: AsciiScan,
    D: Encode,
{
    let mut cursor = 0usize;
    let mut writer = 0usize;

    while cursor + BLOCK <= input.len() {
        let block = &input[cursor..cursor + BLOCK];
        if S::pure_ascii_block(block) {
            for &unit in block {
                let scalar = S::ascii_scalar(unit);
                // ASCII scalars (< 0x80) are representable in every
                // destination encoding this crate supports.
                let n = D::encode(scalar, &mut output[writer..]).expect("ascii scalar always encodable");
                writer += n;
            }
            cursor += BLOCK;
            continue;
        }

        if let Some(result) = decode_elements(input, output, &mut cursor, &mut writer, cursor + BLOCK) {
            return result;
        }
    }

    if let Some(result) = decode_elements(input, output, &mut cursor, &mut writer, input.len()) {
        return result;
    }

    ConvertResult {
        error: None,
        input_consumed: input.len(),
        output_written: writer,
    }
}

/// Decode and encode elements starting at `*cursor` until it reaches
/// `limit`, advancing `*cursor`/`*writer` in place. Returns `Some` with
/// the terminal result on the first decode or encode error, `None` if
/// `limit` was reached cleanly.
fn decode_elements<S, D>(
    input: &[S::Unit],
    output: &mut [D::Unit],
    cursor: &mut usize,
    writer: &mut usize,
    limit: usize,
) -> Option<ConvertResult>
where
    S: Decode,
    D: Encode,
{
    while *cursor < limit {
        let (advance, outcome) = S::decode(&input[*cursor..]);
        match outcome {
            Ok(scalar) => match D::encode(scalar, &mut output[*writer..]) {
                Ok(n) => {
                    *writer += n;
                    *cursor += advance;
                }
                Err(kind) => {
                    return Some(ConvertResult {
                        error: Some(kind),
                        input_consumed: *cursor,
                        output_written: *writer,
                    });
                }
            },
            Err(kind) => {
                return Some(ConvertResult {
                    error: Some(kind),
                    input_consumed: *cursor,
                    output_written: *writer,
                });
            }
        }
    }
    None
}

/// The pure-ASCII scan: the caller asserts `input` is entirely ASCII.
/// No validation is performed; each element is widened or narrowed
/// directly. Behavior is unspecified (not unsafe) if the assertion is
/// violated — a non-ASCII unit is still widened using its numeric
/// value, which may not round-trip.
pub fn scan_pure_ascii<S, D>(input: &[S::Unit], output: &mut [D::Unit]) -> ConvertResult
where
    S: AsciiScan,
    D: Encode,
{
    let mut writer = 0usize;
    for &unit in input {
        let scalar = S::ascii_scalar(unit);
        let n = D::encode(scalar, &mut output[writer..]).expect("ascii scalar always encodable");
        writer += n;
    }
    ConvertResult {
        error: None,
        input_consumed: input.len(),
        output_written: writer,
    }
}

/// The already-validated scan: the caller asserts `input` is
/// well-formed for its encoding. All error checks are elided.
pub fn scan_correct<S, D>(input: &[S::Unit], output: &mut [D::Unit]) -> usize
where
    S: Decode,
    D: Encode,
{
    let mut cursor = 0usize;
    let mut writer = 0usize;
    while cursor < input.len() {
        let (advance, scalar) = S::decode_correct(&input[cursor..]);
        let n = D::encode(scalar, &mut output[writer..]).expect("well-formed input always encodable under Correct mode");
        writer += n;
        cursor += advance;
    }
    writer
}
