//! UTF-8 recovery helper (spec.md §4.6/§7).
//!
//! When a block-level scan rejects a chunk, the caller may want to
//! know exactly where within that chunk the sequence actually started
//! going wrong rather than trusting the block boundary. `rewind_and_validate`
//! walks backward from a mid-stream cursor to the nearest UTF-8 leading
//! byte and re-validates forward from there, grounded on the backward
//! leading-byte scan in `scalar_1.hpp`.

use crate::decode::Decode;
use crate::error::ValidateResult;
use crate::primitive::is_utf8_continuation;
use crate::tag::Utf8;

/// The longest a UTF-8 sequence can be; rewinding never needs to look
/// back further than this to find a leading byte.
const MAX_SEQUENCE_LEN: usize = 4;

/// Walk backward from `cursor` to the nearest leading byte (or index
/// `0`), then validate forward from there to the end of `input`.
///
/// Returns the index the rewind landed on together with the
/// [`ValidateResult`] of validating `input[start..]` (so
/// `result.input_consumed` is relative to `start`, not to the original
/// `input`).
pub fn rewind_and_validate(input: &[u8], cursor: usize) -> (usize, ValidateResult) {
    let cursor = cursor.min(input.len());
    let floor = cursor.saturating_sub(MAX_SEQUENCE_LEN);
    let mut start = cursor;
    while start > floor && start > 0 && is_utf8_continuation(input[start]) {
        start -= 1;
    }
    // `start` may still point at a continuation byte if `input` never
    // contained a leading byte within range; validation below will
    // correctly report that as `HeaderBits`/`TooShort` rather than
    // silently accepting it.

    let rest = &input[start..];
    let mut offset = 0usize;
    while offset < rest.len() {
        let (advance, outcome) = Utf8::decode(&rest[offset..]);
        match outcome {
            Ok(_) => offset += advance,
            Err(kind) => {
                return (
                    start,
                    ValidateResult {
                        error: Some(kind),
                        input_consumed: offset,
                    },
                );
            }
        }
    }

    (
        start,
        ValidateResult {
            error: None,
            input_consumed: rest.len(),
        },
    )
}
