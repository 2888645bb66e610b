//! Length predictors (spec.md §4.4).
//!
//! One single-pass routine per (source, destination) pair, sharing the
//! decoder's state machine and running every scalar through the real
//! encoder — into a throwaway scratch buffer — instead of a
//! closed-form formula. This crate picks the *stop-at-first-error*
//! contract (see SPEC_FULL.md §6 and DESIGN.md): `length_for` mirrors
//! `convert` exactly, including early termination on the first
//! malformed *or unencodable* element, so the two never disagree
//! regardless of whether the input is well-formed.

use crate::encode::Encode;
use crate::scan::AsciiScan;
use crate::tag::BLOCK;

/// Predict the number of destination elements a validating `convert`
/// would write for `input`, stopping at the first decode error exactly
/// as `convert` does.
pub fn length_for<S, D>(input: &[S::Unit]) -> usize
where
    S: AsciiScan,
    D: Encode,
{
    let mut cursor = 0usize;
    let mut count = 0usize;

    while cursor + BLOCK <= input.len() {
        let block = &input[cursor..cursor + BLOCK];
        if S::pure_ascii_block(block) {
            // Every ASCII scalar encodes to exactly one destination
            // element in every supported encoding.
            count += BLOCK;
            cursor += BLOCK;
            continue;
        }
        match count_elements::<S, D>(input, &mut cursor, cursor + BLOCK) {
            Some(added) => count += added,
            None => return count,
        }
    }

    match count_elements::<S, D>(input, &mut cursor, input.len()) {
        Some(added) => count += added,
        None => return count,
    }

    count
}

fn count_elements<S, D>(input: &[S::Unit], cursor: &mut usize, limit: usize) -> Option<usize>
where
    S: AsciiScan,
    D: Encode,
{
    // Widest any single scalar encodes to across the supported
    // destinations (four UTF-8 bytes); never read back, only sized.
    let mut scratch = [D::Unit::default(); 4];
    let mut added = 0usize;
    while *cursor < limit {
        let (advance, outcome) = S::decode(&input[*cursor..]);
        match outcome {
            Ok(scalar) => match D::encode(scalar, &mut scratch) {
                Ok(n) => {
                    added += n;
                    *cursor += advance;
                }
                Err(_) => return None,
            },
            Err(_) => return None,
        }
    }
    Some(added)
}
