//! The buffered convenience layer (spec.md §4.8/§9), gated behind the
//! `alloc` feature.
//!
//! Composes [`crate::length::length_for`] and [`crate::convert::convert`]
//! exactly as spec.md's "string-builder convenience layer" note
//! describes: allocate, size via the predictor, fill, return. Grounded
//! on `residua-cesu8`'s `std`/`alloc` feature split for the Cargo
//! plumbing; the crate itself (not a generated string container) owns
//! allocator choice, per spec.md's explicit out-of-scope note on
//! string containers.

use alloc::vec;
use alloc::vec::Vec;

use crate::encode::Encode;
use crate::error::ErrorKind;
use crate::scan::AsciiScan;

/// Convert `input` into an owned, exactly-sized `Vec` of destination
/// code units.
///
/// If `input` is malformed, the returned `Vec` holds the successfully
/// converted prefix (its length equals the conversion's
/// `output_written`) and the second element of the tuple names the
/// error.
pub fn to_vec<S, D>(input: &[S::Unit]) -> (Vec<D::Unit>, Option<ErrorKind>)
where
    S: AsciiScan,
    D: Encode,
{
    let capacity = crate::length::length_for::<S, D>(input);
    let mut output = vec![D::Unit::default(); capacity];
    let result = crate::convert::convert::<S, D>(input, &mut output);
    output.truncate(result.output_written);
    (output, result.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Utf16Le, Utf8};

    #[test]
    fn converts_well_formed_input_fully() {
        let (out, err) = to_vec::<Utf8, Utf16Le>(b"Hello");
        assert!(err.is_none());
        assert_eq!(out, [0x0048, 0x0065, 0x006C, 0x006C, 0x006F]);
    }

    #[test]
    fn truncates_to_valid_prefix_on_error() {
        let input = [b'a', b'b', 0xC0, 0xAF];
        let (out, err) = to_vec::<Utf8, Utf16Le>(&input);
        assert_eq!(err, Some(ErrorKind::OverlongSequence));
        assert_eq!(out, [b'a' as u16, b'b' as u16]);
    }
}
