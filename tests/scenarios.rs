//! The literal end-to-end scenarios from spec.md §8, run against the
//! public dispatch surface rather than any one internal module.

use charxform::tag::{Latin1, Utf16Le, Utf32, Utf8};
use charxform::{convert, convert_correct, length_for, validate, ErrorKind};

#[test]
fn scenario_1_hello_to_utf16le() {
    let input = b"Hello";
    let mut out = [0u16; 5];
    let r = convert::<Utf8, Utf16Le>(input, &mut out);
    assert_eq!(r.error, None);
    assert_eq!(r.output_written, 5);
    let bytes: Vec<u8> = out.iter().flat_map(|u| u.to_le_bytes()).collect();
    assert_eq!(bytes, [0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x6C, 0x00, 0x6F, 0x00]);
}

#[test]
fn scenario_2_nihao_to_utf32() {
    let input = [0xE4u8, 0xBD, 0xA0, 0xE5, 0xA5, 0xBD];
    let mut out = [0u32; 2];
    let r = convert::<Utf8, Utf32>(&input, &mut out);
    assert_eq!(r.error, None);
    assert_eq!(r.output_written, 2);
    assert_eq!(out, [0x4F60, 0x597D]);
}

#[test]
fn scenario_3_emoji_to_utf16le_surrogate_pair() {
    let input = [0xF0u8, 0x9F, 0x98, 0x80];
    let mut out = [0u16; 2];
    let r = convert::<Utf8, Utf16Le>(&input, &mut out);
    assert_eq!(r.error, None);
    assert_eq!(r.output_written, 2);
    let bytes: Vec<u8> = out.iter().flat_map(|u| u.to_le_bytes()).collect();
    assert_eq!(bytes, [0x3D, 0xD8, 0x00, 0xDE]);
}

#[test]
fn scenario_4_overlong_slash_rejected() {
    let input = [0xC0u8, 0xAF];
    let r = validate::<Utf8>(&input);
    assert_eq!(r.error, Some(ErrorKind::OverlongSequence));
    assert_eq!(r.input_consumed, 0);
}

#[test]
fn scenario_5_surrogate_in_scalar_rejected() {
    let input = [0xEDu8, 0xA0, 0x80];
    let r = validate::<Utf8>(&input);
    assert_eq!(r.error, Some(ErrorKind::SurrogateInScalar));
    assert_eq!(r.input_consumed, 0);
}

#[test]
fn scenario_6_lone_high_surrogate_rejected() {
    let input = [0xD83Du16]; // bytes "3D D8" assembled little-endian
    let r = validate::<Utf16Le>(&input);
    assert_eq!(r.error, Some(ErrorKind::SurrogateMismatch));
    assert_eq!(r.input_consumed, 0);
}

#[test]
fn scenario_7_utf32_too_large_rejected() {
    let input = [0x0011_0000u32];
    let mut out = [0u8; 4];
    let r = convert::<Utf32, Utf8>(&input, &mut out);
    assert_eq!(r.error, Some(ErrorKind::TooLarge));
    assert_eq!(r.input_consumed, 0);
}

#[test]
fn scenario_8_latin1_to_utf8() {
    let input = [0xC4u8, 0xE9];
    let mut out = [0u8; 4];
    let r = convert::<Latin1, Utf8>(&input, &mut out);
    assert_eq!(r.error, None);
    assert_eq!(r.output_written, 4);
    assert_eq!(&out[..4], &[0xC3, 0x84, 0xC3, 0xA9]);
}

#[test]
fn invariant_length_predictor_agrees_with_convert() {
    let input = "mixed ascii and non-ascii: 你好世界 🦀".as_bytes();
    let predicted = length_for::<Utf8, Utf32>(input);
    let mut out = vec![0u32; predicted];
    let r = convert::<Utf8, Utf32>(input, &mut out);
    assert_eq!(r.error, None);
    assert_eq!(predicted, r.output_written);
}

#[test]
fn invariant_validate_consumed_never_exceeds_input_len() {
    let cases: &[&[u8]] = &[b"", b"abc", &[0xFF], &[0xE4, 0xBD, 0xA0]];
    for &input in cases {
        let r = validate::<Utf8>(input);
        assert!(r.input_consumed <= input.len());
        assert_eq!(r.error.is_none(), r.input_consumed == input.len());
    }
}

#[test]
fn invariant_ascii_input_is_mode_independent() {
    let input = b"all ascii, nothing else";
    let mut validating = [0u32; 32];
    let mut correct = [0u32; 32];
    let mut pure = [0u32; 32];

    let v = convert::<Utf8, Utf32>(input, &mut validating);
    let c = convert_correct::<Utf8, Utf32>(input, &mut correct);
    let p = charxform::convert_pure::<Utf8, Utf32>(input, &mut pure);

    assert_eq!(v.output_written, input.len());
    assert_eq!(c, input.len());
    assert_eq!(p.output_written, input.len());
    assert_eq!(&validating[..v.output_written], &correct[..c]);
    assert_eq!(&validating[..v.output_written], &pure[..p.output_written]);
}

#[test]
fn invariant_flip_is_an_involution() {
    let input = [0x0041u16, 0xD83D, 0xDE00, 0x00FF];
    let mut once = [0u16; 4];
    charxform::flip(&input, &mut once);
    let mut twice = [0u16; 4];
    charxform::flip(&once, &mut twice);
    assert_eq!(twice, input);
}

#[test]
fn round_trip_through_intermediate_encoding_is_idempotent() {
    let original = "Grüße, 世界! 🎉".as_bytes();

    let len16 = length_for::<Utf8, Utf16Le>(original);
    let mut utf16 = vec![0u16; len16];
    let r1 = convert::<Utf8, Utf16Le>(original, &mut utf16);
    assert_eq!(r1.error, None);

    let len32 = length_for::<Utf16Le, Utf32>(&utf16);
    let mut utf32 = vec![0u32; len32];
    let r2 = convert::<Utf16Le, Utf32>(&utf16, &mut utf32);
    assert_eq!(r2.error, None);

    let len8 = length_for::<Utf32, Utf8>(&utf32);
    let mut back = vec![0u8; len8];
    let r3 = convert::<Utf32, Utf8>(&utf32, &mut back);
    assert_eq!(r3.error, None);

    assert_eq!(back, original);
}
