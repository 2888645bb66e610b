use charxform::tag::{Utf32, Utf8};
use charxform::{convert, convert_correct, convert_pure, validate};

fn main() {
    let well_formed = "héllo wörld".as_bytes();

    // Validating mode: checks every byte, reports precise errors.
    let validated = validate::<Utf8>(well_formed);
    assert!(validated.error.is_none());

    let mut out = [0u32; 32];

    // Correct mode: caller asserts well-formedness, all checks elided.
    let written = convert_correct::<Utf8, Utf32>(well_formed, &mut out);
    println!("convert_correct wrote {written} scalars");

    // Pure-ASCII mode: caller asserts the input is ASCII only.
    let ascii = b"just plain ascii";
    let mut ascii_out = [0u32; 32];
    let pure = convert_pure::<Utf8, Utf32>(ascii, &mut ascii_out);
    println!("convert_pure wrote {} scalars", pure.output_written);

    // Validating mode surfaces a precise error offset on bad input.
    let bad = [b'o', b'k', 0xC0, 0xAF];
    let mut bad_out = [0u32; 8];
    let result = convert::<Utf8, Utf32>(&bad, &mut bad_out);
    println!(
        "rejected at byte {} ({:?}); {} scalars written before the error",
        result.input_consumed, result.error, result.output_written
    );
}
