use charxform::tag::{Utf16Le, Utf8};
use charxform::{convert, length_for};

fn main() {
    let data = b"hello world!";

    let len = length_for::<Utf8, Utf16Le>(data);
    let mut out = vec![0u16; len];
    let result = convert::<Utf8, Utf16Le>(data, &mut out);

    match result.error {
        None => println!("converted {} UTF-16 code units", result.output_written),
        Some(err) => println!("invalid input at byte {}: {err}", result.input_consumed),
    }
}
