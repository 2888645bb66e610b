//! Compile-time encoding and mode tags.
//!
//! The scan loop in [`crate::scan`] is generic over `S: EncodingTag`,
//! `D: EncodingTag` and `M: ModeTag`. Each concrete instantiation is a
//! distinct monomorphic function with no virtual dispatch; [`Encoding`]
//! and [`Mode`] exist only so a caller holding a *runtime* value (e.g.
//! parsed from a command-line flag by some external wrapper) can be
//! routed to the right instantiation through a closed `match`.

/// A source or destination character encoding, known at runtime.
///
/// Used only at dispatch boundaries; the scan loop itself is
/// monomorphized over the marker types below, never over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Latin1,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32,
}

/// An execution mode, known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every source element is checked; malformed input is reported.
    Validating,
    /// The caller asserts the source is entirely ASCII.
    PureAscii,
    /// The caller asserts the source is well-formed for its encoding.
    Correct,
}

mod sealed {
    pub trait Sealed {}
}

/// A zero-sized marker for one of the five supported encodings.
///
/// Implemented exactly once per marker type below; the trait is
/// sealed so no foreign encoding can be plugged into the scanner.
pub trait EncodingTag: sealed::Sealed + Copy {
    /// The code unit type this encoding is made of.
    type Unit: Copy + Default + 'static;

    /// The runtime tag corresponding to this marker type.
    const ENCODING: Encoding;

    /// Byte width of one code unit (1, 2 or 4).
    const UNIT_BYTES: usize;
}

/// A zero-sized marker for one of the three execution modes.
pub trait ModeTag: sealed::Sealed {
    const MODE: Mode;
}

/// LATIN-1 marker type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;
/// UTF-8 marker type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;
/// UTF-16, little-endian, marker type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Le;
/// UTF-16, big-endian, marker type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Be;
/// UTF-32, host byte order, marker type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf32;

impl sealed::Sealed for Latin1 {}
impl sealed::Sealed for Utf8 {}
impl sealed::Sealed for Utf16Le {}
impl sealed::Sealed for Utf16Be {}
impl sealed::Sealed for Utf32 {}

impl EncodingTag for Latin1 {
    type Unit = u8;
    const ENCODING: Encoding = Encoding::Latin1;
    const UNIT_BYTES: usize = 1;
}

impl EncodingTag for Utf8 {
    type Unit = u8;
    const ENCODING: Encoding = Encoding::Utf8;
    const UNIT_BYTES: usize = 1;
}

impl EncodingTag for Utf16Le {
    type Unit = u16;
    const ENCODING: Encoding = Encoding::Utf16Le;
    const UNIT_BYTES: usize = 2;
}

impl EncodingTag for Utf16Be {
    type Unit = u16;
    const ENCODING: Encoding = Encoding::Utf16Be;
    const UNIT_BYTES: usize = 2;
}

impl EncodingTag for Utf32 {
    type Unit = u32;
    const ENCODING: Encoding = Encoding::Utf32;
    const UNIT_BYTES: usize = 4;
}

/// Validating mode marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validating;
/// ASCII-assumed mode marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct PureAscii;
/// Already-validated mode marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Correct;

impl sealed::Sealed for Validating {}
impl sealed::Sealed for PureAscii {}
impl sealed::Sealed for Correct {}

impl ModeTag for Validating {
    const MODE: Mode = Mode::Validating;
}
impl ModeTag for PureAscii {
    const MODE: Mode = Mode::PureAscii;
}
impl ModeTag for Correct {
    const MODE: Mode = Mode::Correct;
}

/// Number of source code units processed per scan-loop block.
pub const BLOCK: usize = 8;
