//! Text parsing.
//!
//! Parsing happens in two steps:
//! 1. Pick a layout, either from an explicit format letter or by looking at the text.
//! 2. Validate the text against that layout's fixed offsets: exact length first, then every
//!    separator, then every hex digit. The first failed check is reported.
//!
//! Results are assembled in a local buffer and only turned into a [`Uuid`] on success, so a
//! failed parse never exposes partially decoded bytes.

use crate::hex::{decode_nibble, CodeUnit};
use crate::layout::{Format, Layout};
use crate::{ParseError, Uuid, UuidError, UuidResult};
use std::str::FromStr;

/// Infers the layout of `input` from its first character and whether it contains a `-`.
///
/// - `(` selects `P`
/// - `{` selects `B` when a `-` is present, otherwise `X`
/// - anything else selects `D` when a `-` is present, otherwise `N`
///
/// This only dispatches. A string that starts with `{` but is not valid `X` is rejected by the
/// `X` validation that follows.
pub(crate) fn detect_format<U: CodeUnit>(input: &[U]) -> Result<Format, ParseError> {
    let first = input.first().ok_or(ParseError::Empty)?.value();
    let has_dash = || input.iter().any(|unit| unit.value() == u32::from(b'-'));

    let format = if first == u32::from(b'(') {
        Format::P
    } else if first == u32::from(b'{') {
        if has_dash() {
            Format::B
        } else {
            Format::X
        }
    } else if has_dash() {
        Format::D
    } else {
        Format::N
    };
    Ok(format)
}

/// Parses `input`, inferring its layout.
pub(crate) fn parse_auto<U: CodeUnit>(input: &[U]) -> Result<[u8; 16], ParseError> {
    let format = detect_format(input)?;
    parse_layout(input, format)
}

/// Parses `input` against the layout named by a one-letter `specifier`.
pub(crate) fn parse_specified<U: CodeUnit>(
    input: &[U],
    specifier: &str,
) -> Result<[u8; 16], ParseError> {
    let format = Format::from_specifier(specifier)?;
    parse_layout(input, format)
}

/// Validates `input` against one layout and decodes its digits.
pub(crate) fn parse_layout<U: CodeUnit>(
    input: &[U],
    format: Format,
) -> Result<[u8; 16], ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let layout = format.layout();
    if input.len() != layout.len {
        return Err(ParseError::InvalidLength {
            format,
            expected: layout.len,
            actual: input.len(),
        });
    }

    for &(position, expected) in layout.separators {
        if !Layout::separator_matches(input[position].value(), expected) {
            return Err(ParseError::MisplacedSeparator {
                format,
                position,
                expected: char::from(expected),
            });
        }
    }

    let mut bytes = [0u8; 16];
    for group in layout.groups {
        for index in group.start..group.end {
            let position = group.offset + 2 * (index - group.start);
            bytes[index] = decode_byte(input, position, format)?;
        }
    }
    Ok(bytes)
}

#[inline]
fn decode_byte<U: CodeUnit>(input: &[U], position: usize, format: Format) -> Result<u8, ParseError> {
    let nibble = |position: usize| {
        decode_nibble(input[position].value())
            .ok_or(ParseError::InvalidHexDigit { format, position })
    };
    Ok((nibble(position)? << 4) | nibble(position + 1)?)
}

fn strict(result: Result<[u8; 16], ParseError>) -> UuidResult<Uuid> {
    result.map(Uuid::from_bytes).map_err(|error| {
        tracing::debug!(%error, "rejected UUID text");
        UuidError::from(error)
    })
}

fn lenient(result: Result<[u8; 16], ParseError>) -> Option<Uuid> {
    match result {
        Ok(bytes) => Some(Uuid::from_bytes(bytes)),
        Err(error) => {
            tracing::trace!(%error, "try-parse rejected UUID text");
            None
        }
    }
}

impl Uuid {
    /// Parses text in any of the five layouts.
    ///
    /// The layout is inferred from the leading character and the presence of a `-`; see
    /// [`Format`] for the patterns. Hex digits may be in either case.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier text. Surrounding whitespace is not trimmed.
    ///
    /// # Returns
    ///
    /// Returns the decoded identifier on success.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Parse`] if the input is empty, has the wrong length for the inferred
    /// layout, has punctuation in the wrong place, or contains a non-hex digit.
    pub fn parse(input: &str) -> UuidResult<Self> {
        Self::parse_utf8(input.as_bytes())
    }

    /// Parses UTF-8 bytes in any of the five layouts. See [`Uuid::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Parse`] on malformed input.
    pub fn parse_utf8(input: &[u8]) -> UuidResult<Self> {
        strict(parse_auto(input))
    }

    /// Parses UTF-16 code units in any of the five layouts. See [`Uuid::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Parse`] on malformed input.
    pub fn parse_utf16(input: &[u16]) -> UuidResult<Self> {
        strict(parse_auto(input))
    }

    /// Parses text in any of the five layouts, returning `None` on failure.
    ///
    /// `None` is distinct from [`Uuid::EMPTY`], which is a successfully parsed all-zero value.
    ///
    /// # Returns
    ///
    /// Returns `Some` with the decoded identifier, or `None` for any malformed input. The cause
    /// is recorded as a `trace` event.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::try_parse_utf8(input.as_bytes())
    }

    /// UTF-8 counterpart of [`Uuid::try_parse`].
    pub fn try_parse_utf8(input: &[u8]) -> Option<Self> {
        lenient(parse_auto(input))
    }

    /// UTF-16 counterpart of [`Uuid::try_parse`].
    pub fn try_parse_utf16(input: &[u16]) -> Option<Self> {
        lenient(parse_auto(input))
    }

    /// Parses text that must be in the layout named by `format` (`N`, `D`, `B`, `P` or `X`,
    /// either case).
    ///
    /// No inference happens: `N`-shaped text with format `"D"` is an error.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier text.
    /// * `format` - A single format letter. An empty string is rejected here, unlike when
    ///   formatting.
    ///
    /// # Returns
    ///
    /// Returns the decoded identifier if `input` matches the requested layout exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownFormat`] (wrapped in [`UuidError::Parse`]) if `format` is not
    /// exactly one format letter, and the other [`ParseError`] variants if the text does not
    /// match the requested layout.
    pub fn parse_exact(input: &str, format: &str) -> UuidResult<Self> {
        Self::parse_exact_utf8(input.as_bytes(), format)
    }

    /// UTF-8 counterpart of [`Uuid::parse_exact`].
    ///
    /// # Errors
    ///
    /// See [`Uuid::parse_exact`].
    pub fn parse_exact_utf8(input: &[u8], format: &str) -> UuidResult<Self> {
        strict(parse_specified(input, format))
    }

    /// UTF-16 counterpart of [`Uuid::parse_exact`].
    ///
    /// # Errors
    ///
    /// See [`Uuid::parse_exact`].
    pub fn parse_exact_utf16(input: &[u16], format: &str) -> UuidResult<Self> {
        strict(parse_specified(input, format))
    }

    /// Non-failing counterpart of [`Uuid::parse_exact`].
    ///
    /// An unrecognised format letter yields `None`, as does text in any other layout.
    pub fn try_parse_exact(input: &str, format: &str) -> Option<Self> {
        Self::try_parse_exact_utf8(input.as_bytes(), format)
    }

    /// UTF-8 counterpart of [`Uuid::try_parse_exact`].
    pub fn try_parse_exact_utf8(input: &[u8], format: &str) -> Option<Self> {
        lenient(parse_specified(input, format))
    }

    /// UTF-16 counterpart of [`Uuid::try_parse_exact`].
    pub fn try_parse_exact_utf16(input: &[u16], format: &str) -> Option<Self> {
        lenient(parse_specified(input, format))
    }

    /// Parses text that must be in the given layout.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Parse`] if the text does not match `format`.
    pub fn parse_as(input: &str, format: Format) -> UuidResult<Self> {
        strict(parse_layout(input.as_bytes(), format))
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Equivalent to [`Uuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = UuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse(value)
    }
}
