//! 128-bit identifier primitive.
//!
//! [`Uuid`] is an immutable 16-byte value with conversions to and from five fixed text layouts,
//! byte-wise ordering, and two time-based generators.
//!
//! ## Text layouts
//!
//! | Format | Length | Pattern |
//! |---|---|---|
//! | `N` | 32 | `dddddddddddddddddddddddddddddddd` |
//! | `D` | 36 | `dddddddd-dddd-dddd-dddd-dddddddddddd` |
//! | `B` | 38 | `{dddddddd-dddd-dddd-dddd-dddddddddddd}` |
//! | `P` | 38 | `(dddddddd-dddd-dddd-dddd-dddddddddddd)` |
//! | `X` | 68 | `{0xdddddddd,0xdddd,0xdddd,{0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd}}` |
//!
//! Hex digits and format letters are case-insensitive on input. Output is always lowercase.
//! Every text operation is available over `&str`, UTF-8 bytes (`&[u8]`) and UTF-16 code units
//! (`&[u16]`).
//!
//! ## Parsing
//! - [`Uuid::parse`] infers the layout from the leading character and the presence of a `-`.
//! - [`Uuid::parse_exact`] requires the layout named by a format letter.
//! - The `try_` variants return `None` instead of an error.
//!
//! ## Ordering
//! Identifiers compare lexicographically over their bytes, byte 0 most significant.
//!
//! ## Generation
//! - [`Uuid::new_time_ordered`] places a 60-bit Gregorian tick count in the classic version 1
//!   field positions.
//! - [`Uuid::new_sort_optimized`] stores the same tick count most significant byte first, so
//!   later identifiers sort after earlier ones.
//!
//! ```
//! use uuidkit::{Format, Uuid};
//!
//! let id = Uuid::parse("d0bec403-3323-44df-9dd4-4456121ab00b")?;
//! assert_eq!(id.to_string(), "d0bec403332344df9dd44456121ab00b");
//! assert_eq!(id.to_string_as(Format::B), "{d0bec403-3323-44df-9dd4-4456121ab00b}");
//! # Ok::<(), uuidkit::UuidError>(())
//! ```

mod format;
mod generate;
mod hex;
mod layout;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod value;

// Re-export public types
pub use format::Formatted;
pub use generate::TimeLayout;
pub use layout::{Format, MAX_TEXT_LEN};
pub use value::Uuid;

/// Reasons a piece of text is not a valid identifier.
///
/// Positions are offsets in code units of the input (bytes for UTF-8, `u16` units for UTF-16).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was empty
    #[error("input is empty")]
    Empty,

    /// The format specifier is not exactly one of `N`, `D`, `B`, `P` or `X`
    #[error("format specifier must be one of N, D, B, P or X, got: '{0}'")]
    UnknownFormat(String),

    /// The input length does not match the layout
    #[error("wrong length for format {format}: expected {expected} characters, got {actual}")]
    InvalidLength {
        format: Format,
        expected: usize,
        actual: usize,
    },

    /// Layout punctuation is missing or in the wrong place
    #[error("misplaced separator for format {format}: expected '{expected}' at position {position}")]
    MisplacedSeparator {
        format: Format,
        position: usize,
        expected: char,
    },

    /// A digit position holds something other than `0-9`, `a-f` or `A-F`
    #[error("non-hex digit at position {position} for format {format}")]
    InvalidHexDigit { format: Format, position: usize },
}

/// Error type for UUID operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Text could not be parsed as an identifier
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A comparison was attempted against a value of another type
    #[error("Type mismatch: object must be of type {0}")]
    TypeMismatch(&'static str),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
