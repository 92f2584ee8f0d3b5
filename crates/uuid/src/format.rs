//! Text formatting.
//!
//! Output is lowercase. Every layout has a fixed length, so a destination is either large enough
//! and fully written, or too small and left untouched.

use crate::hex::CodeUnit;
use crate::layout::{Format, MAX_TEXT_LEN};
use crate::{Uuid, UuidResult};
use std::fmt;

/// Writes `bytes` in `format` to the front of `dest`.
///
/// Returns the number of code units written, or `None` without writing anything if `dest` is
/// shorter than the layout.
pub(crate) fn write_layout<U: CodeUnit>(
    bytes: &[u8; 16],
    format: Format,
    dest: &mut [U],
) -> Option<usize> {
    let layout = format.layout();
    let dest = dest.get_mut(..layout.len)?;

    for &(position, ascii) in layout.separators {
        dest[position] = U::from_ascii(ascii);
    }
    for group in layout.groups {
        for (i, &byte) in bytes[group.start..group.end].iter().enumerate() {
            let position = group.offset + 2 * i;
            let [hi, lo] = U::hex_pair(byte);
            dest[position] = hi;
            dest[position + 1] = lo;
        }
    }
    Some(layout.len)
}

/// Display adapter returned by [`Uuid::formatted`].
///
/// Renders the identifier in one layout without allocating. Width, fill and alignment flags are
/// honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Formatted {
    uuid: Uuid,
    format: Format,
}

impl Formatted {
    /// Returns the layout this adapter renders.
    pub fn format(&self) -> Format {
        self.format
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = [0u8; MAX_TEXT_LEN];
        let len = write_layout(self.uuid.as_bytes(), self.format, &mut buffer).ok_or(fmt::Error)?;
        let text = std::str::from_utf8(&buffer[..len]).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

impl Uuid {
    /// Returns a [`Display`](fmt::Display) adapter for `format`.
    pub fn formatted(&self, format: Format) -> Formatted {
        Formatted {
            uuid: *self,
            format,
        }
    }

    /// Formats into a freshly allocated string.
    pub fn to_string_as(&self, format: Format) -> String {
        self.formatted(format).to_string()
    }

    /// Formats into a freshly allocated string using a format letter.
    ///
    /// An empty `format` selects `N`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ParseError::UnknownFormat`] (wrapped) if `format` is not empty and not
    /// exactly one of `N`, `D`, `B`, `P` or `X`.
    pub fn to_format_string(&self, format: &str) -> UuidResult<String> {
        let format = Format::for_output(format)?;
        Ok(self.to_string_as(format))
    }

    /// Writes the identifier as UTF-8 into `dest`.
    ///
    /// # Arguments
    ///
    /// * `dest` - Destination buffer. Only the first `format.text_len()` bytes are written.
    /// * `format` - A single format letter, or an empty string for `N`.
    ///
    /// # Returns
    ///
    /// Returns the number of bytes written. Returns `None`, leaving `dest` untouched, if `dest`
    /// is shorter than the layout (32/36/38/38/68) or `format` is not a known letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuidkit::Uuid;
    ///
    /// let mut buffer = [0u8; 40];
    /// assert_eq!(Uuid::MAX.try_format_utf8(&mut buffer, "P"), Some(38));
    /// assert_eq!(buffer[0], b'(');
    ///
    /// let mut short = [0u8; 10];
    /// assert_eq!(Uuid::MAX.try_format_utf8(&mut short, "N"), None);
    /// assert_eq!(short, [0u8; 10]);
    /// ```
    pub fn try_format_utf8(&self, dest: &mut [u8], format: &str) -> Option<usize> {
        let format = Format::for_output(format).ok()?;
        write_layout(self.as_bytes(), format, dest)
    }

    /// UTF-16 counterpart of [`Uuid::try_format_utf8`].
    pub fn try_format_utf16(&self, dest: &mut [u16], format: &str) -> Option<usize> {
        let format = Format::for_output(format).ok()?;
        write_layout(self.as_bytes(), format, dest)
    }
}

impl fmt::Display for Uuid {
    /// Formats in `N` layout (32 lowercase hex digits).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.formatted(Format::N), f)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid")
            .field(&format_args!("{}", self.formatted(Format::D)))
            .finish()
    }
}
