//! Hex codec tables.
//!
//! The encode tables map every byte to its two lowercase hex digits, one table per code-unit
//! width so a pair is emitted with a single array copy. The decode table maps an ASCII code unit
//! to its nibble value and holds [`INVALID_NIBBLE`] for everything else. All tables are evaluated
//! at compile time.

/// Decode-table sentinel for code units that are not hex digits.
pub(crate) const INVALID_NIBBLE: u8 = 0xFF;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// One past the highest hex-relevant code unit (`'f'`).
const DECODE_TABLE_LEN: usize = b'f' as usize + 1;

static HEX_ENCODE_UTF8: [[u8; 2]; 256] = build_encode_utf8();
static HEX_ENCODE_UTF16: [[u16; 2]; 256] = build_encode_utf16();
static HEX_DECODE: [u8; DECODE_TABLE_LEN] = build_decode();

const fn build_encode_utf8() -> [[u8; 2]; 256] {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [HEX_DIGITS[i >> 4], HEX_DIGITS[i & 0x0F]];
        i += 1;
    }
    table
}

const fn build_encode_utf16() -> [[u16; 2]; 256] {
    let mut table = [[0u16; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [HEX_DIGITS[i >> 4] as u16, HEX_DIGITS[i & 0x0F] as u16];
        i += 1;
    }
    table
}

const fn build_decode() -> [u8; DECODE_TABLE_LEN] {
    let mut table = [INVALID_NIBBLE; DECODE_TABLE_LEN];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

/// Returns the nibble value of a hex digit code unit, or `None`.
///
/// Code units past `'f'` are rejected by the bounds-checked lookup without touching the table.
#[inline]
pub(crate) fn decode_nibble(unit: u32) -> Option<u8> {
    match HEX_DECODE.get(unit as usize) {
        Some(&nibble) if nibble != INVALID_NIBBLE => Some(nibble),
        _ => None,
    }
}

/// A text code unit: `u8` for UTF-8 input and output, `u16` for UTF-16.
///
/// Parser and formatter are written once against this trait.
pub(crate) trait CodeUnit: Copy {
    /// Widens an ASCII byte to this code unit.
    fn from_ascii(byte: u8) -> Self;

    /// Returns the code unit as a scalar for table lookups and comparisons.
    fn value(self) -> u32;

    /// Returns the two lowercase hex digits of `byte`.
    fn hex_pair(byte: u8) -> [Self; 2];
}

impl CodeUnit for u8 {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte
    }

    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn hex_pair(byte: u8) -> [Self; 2] {
        HEX_ENCODE_UTF8[usize::from(byte)]
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }

    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn hex_pair(byte: u8) -> [Self; 2] {
        HEX_ENCODE_UTF16[usize::from(byte)]
    }
}
