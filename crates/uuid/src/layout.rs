//! Text layouts.
//!
//! Each [`Format`] maps to a [`Layout`]: the fixed offsets of its punctuation and of its hex
//! digit runs. Parser and formatter both walk these tables, so offsets are written down exactly
//! once.

use crate::ParseError;
use std::{fmt, str::FromStr};

/// Length of the longest layout (`X`).
pub const MAX_TEXT_LEN: usize = 68;

/// One of the five text layouts.
///
/// | Format | Length | Example |
/// |---|---|---|
/// | `N` | 32 | `d0bec403332344df9dd44456121ab00b` |
/// | `D` | 36 | `d0bec403-3323-44df-9dd4-4456121ab00b` |
/// | `B` | 38 | `{d0bec403-3323-44df-9dd4-4456121ab00b}` |
/// | `P` | 38 | `(d0bec403-3323-44df-9dd4-4456121ab00b)` |
/// | `X` | 68 | `{0xd0bec403,0x3323,0x44df,{0x9d,0xd4,0x44,0x56,0x12,0x1a,0xb0,0x0b}}` |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// 32 digits, no punctuation.
    #[default]
    N,
    /// Digits grouped 8-4-4-4-12 and joined by hyphens.
    D,
    /// `D` wrapped in braces.
    B,
    /// `D` wrapped in parentheses.
    P,
    /// C-style initializer of hex literals.
    X,
}

impl Format {
    /// All layouts, in specifier order.
    pub const ALL: [Format; 5] = [Format::N, Format::D, Format::B, Format::P, Format::X];

    /// Returns the exact text length of this layout in code units.
    pub const fn text_len(self) -> usize {
        match self {
            Format::N => 32,
            Format::D => 36,
            Format::B | Format::P => 38,
            Format::X => MAX_TEXT_LEN,
        }
    }

    /// Returns the upper-case specifier letter.
    pub const fn letter(self) -> char {
        match self {
            Format::N => 'N',
            Format::D => 'D',
            Format::B => 'B',
            Format::P => 'P',
            Format::X => 'X',
        }
    }

    /// Looks up a layout by its specifier letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Format::N),
            'D' => Some(Format::D),
            'B' => Some(Format::B),
            'P' => Some(Format::P),
            'X' => Some(Format::X),
            _ => None,
        }
    }

    /// Parses a specifier that must be exactly one format letter.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownFormat`] for empty, multi-character or unknown specifiers.
    pub fn from_specifier(specifier: &str) -> Result<Self, ParseError> {
        let mut chars = specifier.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => None,
        }
        .ok_or_else(|| ParseError::UnknownFormat(specifier.to_owned()))
    }

    /// Like [`Format::from_specifier`], but an empty specifier selects the default, `N`.
    pub(crate) fn for_output(specifier: &str) -> Result<Self, ParseError> {
        if specifier.is_empty() {
            return Ok(Format::default());
        }
        Self::from_specifier(specifier)
    }

    pub(crate) fn layout(self) -> &'static Layout {
        match self {
            Format::N => &LAYOUT_N,
            Format::D => &LAYOUT_D,
            Format::B => &LAYOUT_B,
            Format::P => &LAYOUT_P,
            Format::X => &LAYOUT_X,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_specifier(s)
    }
}

/// A run of hex digits encoding `bytes[start..end]`, two digits per byte, starting at `offset`.
#[derive(Debug)]
pub(crate) struct HexGroup {
    pub(crate) offset: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Fixed positions of everything in one text layout.
#[derive(Debug)]
pub(crate) struct Layout {
    pub(crate) len: usize,
    /// Punctuation as `(offset, ascii)`, ascending by offset.
    pub(crate) separators: &'static [(usize, u8)],
    /// Digit runs, ascending by offset.
    pub(crate) groups: &'static [HexGroup],
}

impl Layout {
    /// Returns true if `unit` is the punctuation expected where `expected` sits.
    ///
    /// The `x` of a `0x` literal is accepted in either case.
    #[inline]
    pub(crate) fn separator_matches(unit: u32, expected: u8) -> bool {
        unit == u32::from(expected) || (expected == b'x' && unit == u32::from(b'X'))
    }
}

const fn group(offset: usize, start: usize, end: usize) -> HexGroup {
    HexGroup { offset, start, end }
}

// Bytes split 4-2-2-2-6 for the hyphenated layouts.
const GROUPS_D: [HexGroup; 5] = [
    group(0, 0, 4),
    group(9, 4, 6),
    group(14, 6, 8),
    group(19, 8, 10),
    group(24, 10, 16),
];

const GROUPS_WRAPPED: [HexGroup; 5] = [
    group(1, 0, 4),
    group(10, 4, 6),
    group(15, 6, 8),
    group(20, 8, 10),
    group(25, 10, 16),
];

static LAYOUT_N: Layout = Layout {
    len: 32,
    separators: &[],
    groups: &[group(0, 0, 16)],
};

static LAYOUT_D: Layout = Layout {
    len: 36,
    separators: &[(8, b'-'), (13, b'-'), (18, b'-'), (23, b'-')],
    groups: &GROUPS_D,
};

static LAYOUT_B: Layout = Layout {
    len: 38,
    separators: &[
        (0, b'{'),
        (9, b'-'),
        (14, b'-'),
        (19, b'-'),
        (24, b'-'),
        (37, b'}'),
    ],
    groups: &GROUPS_WRAPPED,
};

static LAYOUT_P: Layout = Layout {
    len: 38,
    separators: &[
        (0, b'('),
        (9, b'-'),
        (14, b'-'),
        (19, b'-'),
        (24, b'-'),
        (37, b')'),
    ],
    groups: &GROUPS_WRAPPED,
};

// {0xdddddddd,0xdddd,0xdddd,{0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd}}
static LAYOUT_X: Layout = Layout {
    len: MAX_TEXT_LEN,
    separators: &[
        (0, b'{'),
        (1, b'0'),
        (2, b'x'),
        (11, b','),
        (12, b'0'),
        (13, b'x'),
        (18, b','),
        (19, b'0'),
        (20, b'x'),
        (25, b','),
        (26, b'{'),
        (27, b'0'),
        (28, b'x'),
        (31, b','),
        (32, b'0'),
        (33, b'x'),
        (36, b','),
        (37, b'0'),
        (38, b'x'),
        (41, b','),
        (42, b'0'),
        (43, b'x'),
        (46, b','),
        (47, b'0'),
        (48, b'x'),
        (51, b','),
        (52, b'0'),
        (53, b'x'),
        (56, b','),
        (57, b'0'),
        (58, b'x'),
        (61, b','),
        (62, b'0'),
        (63, b'x'),
        (66, b'}'),
        (67, b'}'),
    ],
    groups: &[
        group(3, 0, 4),
        group(14, 4, 6),
        group(21, 6, 8),
        group(29, 8, 9),
        group(34, 9, 10),
        group(39, 10, 11),
        group(44, 11, 12),
        group(49, 12, 13),
        group(54, 13, 14),
        group(59, 14, 15),
        group(64, 15, 16),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lengths() {
        assert_eq!(Format::N.text_len(), 32);
        assert_eq!(Format::D.text_len(), 36);
        assert_eq!(Format::B.text_len(), 38);
        assert_eq!(Format::P.text_len(), 38);
        assert_eq!(Format::X.text_len(), 68);
        assert_eq!(
            Format::ALL.iter().map(|f| f.text_len()).max(),
            Some(MAX_TEXT_LEN)
        );
    }

    #[test]
    fn test_layouts_cover_every_position_once() {
        for format in Format::ALL {
            let layout = format.layout();
            assert_eq!(layout.len, format.text_len());

            let mut seen = vec![0u8; layout.len];
            for &(offset, _) in layout.separators {
                seen[offset] += 1;
            }
            for g in layout.groups {
                for position in g.offset..g.offset + 2 * (g.end - g.start) {
                    seen[position] += 1;
                }
            }
            assert!(
                seen.iter().all(|&count| count == 1),
                "format {format}: {seen:?}"
            );
        }
    }

    #[test]
    fn test_layouts_cover_every_byte_in_order() {
        for format in Format::ALL {
            let mut next = 0;
            for g in format.layout().groups {
                assert_eq!(g.start, next, "format {format}");
                assert!(g.end > g.start);
                next = g.end;
            }
            assert_eq!(next, 16, "format {format}");
        }
    }

    #[test]
    fn test_separators_ascending() {
        for format in Format::ALL {
            let offsets: Vec<usize> = format.layout().separators.iter().map(|s| s.0).collect();
            let mut sorted = offsets.clone();
            sorted.sort_unstable();
            assert_eq!(offsets, sorted, "format {format}");
        }
    }

    #[test]
    fn test_from_letter_is_case_insensitive() {
        for format in Format::ALL {
            assert_eq!(Format::from_letter(format.letter()), Some(format));
            assert_eq!(
                Format::from_letter(format.letter().to_ascii_lowercase()),
                Some(format)
            );
        }
        assert_eq!(Format::from_letter('Q'), None);
    }

    #[test]
    fn test_from_specifier_requires_single_letter() {
        assert_eq!(Format::from_specifier("d"), Ok(Format::D));
        assert_eq!("X".parse::<Format>(), Ok(Format::X));
        assert_eq!(
            Format::from_specifier(""),
            Err(ParseError::UnknownFormat(String::new()))
        );
        assert_eq!(
            Format::from_specifier("DD"),
            Err(ParseError::UnknownFormat("DD".into()))
        );
        assert_eq!(
            Format::from_specifier("Q"),
            Err(ParseError::UnknownFormat("Q".into()))
        );
    }

    #[test]
    fn test_for_output_defaults_to_n() {
        assert_eq!(Format::for_output(""), Ok(Format::N));
        assert_eq!(Format::for_output("p"), Ok(Format::P));
        assert!(Format::for_output("z").is_err());
    }

    #[test]
    fn test_separator_matches_hex_prefix_case() {
        assert!(Layout::separator_matches(u32::from(b'x'), b'x'));
        assert!(Layout::separator_matches(u32::from(b'X'), b'x'));
        assert!(!Layout::separator_matches(u32::from(b'_'), b'-'));
        assert!(!Layout::separator_matches(u32::from(b'['), b'{'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::B.to_string(), "B");
        assert_eq!(Format::default(), Format::N);
    }
}
