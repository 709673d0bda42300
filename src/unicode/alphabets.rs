//! Alphabet intervals across the Mathematical Alphanumeric Symbols block
//!
//! Covers U+1D400 to U+1D7FF plus the basic Latin, Greek and digit rows. Each
//! [`AlphabetInterval`] is one contiguous run of a single alphabet in a single
//! font. Reserved code points inside a run are replaced by their letterlike
//! counterparts (e.g. U+1D455 by ℎ) or skipped when the alphabet has no letter
//! there.
//!
//! Data derived from <https://www.unicode.org/charts/PDF/U1D400.pdf>

use crate::types::SemanticFont;

/// The alphabets generated programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// A–Z
    LatinCapital,
    /// a–z
    LatinSmall,
    /// Α–Ω
    GreekCapital,
    /// ∇, α–ω, ∂ and the six variant letters, in block order
    GreekSmall,
    /// 0–9
    Digit,
}

/// One contiguous run of an alphabet in a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetInterval {
    /// Alphabet of the run.
    pub alphabet: Alphabet,
    /// Font of every glyph in the run.
    pub font: SemanticFont,
    /// Code point of position 0.
    pub start: u32,
    /// First generated position.
    pub first: u32,
    /// One past the last generated position.
    pub end: u32,
}

impl AlphabetInterval {
    const fn new(alphabet: Alphabet, font: SemanticFont, start: u32) -> Self {
        let (first, end) = match alphabet {
            Alphabet::LatinCapital | Alphabet::LatinSmall => (0, 26),
            Alphabet::GreekCapital => (0, 25),
            Alphabet::GreekSmall => (0, 33),
            Alphabet::Digit => (0, 10),
        };
        Self {
            alphabet,
            font,
            start,
            first,
            end,
        }
    }

    /// Upright Greek small letters live between U+03B1 and U+03C9 with no
    /// nabla or partial around them, so only positions 1..26 exist.
    const fn basic_greek_small() -> Self {
        Self {
            alphabet: Alphabet::GreekSmall,
            font: SemanticFont::Normal,
            start: 0x3B0,
            first: 1,
            end: 26,
        }
    }

    /// Glyphs of the run with their positions.
    pub fn glyphs(&self) -> impl Iterator<Item = (u32, char)> + '_ {
        (self.first..self.end).filter_map(move |position| {
            let code_point = self.start + position;
            let glyph = LETTERLIKE_HOLES
                .iter()
                .find(|(hole, _)| *hole == code_point)
                .map_or_else(|| char::from_u32(code_point), |(_, replacement)| *replacement)?;
            Some((position, glyph))
        })
    }
}

/// Reserved code points and the letterlike glyph standing in for them.
/// `None` marks a position with no letter at all (U+03A2 between Ρ and Σ).
const LETTERLIKE_HOLES: [(u32, Option<char>); 25] = [
    (0x3A2, None),
    (0x1D455, Some('\u{210E}')),
    (0x1D49D, Some('\u{212C}')),
    (0x1D4A0, Some('\u{2130}')),
    (0x1D4A1, Some('\u{2131}')),
    (0x1D4A3, Some('\u{210B}')),
    (0x1D4A4, Some('\u{2110}')),
    (0x1D4A7, Some('\u{2112}')),
    (0x1D4A8, Some('\u{2133}')),
    (0x1D4AD, Some('\u{211B}')),
    (0x1D4BA, Some('\u{212F}')),
    (0x1D4BC, Some('\u{210A}')),
    (0x1D4C4, Some('\u{2134}')),
    (0x1D506, Some('\u{212D}')),
    (0x1D50B, Some('\u{210C}')),
    (0x1D50C, Some('\u{2111}')),
    (0x1D515, Some('\u{211C}')),
    (0x1D51D, Some('\u{2128}')),
    (0x1D53A, Some('\u{2102}')),
    (0x1D53F, Some('\u{210D}')),
    (0x1D545, Some('\u{2115}')),
    (0x1D547, Some('\u{2119}')),
    (0x1D548, Some('\u{211A}')),
    (0x1D549, Some('\u{211D}')),
    (0x1D551, Some('\u{2124}')),
];

use Alphabet::{Digit, GreekCapital, GreekSmall, LatinCapital, LatinSmall};
use SemanticFont::{
    Bold, BoldFraktur, BoldItalic, BoldSansSerif, BoldScript, DoubleStruck, Fraktur, Italic,
    Monospace, Normal, SansSerif, SansSerifBoldItalic, SansSerifItalic, Script,
};

/// Every generated interval, Latin first, then Greek, then digits.
pub const ALPHABET_INTERVALS: [AlphabetInterval; 46] = [
    AlphabetInterval::new(LatinCapital, Normal, 0x41),
    AlphabetInterval::new(LatinSmall, Normal, 0x61),
    AlphabetInterval::new(LatinCapital, Bold, 0x1D400),
    AlphabetInterval::new(LatinSmall, Bold, 0x1D41A),
    AlphabetInterval::new(LatinCapital, Italic, 0x1D434),
    AlphabetInterval::new(LatinSmall, Italic, 0x1D44E),
    AlphabetInterval::new(LatinCapital, BoldItalic, 0x1D468),
    AlphabetInterval::new(LatinSmall, BoldItalic, 0x1D482),
    AlphabetInterval::new(LatinCapital, Script, 0x1D49C),
    AlphabetInterval::new(LatinSmall, Script, 0x1D4B6),
    AlphabetInterval::new(LatinCapital, BoldScript, 0x1D4D0),
    AlphabetInterval::new(LatinSmall, BoldScript, 0x1D4EA),
    AlphabetInterval::new(LatinCapital, Fraktur, 0x1D504),
    AlphabetInterval::new(LatinSmall, Fraktur, 0x1D51E),
    AlphabetInterval::new(LatinCapital, DoubleStruck, 0x1D538),
    AlphabetInterval::new(LatinSmall, DoubleStruck, 0x1D552),
    AlphabetInterval::new(LatinCapital, BoldFraktur, 0x1D56C),
    AlphabetInterval::new(LatinSmall, BoldFraktur, 0x1D586),
    AlphabetInterval::new(LatinCapital, SansSerif, 0x1D5A0),
    AlphabetInterval::new(LatinSmall, SansSerif, 0x1D5BA),
    AlphabetInterval::new(LatinCapital, BoldSansSerif, 0x1D5D4),
    AlphabetInterval::new(LatinSmall, BoldSansSerif, 0x1D5EE),
    AlphabetInterval::new(LatinCapital, SansSerifItalic, 0x1D608),
    AlphabetInterval::new(LatinSmall, SansSerifItalic, 0x1D622),
    AlphabetInterval::new(LatinCapital, SansSerifBoldItalic, 0x1D63C),
    AlphabetInterval::new(LatinSmall, SansSerifBoldItalic, 0x1D656),
    AlphabetInterval::new(LatinCapital, Monospace, 0x1D670),
    AlphabetInterval::new(LatinSmall, Monospace, 0x1D68A),
    AlphabetInterval::new(GreekCapital, Normal, 0x391),
    AlphabetInterval::basic_greek_small(),
    AlphabetInterval::new(GreekCapital, Bold, 0x1D6A8),
    AlphabetInterval::new(GreekSmall, Bold, 0x1D6C1),
    AlphabetInterval::new(GreekCapital, Italic, 0x1D6E2),
    AlphabetInterval::new(GreekSmall, Italic, 0x1D6FB),
    AlphabetInterval::new(GreekCapital, BoldItalic, 0x1D71C),
    AlphabetInterval::new(GreekSmall, BoldItalic, 0x1D735),
    AlphabetInterval::new(GreekCapital, BoldSansSerif, 0x1D756),
    AlphabetInterval::new(GreekSmall, BoldSansSerif, 0x1D76F),
    AlphabetInterval::new(GreekCapital, SansSerifBoldItalic, 0x1D790),
    AlphabetInterval::new(GreekSmall, SansSerifBoldItalic, 0x1D7A9),
    AlphabetInterval::new(Digit, Normal, 0x30),
    AlphabetInterval::new(Digit, Bold, 0x1D7CE),
    AlphabetInterval::new(Digit, DoubleStruck, 0x1D7D8),
    AlphabetInterval::new(Digit, SansSerif, 0x1D7E2),
    AlphabetInterval::new(Digit, BoldSansSerif, 0x1D7EC),
    AlphabetInterval::new(Digit, Monospace, 0x1D7F6),
];
