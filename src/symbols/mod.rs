//! Symbol classification
//!
//! Maps every glyph or glyph string that can appear in a token element to a
//! [`Classification`]: a semantic type, a role and a font. The registry also
//! records secondary facts about glyphs that are independent of their primary
//! classification, such as "this glyph can act as a bar accent" or "this
//! glyph is a candidate differential d".
//!
//! # Key Features
//!
//! - Alphabet intervals across the Mathematical Alphanumeric Symbols block,
//!   one per alphabet and font
//! - Ordered registration where later entries overwrite earlier ones
//! - Total lookup: unregistered symbols classify as
//!   [`Classification::UNKNOWN`] instead of failing
//!
//! # Examples
//!
//! ```rust
//! use math_semantics::symbols::{SecondaryKind, create_symbol_table};
//! use math_semantics::types::{SemanticFont, SemanticRole, SemanticType};
//!
//! let table = create_symbol_table();
//! let plus = table.classify("+");
//! assert_eq!(plus.node_type, SemanticType::Operator);
//! assert_eq!(plus.role, SemanticRole::Addition);
//!
//! assert_eq!(table.classify("\u{211D}").font, SemanticFont::DoubleStruck);
//! assert_eq!(table.classify_secondary(SecondaryKind::Differential, "d"), Some("d"));
//! ```

mod data;
mod types;

use crate::namespace::KeyMap;
use crate::types::{SemanticFont, SemanticRole, SemanticType};
use crate::unicode::{ALPHABET_INTERVALS, Alphabet, AlphabetInterval};
pub use data::SYMBOL_ENTRIES;
use data::{INTERVAL_OVERRIDES, INTERVAL_SECONDARIES};
pub use types::{Classification, Glyphs, SecondaryKind, SymbolEntry};

/// Symbol registry
///
/// Holds the primary classification of every registered symbol and the
/// secondary facts recorded for some of them. The table is immutable once
/// built; classification never mutates it, so one table can serve any number
/// of concurrent lookups.
///
/// # Examples
///
/// ```rust
/// use math_semantics::symbols::{Classification, SymbolTable};
/// use math_semantics::types::{SemanticFont, SemanticRole, SemanticType};
///
/// let mut table = SymbolTable::new();
/// table.define(
///     "\u{2295}",
///     Classification::new(SemanticType::Operator, SemanticRole::Addition, SemanticFont::Normal),
/// );
/// assert_eq!(table.classify("\u{2295}").role, SemanticRole::Addition);
/// assert!(table.classify("\u{2296}").is_unknown());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Primary classifications keyed by symbol
    primary: KeyMap<String, Classification>,
    /// Secondary facts keyed by kind and symbol
    secondary: KeyMap<(SecondaryKind, String), String>,
}

impl SymbolTable {
    /// Creates a new empty registry
    ///
    /// Use [`create_symbol_table`] for the fully populated registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `symbol`, overwriting any earlier classification.
    pub fn define(&mut self, symbol: &str, classification: Classification) {
        self.primary.insert(symbol.to_owned(), classification);
    }

    /// Records a secondary fact of `kind` for `symbol`.
    ///
    /// The stored value is the fact's name, i.e. `kind` rendered as a string.
    pub fn define_secondary(&mut self, kind: SecondaryKind, symbol: &str) {
        self.secondary
            .insert((kind, symbol.to_owned()), kind.as_ref().to_owned());
    }

    /// Applies one line of the ordered registry definition.
    pub fn register(&mut self, entry: &SymbolEntry) {
        let classification = entry.classification();
        for glyph in entry.glyphs.collect() {
            self.define(glyph, classification);
            if let Some(kind) = entry.secondary {
                self.define_secondary(kind, glyph);
            }
        }
    }

    /// Registers every glyph of an alphabet interval with the alphabet's
    /// default classification and the interval's font, applying the
    /// positional overrides and secondary tags of that alphabet.
    pub fn register_interval(&mut self, interval: &AlphabetInterval) {
        let (node_type, role) = match interval.alphabet {
            Alphabet::LatinCapital | Alphabet::LatinSmall => {
                (SemanticType::Identifier, SemanticRole::LatinLetter)
            }
            Alphabet::GreekCapital | Alphabet::GreekSmall => {
                (SemanticType::Identifier, SemanticRole::GreekLetter)
            }
            Alphabet::Digit => (SemanticType::Number, SemanticRole::Integer),
        };

        let mut buffer = [0; 4];
        for (position, glyph) in interval.glyphs() {
            let symbol: &str = glyph.encode_utf8(&mut buffer);
            let (node_type, role) = INTERVAL_OVERRIDES
                .iter()
                .find(|(alphabet, at, _, _)| *alphabet == interval.alphabet && *at == position)
                .map_or((node_type, role), |&(_, _, node_type, role)| {
                    (node_type, role)
                });
            self.define(symbol, Classification::new(node_type, role, interval.font));

            for &(alphabet, at, kind) in &INTERVAL_SECONDARIES {
                if alphabet == interval.alphabet && at == position {
                    self.define_secondary(kind, symbol);
                }
            }
        }
    }

    /// Classifies `symbol`.
    ///
    /// Total: a symbol with no entry yields [`Classification::UNKNOWN`].
    #[must_use]
    pub fn classify(&self, symbol: &str) -> Classification {
        self.primary
            .get(symbol)
            .copied()
            .unwrap_or(Classification::UNKNOWN)
    }

    /// The secondary fact of `kind` recorded for `symbol`, if any.
    #[must_use]
    pub fn classify_secondary(&self, kind: SecondaryKind, symbol: &str) -> Option<&str> {
        self.secondary
            .get(&(kind, symbol.to_owned()))
            .map(String::as_str)
    }

    /// Whether `symbol` has a primary classification.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.primary.contains_key(symbol)
    }

    /// Number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Whether no symbol is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

/// Builds the standard registry
///
/// Alphabet intervals are registered first, then [`SYMBOL_ENTRIES`] in order.
/// Exceptions at the end of that list therefore win over both the intervals
/// and the generic vocabularies.
#[must_use]
pub fn create_symbol_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    for interval in &ALPHABET_INTERVALS {
        table.register_interval(interval);
    }
    for entry in &SYMBOL_ENTRIES {
        table.register(entry);
    }
    tracing::debug!(symbols = table.len(), "symbol table created");
    table
}

/// The font of an identifier written in an `mi` element.
///
/// Single letters render italic unless a font is given, while the registry
/// stores upright letters as `normal`.
#[must_use]
pub const fn default_identifier_font(classification: &Classification, single_char: bool) -> SemanticFont {
    let letter = matches!(classification.node_type, SemanticType::Identifier)
        && matches!(
            classification.role,
            SemanticRole::LatinLetter | SemanticRole::GreekLetter | SemanticRole::SimpleFunc
        );
    match classification.font {
        SemanticFont::Normal if letter && single_char => SemanticFont::Italic,
        font => font,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(node_type: SemanticType, role: SemanticRole, font: SemanticFont) -> Classification {
        Classification::new(node_type, role, font)
    }

    #[test]
    fn test_lookup_is_total() {
        let table = create_symbol_table();
        assert!(table.classify("\u{E000}").is_unknown());
        assert!(table.classify("").is_unknown());
        assert!(table.classify("notasymbol").is_unknown());
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let a = create_symbol_table();
        let b = create_symbol_table();
        assert_eq!(a.len(), b.len());
        for symbol in ["x", "+", "\u{2211}", "sin", "(", "\u{2202}", "\u{1D451}"] {
            assert_eq!(a.classify(symbol), b.classify(symbol));
            assert_eq!(a.classify(symbol), a.classify(symbol));
        }
    }

    #[test]
    fn test_alphabets() {
        let table = create_symbol_table();
        use SemanticFont::{Bold, DoubleStruck, Fraktur, Italic, Normal};
        use SemanticRole::{GreekLetter, Integer, LatinLetter};
        use SemanticType::{Identifier, Number};

        assert_eq!(table.classify("x"), class(Identifier, LatinLetter, Normal));
        assert_eq!(table.classify("\u{1D465}"), class(Identifier, LatinLetter, Italic));
        assert_eq!(table.classify("\u{1D400}"), class(Identifier, LatinLetter, Bold));
        assert_eq!(table.classify("\u{1D504}"), class(Identifier, LatinLetter, Fraktur));
        assert_eq!(table.classify("\u{03B1}"), class(Identifier, GreekLetter, Normal));
        assert_eq!(table.classify("\u{03A9}"), class(Identifier, GreekLetter, Normal));
        assert_eq!(table.classify("7"), class(Number, Integer, Normal));
        assert_eq!(table.classify("\u{1D7D9}"), class(Number, Integer, DoubleStruck));
    }

    #[test]
    fn test_positional_overrides() {
        let table = create_symbol_table();
        // Bold nabla and bold partial live inside the Greek block.
        for symbol in ["\u{1D6C1}", "\u{1D6DB}"] {
            assert_eq!(
                table.classify(symbol),
                class(SemanticType::Operator, SemanticRole::PrefixOp, SemanticFont::Bold)
            );
        }
        assert_eq!(table.classify("\u{2207}").role, SemanticRole::PrefixOp);
        assert_eq!(table.classify("\u{2202}").role, SemanticRole::PrefixOp);
        assert_eq!(table.classify("\u{1D6C2}").role, SemanticRole::GreekLetter);
    }

    #[test]
    fn test_differential_d() {
        let table = create_symbol_table();
        for symbol in ["d", "\u{1D451}", "\u{1D41D}", "\u{2146}", "\u{2145}"] {
            assert_eq!(
                table.classify_secondary(SecondaryKind::Differential, symbol),
                Some("d"),
                "{symbol}"
            );
        }
        assert_eq!(table.classify_secondary(SecondaryKind::Differential, "e"), None);
        assert_eq!(table.classify_secondary(SecondaryKind::Bar, "d"), None);
        assert_eq!(table.classify("\u{2146}").font, SemanticFont::DoubleStruckItalic);
    }

    #[test]
    fn test_exceptions_overwrite_generic_entries() {
        let table = create_symbol_table();
        assert_eq!(
            table.classify("\u{211D}"),
            class(SemanticType::Identifier, SemanticRole::NumberSet, SemanticFont::DoubleStruck)
        );
        assert_eq!(table.classify("f").role, SemanticRole::SimpleFunc);
        assert_eq!(table.classify("f").font, SemanticFont::Normal);
        assert_eq!(table.classify("\u{1D453}").role, SemanticRole::SimpleFunc);
        assert_eq!(table.classify("\u{1D453}").font, SemanticFont::Italic);
        assert_eq!(table.classify("\u{210E}").role, SemanticRole::SimpleFunc);
        assert_eq!(table.classify("\u{03D5}").font, SemanticFont::Normal);
        assert_eq!(table.classify("\u{0131}").role, SemanticRole::LatinLetter);
    }

    #[test]
    fn test_operators_and_relations() {
        let table = create_symbol_table();
        assert_eq!(table.classify("-").role, SemanticRole::Subtraction);
        assert_eq!(table.classify_secondary(SecondaryKind::Bar, "-"), Some("bar"));
        assert_eq!(table.classify("\u{2062}").role, SemanticRole::Multiplication);
        assert_eq!(table.classify("\u{2061}").role, SemanticRole::Application);
        assert_eq!(table.classify("=").node_type, SemanticType::Relation);
        assert_eq!(table.classify("\u{2264}").role, SemanticRole::Inequality);
        assert_eq!(table.classify_secondary(SecondaryKind::Tilde, "\u{223C}"), Some("tilde"));
        assert_eq!(table.classify("\u{222B}").role, SemanticRole::Integral);
        assert_eq!(table.classify("lim").role, SemanticRole::LimFunc);
        assert_eq!(table.classify("sin").role, SemanticRole::PrefixFunc);
    }

    #[test]
    fn test_fences_and_punctuation() {
        let table = create_symbol_table();
        assert_eq!(table.classify("(").role, SemanticRole::Open);
        assert_eq!(table.classify(")").role, SemanticRole::Close);
        assert_eq!(table.classify("|").role, SemanticRole::Neutral);
        assert_eq!(table.classify("\u{2016}").role, SemanticRole::Metric);
        assert_eq!(table.classify("\u{23DE}").role, SemanticRole::Top);
        assert_eq!(table.classify(",").node_type, SemanticType::Punctuation);
        assert_eq!(table.classify("\u{2026}").role, SemanticRole::Ellipsis);
    }

    #[test]
    fn test_later_entries_win() {
        let mut table = SymbolTable::new();
        let first = class(SemanticType::Identifier, SemanticRole::LatinLetter, SemanticFont::Normal);
        let second = class(SemanticType::Identifier, SemanticRole::SimpleFunc, SemanticFont::Normal);
        table.define("f", first);
        table.define("f", second);
        assert_eq!(table.classify("f"), second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_identifier_font_default() {
        let table = create_symbol_table();
        let x = table.classify("x");
        assert_eq!(default_identifier_font(&x, true), SemanticFont::Italic);
        assert_eq!(default_identifier_font(&x, false), SemanticFont::Normal);
        let bold = table.classify("\u{1D431}");
        assert_eq!(default_identifier_font(&bold, true), SemanticFont::Bold);
        let infinity = table.classify("\u{221E}");
        assert_eq!(default_identifier_font(&infinity, true), SemanticFont::Normal);
    }
}
