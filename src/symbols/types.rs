use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::types::{SemanticFont, SemanticRole, SemanticType};

/// Primary classification of a symbol.
///
/// Two classifications are equal iff type, role and font all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    /// Structural kind.
    pub node_type: SemanticType,
    /// Sub-classification.
    pub role: SemanticRole,
    /// Font variant.
    pub font: SemanticFont,
}

impl Classification {
    /// Classification of a symbol with no table entry.
    pub const UNKNOWN: Self = Self {
        node_type: SemanticType::Unknown,
        role: SemanticRole::Unknown,
        font: SemanticFont::Unknown,
    };

    /// Create a classification from its parts.
    #[must_use]
    pub const fn new(node_type: SemanticType, role: SemanticRole, font: SemanticFont) -> Self {
        Self {
            node_type,
            role,
            font,
        }
    }

    /// Whether this is [`Classification::UNKNOWN`].
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// Kinds of secondary facts about a glyph, independent of its primary
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SecondaryKind {
    /// Usable as a bar diacritic.
    Bar,
    /// Usable as a tilde diacritic.
    Tilde,
    /// A candidate for the differential `d`.
    #[strum(serialize = "d")]
    Differential,
}

/// The glyph source of a [`SymbolEntry`].
#[derive(Debug, Clone, Copy)]
pub enum Glyphs {
    /// Every member of a set.
    Set(&'static phf::Set<&'static str>),
    /// The keys of a pairing table.
    Keys(&'static phf::Map<&'static str, &'static str>),
    /// The values of a pairing table.
    Values(&'static phf::Map<&'static str, &'static str>),
}

impl Glyphs {
    /// All glyphs of the source.
    #[must_use]
    pub fn collect(&self) -> Vec<&'static str> {
        match *self {
            Self::Set(set) => set.iter().copied().collect(),
            Self::Keys(map) => map.keys().copied().collect(),
            Self::Values(map) => map.values().copied().collect(),
        }
    }
}

/// One line of the ordered registry definition.
#[derive(Debug, Clone, Copy)]
pub struct SymbolEntry {
    /// The symbols the entry classifies.
    pub glyphs: Glyphs,
    /// Type assigned to every glyph.
    pub node_type: SemanticType,
    /// Role assigned to every glyph.
    pub role: SemanticRole,
    /// Font; `normal` when absent.
    pub font: Option<SemanticFont>,
    /// Secondary fact recorded for every glyph.
    pub secondary: Option<SecondaryKind>,
}

impl SymbolEntry {
    /// The classification the entry assigns.
    #[must_use]
    pub fn classification(&self) -> Classification {
        Classification::new(
            self.node_type,
            self.role,
            self.font.unwrap_or(SemanticFont::Normal),
        )
    }
}
