//! Core vocabularies shared by every stage of the semantic pipeline
//!
//! The three closed enums here are the key space the downstream speech and
//! braille generators are written against: their string forms are exactly the
//! values written into the `semantic-type`, `semantic-role` and
//! `semantic-font` attributes.

use strum::{AsRefStr, Display, EnumIter, EnumString};

mod error;
pub use error::{SemanticError, SemanticErrorKind};

mod settings;
pub use settings::{DanglingOperatorPolicy, Settings};

/// Structural kind of a semantic node. Assigned once by the tree builder and
/// never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum SemanticType {
    /// Separator such as a comma or semicolon.
    Punctuation,
    /// A matched bracket-like delimiter.
    Fence,
    /// Numeric literal.
    Number,
    /// Variable or constant name.
    Identifier,
    /// Running text.
    Text,
    /// Operator leaf.
    Operator,
    /// Relation leaf.
    Relation,
    /// Summation, product, integral and friends.
    LargeOp,
    /// Named function such as `sin` or `lim`.
    Function,
    /// Diacritic placed over or under a base.
    Accent,
    /// Expression enclosed by a matched fence pair.
    Fenced,
    /// Fraction or binomial.
    Fraction,
    /// Punctuated sequence.
    Punctuated,
    /// Chain of relations sharing one role.
    RelSeq,
    /// Chain of relations with mixed roles.
    MultiRel,
    /// Binary operator application.
    InfixOp,
    /// Operator bound to its right operand.
    PrefixOp,
    /// Operator bound to its left operand.
    PostfixOp,
    /// Function application.
    Appl,
    /// Integral with integrand and differential.
    Integral,
    /// Big operator with its body.
    BigOp,
    /// Square root.
    Sqrt,
    /// Root with an index.
    Root,
    /// Limit-style operator with an upper limit.
    LimUpper,
    /// Limit-style operator with a lower limit.
    LimLower,
    /// Limit-style operator with both limits.
    LimBoth,
    /// Subscripted base.
    Subscript,
    /// Superscripted base.
    Superscript,
    /// Base with something set below it.
    Underscore,
    /// Base with something set above it.
    Overscore,
    /// Base with pre- and post-scripts.
    Tensor,
    /// Generic table.
    Table,
    /// Table of single-cell lines.
    Multiline,
    /// Matrix.
    Matrix,
    /// Vector.
    Vector,
    /// Case distinction.
    Cases,
    /// Table row.
    Row,
    /// Single-cell table row.
    Line,
    /// Table cell.
    Cell,
    /// Enclosed expression.
    Enclose,
    /// Proof-tree inference.
    Inference,
    /// Inference rule label.
    RuleLabel,
    /// Inference conclusion.
    Conclusion,
    /// Inference premises.
    Premises,
    /// Unclassifiable.
    Unknown,
    /// Placeholder for missing content.
    Empty,
}

/// Contextual sub-classification of a node. Initially assigned by the
/// classifier and builder, refined by the role resolver.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum SemanticRole {
    // punctuation
    Comma,
    Semicolon,
    Colon,
    FullStop,
    Ellipsis,
    Question,
    // fences
    Open,
    Close,
    Top,
    Bottom,
    Neutral,
    Metric,
    LeftRight,
    AboveBelow,
    // identifiers and numbers
    LatinLetter,
    GreekLetter,
    OtherLetter,
    NumberSet,
    Integer,
    Float,
    OtherNumber,
    Text,
    // large operators and functions
    Sum,
    Integral,
    LimFunc,
    PrefixFunc,
    SimpleFunc,
    // operators
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Dash,
    Negative,
    Positive,
    Negation,
    Logic,
    Set,
    Implicit,
    Dummy,
    Application,
    PrefixOp,
    PostfixOp,
    Prime,
    Degree,
    Differential,
    // relations
    Equality,
    Inequality,
    Element,
    Arrow,
    // sequences
    Sequence,
    EndPunct,
    StartPunct,
    // scripts and accents
    OverAccent,
    UnderAccent,
    SubSup,
    LeftSub,
    LeftSuper,
    RightSub,
    RightSuper,
    // tables
    Label,
    Table,
    Multiline,
    Matrix,
    SquareMatrix,
    Vector,
    RowVector,
    Determinant,
    Binomial,
    Cases,
    // enclosures
    Longdiv,
    Actuarial,
    Radical,
    Box,
    RoundedBox,
    Circle,
    Left,
    Right,
    UpDiagonalStrike,
    DownDiagonalStrike,
    VerticalStrike,
    HorizontalStrike,
    Madruwb,
    UpDiagonalArrow,
    PhasorAngle,
    Unknown,
}

impl SemanticRole {
    /// Roles of operators binding to the operand on their right.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::PrefixOp | Self::Negation)
    }

    /// Roles of operators binding to the operand on their left.
    #[must_use]
    pub const fn is_postfix(self) -> bool {
        matches!(self, Self::PostfixOp | Self::Prime | Self::Degree)
    }

    /// Roles of the additive precedence class. These also act as signs when
    /// they have no left operand.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(
            self,
            Self::Addition | Self::Subtraction | Self::Dash | Self::Negative | Self::Positive
        )
    }

    /// Roles a `menclose` notation can map to.
    #[must_use]
    pub const fn is_enclosure(self) -> bool {
        matches!(
            self,
            Self::Longdiv
                | Self::Actuarial
                | Self::Radical
                | Self::Box
                | Self::RoundedBox
                | Self::Circle
                | Self::Left
                | Self::Right
                | Self::Top
                | Self::Bottom
                | Self::UpDiagonalStrike
                | Self::DownDiagonalStrike
                | Self::VerticalStrike
                | Self::HorizontalStrike
                | Self::Madruwb
                | Self::UpDiagonalArrow
                | Self::PhasorAngle
        )
    }
}

/// Font variant of a leaf. Serialized in `kebab-case`, which coincides with
/// the MathML `mathvariant` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum SemanticFont {
    /// Upright.
    Normal,
    /// Bold.
    Bold,
    /// Italic.
    Italic,
    /// Bold italic.
    BoldItalic,
    /// Script.
    Script,
    /// Bold script.
    BoldScript,
    /// Fraktur.
    Fraktur,
    /// Bold fraktur.
    BoldFraktur,
    /// Double-struck.
    DoubleStruck,
    /// Double-struck italic, used by the differential and exponential letters.
    DoubleStruckItalic,
    /// Sans-serif.
    SansSerif,
    /// Bold sans-serif.
    BoldSansSerif,
    /// Sans-serif italic.
    SansSerifItalic,
    /// Sans-serif bold italic.
    SansSerifBoldItalic,
    /// Monospace.
    Monospace,
    /// Caligraphic.
    Caligraphic,
    /// Bold caligraphic.
    CaligraphicBold,
    /// Not determined.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr as _;
    use strum::IntoEnumIterator as _;

    #[test]
    fn type_names_are_lowercase_concatenations() {
        assert_eq!(SemanticType::LargeOp.as_ref(), "largeop");
        assert_eq!(SemanticType::RelSeq.as_ref(), "relseq");
        assert_eq!(SemanticType::LimBoth.as_ref(), "limboth");
        assert_eq!(SemanticType::RuleLabel.to_string(), "rulelabel");
    }

    #[test]
    fn role_names_round_trip() {
        for role in SemanticRole::iter() {
            assert_eq!(SemanticRole::from_str(role.as_ref()), Ok(role));
        }
        assert_eq!(SemanticRole::LeftRight.as_ref(), "leftright");
        assert_eq!(SemanticRole::from_str("box"), Ok(SemanticRole::Box));
    }

    #[test]
    fn font_names_follow_mathvariant() {
        assert_eq!(SemanticFont::DoubleStruckItalic.as_ref(), "double-struck-italic");
        assert_eq!(
            SemanticFont::from_str("sans-serif-bold-italic"),
            Ok(SemanticFont::SansSerifBoldItalic)
        );
        assert_eq!(
            SemanticFont::from_str("bold-sans-serif"),
            Ok(SemanticFont::BoldSansSerif)
        );
        assert_eq!(SemanticFont::from_str("Bold"), Ok(SemanticFont::Bold));
        assert!(SemanticFont::from_str("gothic").is_err());
    }

    #[test]
    fn operator_classes_are_disjoint() {
        for role in SemanticRole::iter() {
            let classes = [role.is_prefix(), role.is_postfix(), role.is_additive()];
            assert!(classes.iter().filter(|c| **c).count() <= 1, "{role}");
        }
    }
}
