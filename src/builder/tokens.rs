//! Leaf handlers for token elements.

use super::{FENCE_ANNOTATION, TreeBuilder};
use crate::mathml_tree::{MathNode, MathNodeId, MathNodeType};
use crate::semantic_tree::SemanticId;
use crate::symbols::{Classification, default_identifier_font};
use crate::types::{SemanticFont, SemanticRole, SemanticType};

/// The `mathvariant` font of a token, if it names one.
fn mathvariant(node: &MathNode) -> Option<SemanticFont> {
    node.attribute("mathvariant")
        .and_then(|variant| variant.parse().ok())
}

fn all_digits(text: &str) -> bool {
    text.chars().all(char::is_numeric)
}

/// Digits, optionally grouped by commas into threes after a leading group
/// of one to three digits.
fn is_integer_part(whole: &str) -> bool {
    if !whole.contains(',') {
        return all_digits(whole);
    }
    let mut groups = whole.split(',');
    groups
        .next()
        .is_some_and(|first| (1..=3).contains(&first.chars().count()) && all_digits(first))
        && groups.all(|group| group.chars().count() == 3 && all_digits(group))
}

/// Role of the text of an `mn` element. A single comma that does not group
/// thousands reads as a decimal comma.
fn number_role(text: &str) -> SemanticRole {
    if !text.chars().any(char::is_numeric) {
        return SemanticRole::OtherNumber;
    }
    match text.split_once('.') {
        None if is_integer_part(text) => SemanticRole::Integer,
        None => match text.split_once(',') {
            Some((whole, fraction)) if all_digits(whole) && all_digits(fraction) => SemanticRole::Float,
            _ => SemanticRole::OtherNumber,
        },
        Some((whole, fraction)) if is_integer_part(whole) && all_digits(fraction) => SemanticRole::Float,
        Some(_) => SemanticRole::OtherNumber,
    }
}

impl TreeBuilder<'_> {
    pub(super) fn leaf(&mut self, source: MathNodeId, classification: Classification, text: &str) -> SemanticId {
        let id = self.tree.create_leaf(
            classification.node_type,
            classification.role,
            classification.font,
            text,
        );
        self.tree.set_source(id, source);
        id
    }

    /// `mi`: single letters default to italic, unknown names are plain
    /// identifiers.
    pub(super) fn identifier(&mut self, id: MathNodeId, node: &MathNode) -> SemanticId {
        let text = node.text().trim();
        if text.is_empty() {
            return self.tree.create_empty();
        }
        let mut classification = self.symbols.classify(text);
        if classification.is_unknown() {
            classification = Classification::new(
                SemanticType::Identifier,
                SemanticRole::Unknown,
                SemanticFont::Normal,
            );
        }
        let single_char = text.chars().count() == 1;
        let font = mathvariant(node)
            .unwrap_or_else(|| default_identifier_font(&classification, single_char));
        classification.font = font;
        if classification.node_type == SemanticType::Fence {
            return self.unmatched_fence(id, classification, text);
        }
        self.leaf(id, classification, text)
    }

    /// `mn`
    pub(super) fn number(&mut self, id: MathNodeId, node: &MathNode) -> SemanticId {
        let text = node.text().trim();
        if text.is_empty() {
            return self.tree.create_empty();
        }
        let known = self.symbols.classify(text);
        let role = if known.node_type == SemanticType::Number {
            known.role
        } else {
            number_role(text)
        };
        let font = mathvariant(node).unwrap_or_else(|| {
            text.chars()
                .next()
                .map(|first| self.symbols.classify(first.encode_utf8(&mut [0; 4])).font)
                .filter(|font| *font != SemanticFont::Unknown)
                .unwrap_or(SemanticFont::Normal)
        });
        self.leaf(id, Classification::new(SemanticType::Number, role, font), text)
    }

    /// `mo`. Fences reaching this handler are outside any row and therefore
    /// never paired.
    pub(super) fn operator(&mut self, id: MathNodeId, node: &MathNode) -> SemanticId {
        let text = node.text().trim();
        if text.is_empty() {
            return self.tree.create_empty();
        }
        let mut classification = self.symbols.classify(text);
        if classification.is_unknown() {
            classification = Classification::new(
                SemanticType::Operator,
                SemanticRole::Unknown,
                SemanticFont::Normal,
            );
        }
        if let Some(font) = mathvariant(node) {
            classification.font = font;
        }
        if classification.node_type == SemanticType::Fence {
            return self.unmatched_fence(id, classification, text);
        }
        self.leaf(id, classification, text)
    }

    /// `mtext` and `ms`
    pub(super) fn text(&mut self, id: MathNodeId, node: &MathNode) -> SemanticId {
        let text = node.text();
        if text.trim().is_empty() {
            return self.tree.create_empty();
        }
        let font = mathvariant(node).unwrap_or(SemanticFont::Normal);
        self.leaf(
            id,
            Classification::new(SemanticType::Text, SemanticRole::Text, font),
            text,
        )
    }

    /// `mglyph`, named by its `alt` text
    pub(super) fn glyph(&mut self, id: MathNodeId, node: &MathNode) -> SemanticId {
        let alt = node.attribute("alt").unwrap_or_default();
        self.leaf(
            id,
            Classification::new(
                SemanticType::Identifier,
                SemanticRole::Unknown,
                SemanticFont::Normal,
            ),
            alt,
        )
    }

    /// A fence glyph that found no partner: punctuation keeping its fence
    /// role.
    pub(super) fn unmatched_fence(
        &mut self,
        id: MathNodeId,
        classification: Classification,
        text: &str,
    ) -> SemanticId {
        tracing::debug!(glyph = text, "fence degraded to punctuation");
        let leaf = self.leaf(
            id,
            Classification::new(
                SemanticType::Punctuation,
                classification.role,
                classification.font,
            ),
            text,
        );
        self.tree
            .at_mut(leaf)
            .annotation
            .add(FENCE_ANNOTATION, "unmatched");
        leaf
    }

    /// A fence glyph paired by the fence matcher.
    pub(super) fn matched_fence(
        &mut self,
        id: MathNodeId,
        classification: Classification,
        text: &str,
    ) -> SemanticId {
        self.leaf(id, classification, text)
    }

    /// The classification of a token element that is a fence, if it is one.
    pub(super) fn fence_classification(&self, node: &MathNode) -> Option<Classification> {
        if !matches!(node.node_type, MathNodeType::Mo | MathNodeType::Mi) {
            return None;
        }
        let classification = self.symbols.classify(node.text().trim());
        (classification.node_type == SemanticType::Fence).then_some(classification)
    }
}
