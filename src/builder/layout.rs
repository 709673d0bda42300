//! Fractions, radicals and enclosures

use super::TreeBuilder;
use crate::mathml_tree::{MathNode, MathNodeId};
use crate::semantic_tree::SemanticId;
use crate::types::{SemanticError, SemanticRole, SemanticType};

/// Annotation namespace for `menclose` notations beyond the first.
pub const NOTATION_ANNOTATION: &str = "notation";

/// Whether a `linethickness` value draws no rule, e.g. `0`, `0pt`, `0.0em`.
/// Named thicknesses (`thin`, `medium`, `thick`) are never zero.
fn is_zero_thickness(value: &str) -> bool {
    let number = value
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    number
        .parse::<f64>()
        .is_ok_and(|thickness| thickness.abs() < f64::EPSILON)
}

impl TreeBuilder<'_> {
    /// `mfrac`. A fraction without a rule is a binomial coefficient.
    pub(super) fn fraction(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let parts = self.fixed_children(node, 2)?;
        let role = if node.attribute("linethickness").is_some_and(is_zero_thickness) {
            SemanticRole::Binomial
        } else {
            SemanticRole::Division
        };
        Ok(self.sourced_node(id, SemanticType::Fraction, role, parts, Vec::new()))
    }

    /// `msqrt` over its inferred row.
    pub(super) fn square_root(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let radicand = self.row(node.children())?;
        Ok(self.sourced_node(
            id,
            SemanticType::Sqrt,
            SemanticRole::Unknown,
            vec![radicand],
            Vec::new(),
        ))
    }

    /// `mroot`: presented radicand first, built index first.
    pub(super) fn root(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let mut parts = self.fixed_children(node, 2)?;
        parts.reverse();
        Ok(self.sourced_node(
            id,
            SemanticType::Root,
            SemanticRole::Unknown,
            parts,
            Vec::new(),
        ))
    }

    /// `menclose`. The first notation decides the role; the rest are kept as
    /// annotations.
    pub(super) fn enclose(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let body = self.row(node.children())?;
        let notation = node.attribute("notation").unwrap_or("longdiv");
        let mut tokens = notation.split_whitespace();
        let role = tokens
            .next()
            .and_then(|first| first.parse::<SemanticRole>().ok())
            .filter(|role| role.is_enclosure())
            .unwrap_or(SemanticRole::Unknown);

        let enclosed = self.sourced_node(id, SemanticType::Enclose, role, vec![body], Vec::new());
        let annotation = &mut self.tree.at_mut(enclosed).annotation;
        for token in tokens {
            annotation.add(NOTATION_ANNOTATION, token);
        }
        Ok(enclosed)
    }
}
