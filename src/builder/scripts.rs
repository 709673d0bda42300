//! Sub-, super-, under- and overscripts
//!
//! Large operators and limit functions take their scripts as limits. Every
//! other base gets positional script nodes, with combined scripts nested
//! inner first: `msubsup` is a superscript over a subscript and
//! `munderover` an overscript over an underscore.

use super::TreeBuilder;
use crate::mathml_tree::{MathNode, MathNodeId, MathNodeType};
use crate::semantic_tree::SemanticId;
use crate::symbols::{Classification, SecondaryKind};
use crate::types::{SemanticError, SemanticFont, SemanticRole, SemanticType};

impl TreeBuilder<'_> {
    /// `msub`, `msup`, `msubsup`, `munder`, `mover` and `munderover`.
    pub(super) fn scripts(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let base = self.script(node, 0)?;
        let base_node = self.tree.at(base);
        let base_role = base_node.role;
        let is_limit_base = base_node.node_type() == SemanticType::LargeOp
            || (base_node.node_type() == SemanticType::Function
                && base_role == SemanticRole::LimFunc);
        if is_limit_base {
            return self.limits(id, node, base);
        }

        let built = match node.node_type {
            MathNodeType::Msub => {
                let sub = self.script(node, 1)?;
                self.sourced_node(id, SemanticType::Subscript, base_role, vec![base, sub], Vec::new())
            }
            MathNodeType::Msup => {
                let sup = self.script(node, 1)?;
                let sup_node = self.tree.at(sup);
                let role = if sup_node.node_type() == SemanticType::Operator
                    && sup_node.role == SemanticRole::Prime
                {
                    SemanticRole::Prime
                } else {
                    base_role
                };
                self.sourced_node(id, SemanticType::Superscript, role, vec![base, sup], Vec::new())
            }
            MathNodeType::Msubsup => {
                let sub = self.script(node, 1)?;
                let inner = self.tree.create_node(
                    SemanticType::Subscript,
                    SemanticRole::SubSup,
                    vec![base, sub],
                    Vec::new(),
                );
                let sup = self.script(node, 2)?;
                self.sourced_node(id, SemanticType::Superscript, base_role, vec![inner, sup], Vec::new())
            }
            MathNodeType::Munder => {
                let (under, role) = self.accent_script(node, 1, SemanticRole::UnderAccent, base_role)?;
                self.sourced_node(id, SemanticType::Underscore, role, vec![base, under], Vec::new())
            }
            MathNodeType::Mover => {
                let (over, role) = self.accent_script(node, 1, SemanticRole::OverAccent, base_role)?;
                self.sourced_node(id, SemanticType::Overscore, role, vec![base, over], Vec::new())
            }
            _ => {
                let (under, under_role) =
                    self.accent_script(node, 1, SemanticRole::UnderAccent, base_role)?;
                let inner = self.tree.create_node(
                    SemanticType::Underscore,
                    under_role,
                    vec![base, under],
                    Vec::new(),
                );
                let (over, role) = self.accent_script(node, 2, SemanticRole::OverAccent, base_role)?;
                self.sourced_node(id, SemanticType::Overscore, role, vec![inner, over], Vec::new())
            }
        };
        Ok(built)
    }

    /// LIMLOWER, LIMUPPER or LIMBOTH over a large operator or limit function.
    fn limits(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
        base: SemanticId,
    ) -> Result<SemanticId, SemanticError> {
        let role = self.tree.at(base).role;
        let (node_type, count) = match node.node_type {
            MathNodeType::Msub | MathNodeType::Munder => (SemanticType::LimLower, 1),
            MathNodeType::Msup | MathNodeType::Mover => (SemanticType::LimUpper, 1),
            _ => (SemanticType::LimBoth, 2),
        };
        let mut children = vec![base];
        for idx in 1..=count {
            children.push(self.script(node, idx)?);
        }
        tracing::trace!(?node_type, ?role, "limits");
        Ok(self.sourced_node(id, node_type, role, children, Vec::new()))
    }

    /// The child at `idx`, or an empty node when it is missing.
    fn script(&mut self, node: &MathNode, idx: usize) -> Result<SemanticId, SemanticError> {
        match node.children().get(idx) {
            Some(child) => self.element(*child),
            None => Ok(self.tree.create_empty()),
        }
    }

    /// An under- or overscript, built as an accent when the glyph is one.
    /// Returns the script and the role of the scripted node.
    fn accent_script(
        &mut self,
        node: &MathNode,
        idx: usize,
        accent_role: SemanticRole,
        base_role: SemanticRole,
    ) -> Result<(SemanticId, SemanticRole), SemanticError> {
        let Some(child) = node.children().get(idx).copied() else {
            return Ok((self.tree.create_empty(), base_role));
        };
        let math = self.math;
        let script = math.node(child)?;
        if script.node_type.is_token() && self.is_accent(script.text().trim()) {
            let accent = self.leaf(
                child,
                Classification::new(SemanticType::Accent, accent_role, SemanticFont::Normal),
                script.text().trim(),
            );
            return Ok((accent, accent_role));
        }
        Ok((self.element(child)?, base_role))
    }

    fn is_accent(&self, glyph: &str) -> bool {
        !glyph.is_empty()
            && (self.symbols.classify(glyph).node_type == SemanticType::Accent
                || self.symbols.classify_secondary(SecondaryKind::Bar, glyph).is_some()
                || self.symbols.classify_secondary(SecondaryKind::Tilde, glyph).is_some())
    }

    /// `mmultiscripts`: TENSOR with children `[base, leftsub, leftsuper,
    /// rightsub, rightsuper]`.
    pub(super) fn multiscripts(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let math = self.math;
        let base = self.script(node, 0)?;
        let base_role = self.tree.at(base).role;

        let mut right = Vec::new();
        let mut left = Vec::new();
        let mut prescripts = false;
        for child in node.children().iter().skip(1) {
            if math.node(*child)?.node_type == MathNodeType::Mprescripts {
                prescripts = true;
            } else if prescripts {
                left.push(*child);
            } else {
                right.push(*child);
            }
        }

        let left_sub = self.script_group(left.iter().step_by(2), SemanticRole::LeftSub)?;
        let left_super = self.script_group(left.iter().skip(1).step_by(2), SemanticRole::LeftSuper)?;
        let right_sub = self.script_group(right.iter().step_by(2), SemanticRole::RightSub)?;
        let right_super =
            self.script_group(right.iter().skip(1).step_by(2), SemanticRole::RightSuper)?;

        Ok(self.sourced_node(
            id,
            SemanticType::Tensor,
            base_role,
            vec![base, left_sub, left_super, right_sub, right_super],
            Vec::new(),
        ))
    }

    /// The scripts at one position, `none` placeholders dropped.
    fn script_group<'m, I>(&mut self, ids: I, role: SemanticRole) -> Result<SemanticId, SemanticError>
    where
        I: Iterator<Item = &'m MathNodeId>,
    {
        let mut scripts = Vec::new();
        for id in ids {
            let built = self.element(*id)?;
            if !self.tree.at(built).is_empty_node() {
                scripts.push(built);
            }
        }
        if scripts.is_empty() {
            return Ok(self.tree.create_empty());
        }
        Ok(self
            .tree
            .create_node(SemanticType::Punctuated, role, scripts, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::build;
    use crate::context::SemanticContext;
    use crate::mathml_tree::{MathElement, MathNodeType, MathTree};
    use crate::semantic_tree::{SemanticNode, SemanticTree};
    use crate::types::{SemanticRole, SemanticType, Settings};

    use MathNodeType::{Mi, Mn, Mo};

    fn tok(node_type: MathNodeType, text: &str) -> MathElement {
        MathElement::token(node_type, text)
    }

    fn scripted(node_type: MathNodeType, children: Vec<MathElement>) -> SemanticTree {
        let element = MathElement::with_children(node_type, children);
        build(&SemanticContext::default(), &MathTree::from(element), &Settings::default()).unwrap()
    }

    fn child<'t>(tree: &'t SemanticTree, node: &SemanticNode, idx: usize) -> &'t SemanticNode {
        tree.node(node.children()[idx]).unwrap()
    }

    #[test]
    fn subscript_keeps_base_role() {
        let tree = scripted(MathNodeType::Msub, vec![tok(Mi, "x"), tok(Mn, "1")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Subscript);
        assert_eq!(root.role, SemanticRole::LatinLetter);
    }

    #[test]
    fn prime_superscript() {
        let tree = scripted(MathNodeType::Msup, vec![tok(Mi, "f"), tok(Mo, "\u{2032}")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Superscript);
        assert_eq!(root.role, SemanticRole::Prime);
    }

    #[test]
    fn subsup_nests_subscript() {
        let tree = scripted(
            MathNodeType::Msubsup,
            vec![tok(Mi, "x"), tok(Mn, "1"), tok(Mn, "2")],
        );
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Superscript);
        let inner = child(&tree, root, 0);
        assert_eq!(inner.node_type(), SemanticType::Subscript);
        assert_eq!(inner.role, SemanticRole::SubSup);
        assert!(tree.source(inner.id()).is_none());
        assert!(tree.source(root.id()).is_some());
    }

    #[test]
    fn limits_of_large_operators() {
        let tree = scripted(
            MathNodeType::Munderover,
            vec![tok(Mo, "\u{2211}"), tok(Mi, "i"), tok(Mi, "n")],
        );
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::LimBoth);
        assert_eq!(root.role, SemanticRole::Sum);
        assert_eq!(root.children().len(), 3);

        let tree = scripted(MathNodeType::Munder, vec![tok(Mi, "lim"), tok(Mi, "x")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::LimLower);
        assert_eq!(root.role, SemanticRole::LimFunc);
    }

    #[test]
    fn accents() {
        let tree = scripted(MathNodeType::Mover, vec![tok(Mi, "x"), tok(Mo, "\u{af}")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Overscore);
        assert_eq!(root.role, SemanticRole::OverAccent);
        let accent = child(&tree, root, 1);
        assert_eq!(accent.node_type(), SemanticType::Accent);
        assert_eq!(accent.role, SemanticRole::OverAccent);

        let tree = scripted(MathNodeType::Munder, vec![tok(Mi, "x"), tok(Mi, "y")]);
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Underscore);
        assert_eq!(root.role, SemanticRole::LatinLetter);
    }

    #[test]
    fn underover_nests_underscore() {
        let tree = scripted(
            MathNodeType::Munderover,
            vec![tok(Mi, "x"), tok(Mi, "a"), tok(Mi, "b")],
        );
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Overscore);
        assert_eq!(child(&tree, root, 0).node_type(), SemanticType::Underscore);
    }

    #[test]
    fn tensor_positions() {
        let tree = scripted(
            MathNodeType::Mmultiscripts,
            vec![
                tok(Mi, "R"),
                tok(Mi, "i"),
                MathElement::with_children(MathNodeType::NoneElement, vec![]),
                MathElement::with_children(MathNodeType::Mprescripts, vec![]),
                tok(Mi, "k"),
                tok(Mi, "l"),
            ],
        );
        let root = tree.root_node().unwrap();
        assert_eq!(root.node_type(), SemanticType::Tensor);
        let positions: Vec<(SemanticType, SemanticRole)> = root
            .children()
            .iter()
            .map(|id| {
                let node = tree.node(*id).unwrap();
                (node.node_type(), node.role)
            })
            .collect();
        assert_eq!(
            positions,
            vec![
                (SemanticType::Identifier, SemanticRole::LatinLetter),
                (SemanticType::Punctuated, SemanticRole::LeftSub),
                (SemanticType::Punctuated, SemanticRole::LeftSuper),
                (SemanticType::Punctuated, SemanticRole::RightSub),
                (SemanticType::Empty, SemanticRole::Unknown),
            ]
        );
    }
}
