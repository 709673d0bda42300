//! Semantic tree arena
//!
//! Every [`SemanticNode`] lives in the [`SemanticTree`] that created it and is
//! addressed by a [`SemanticId`]. Parent links are ids rather than pointers,
//! and the association with the presentation element a node was built from is
//! a one-directional map owned by the tree.

use core::fmt;

use crate::mathml_tree::MathNodeId;
use crate::namespace::{Annotations, KeyMap};
use crate::types::{SemanticError, SemanticErrorKind, SemanticFont, SemanticRole, SemanticType};
use crate::utils::escape_into;

/// Identifier of a node, unique within its tree and assigned in creation
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct SemanticId(usize);

impl SemanticId {
    /// Position of the node in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SemanticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the semantic tree
///
/// `node_type` and `font` are fixed at creation. `role` and `annotation`
/// stay mutable so later passes can refine them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SemanticNode {
    id: SemanticId,
    node_type: SemanticType,
    font: SemanticFont,
    /// Contextual sub-classification
    pub role: SemanticRole,
    /// Raw symbol of a leaf, empty for compound nodes
    pub text: String,
    children: Vec<SemanticId>,
    content: Vec<SemanticId>,
    parent: Option<SemanticId>,
    /// Secondary facts keyed by namespace
    pub annotation: Annotations,
}

impl SemanticNode {
    /// The node's id
    #[must_use]
    pub const fn id(&self) -> SemanticId {
        self.id
    }

    /// Structural kind
    #[must_use]
    pub const fn node_type(&self) -> SemanticType {
        self.node_type
    }

    /// Font variant
    #[must_use]
    pub const fn font(&self) -> SemanticFont {
        self.font
    }

    /// Operands and other structural constituents, in order
    #[must_use]
    pub fn children(&self) -> &[SemanticId] {
        &self.children
    }

    /// Operators and separators of a compound node, in order
    #[must_use]
    pub fn content(&self) -> &[SemanticId] {
        &self.content
    }

    /// The containing node, `None` for the root
    #[must_use]
    pub const fn parent(&self) -> Option<SemanticId> {
        self.parent
    }

    /// Whether the node has neither children nor content
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.content.is_empty()
    }

    /// Whether this is an empty placeholder
    #[must_use]
    pub fn is_empty_node(&self) -> bool {
        self.node_type == SemanticType::Empty
    }
}

/// Arena of semantic nodes with a designated root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SemanticTree {
    nodes: Vec<SemanticNode>,
    root: Option<SemanticId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    sources: KeyMap<SemanticId, MathNodeId>,
    /// Number of nodes associated with each presentation element
    #[cfg_attr(feature = "serde", serde(skip))]
    claimed: KeyMap<MathNodeId, usize>,
}

impl SemanticTree {
    /// Creates an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(
        &mut self,
        node_type: SemanticType,
        role: SemanticRole,
        font: SemanticFont,
        text: String,
    ) -> SemanticId {
        let id = SemanticId(self.nodes.len());
        self.nodes.push(SemanticNode {
            id,
            node_type,
            font,
            role,
            text,
            children: Vec::new(),
            content: Vec::new(),
            parent: None,
            annotation: Annotations::default(),
        });
        id
    }

    /// Creates a leaf
    pub fn create_leaf<S>(
        &mut self,
        node_type: SemanticType,
        role: SemanticRole,
        font: SemanticFont,
        text: S,
    ) -> SemanticId
    where
        S: Into<String>,
    {
        self.push(node_type, role, font, text.into())
    }

    /// Creates an empty placeholder
    pub fn create_empty(&mut self) -> SemanticId {
        self.push(
            SemanticType::Empty,
            SemanticRole::Unknown,
            SemanticFont::Unknown,
            String::new(),
        )
    }

    /// Creates a compound node that takes ownership of `children` and
    /// `content`, updating their parent links.
    pub fn create_node(
        &mut self,
        node_type: SemanticType,
        role: SemanticRole,
        children: Vec<SemanticId>,
        content: Vec<SemanticId>,
    ) -> SemanticId {
        let id = self.push(node_type, role, SemanticFont::Unknown, String::new());
        for constituent in children.iter().chain(&content) {
            self.nodes[constituent.0].parent = Some(id);
        }
        let node = &mut self.nodes[id.0];
        node.children = children;
        node.content = content;
        id
    }

    /// Looks up a node
    pub fn node(&self, id: SemanticId) -> Result<&SemanticNode, SemanticError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| SemanticErrorKind::UnknownSemanticNode { id }.into())
    }

    /// Looks up a node for modification
    pub fn node_mut(&mut self, id: SemanticId) -> Result<&mut SemanticNode, SemanticError> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| SemanticErrorKind::UnknownSemanticNode { id }.into())
    }

    /// Node access for ids this tree handed out itself.
    pub(crate) fn at(&self, id: SemanticId) -> &SemanticNode {
        &self.nodes[id.0]
    }

    pub(crate) fn at_mut(&mut self, id: SemanticId) -> &mut SemanticNode {
        &mut self.nodes[id.0]
    }

    /// The root node's id
    #[must_use]
    pub const fn root(&self) -> Option<SemanticId> {
        self.root
    }

    /// The root node
    pub fn root_node(&self) -> Result<&SemanticNode, SemanticError> {
        let root = self.root.ok_or(SemanticErrorKind::EmptySemanticTree)?;
        self.node(root)
    }

    pub(crate) fn set_root(&mut self, root: SemanticId) {
        self.nodes[root.0].parent = None;
        self.root = Some(root);
    }

    /// Number of nodes in the arena
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no node
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in creation order
    pub fn iter(&self) -> impl Iterator<Item = &SemanticNode> {
        self.nodes.iter()
    }

    /// The presentation element `id` was built from
    #[must_use]
    pub fn source(&self, id: SemanticId) -> Option<MathNodeId> {
        self.sources.get(&id).copied()
    }

    pub(crate) fn set_source(&mut self, id: SemanticId, source: MathNodeId) {
        if let Some(previous) = self.sources.insert(id, source)
            && let Some(count) = self.claimed.get_mut(&previous)
        {
            *count -= 1;
            if *count == 0 {
                self.claimed.remove(&previous);
            }
        }
        *self.claimed.entry(source).or_default() += 1;
    }

    /// Whether some node is associated with `source`
    #[must_use]
    pub fn is_claimed(&self, source: MathNodeId) -> bool {
        self.claimed.contains_key(&source)
    }

    /// Node ids reachable from the root, children before their parent,
    /// children before content.
    #[must_use]
    pub fn post_order(&self) -> Vec<SemanticId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        if let Some(root) = self.root {
            self.collect_post_order(root, &mut order);
        }
        order
    }

    fn collect_post_order(&self, id: SemanticId, order: &mut Vec<SemanticId>) {
        let node = self.at(id);
        for child in node.children.iter().chain(&node.content) {
            self.collect_post_order(*child, order);
        }
        order.push(id);
    }

    /// Dumps the tree rooted at the root node as XML, e.g.
    /// `<infixop role="addition" font="unknown" id="2">…</infixop>`.
    pub fn to_xml(&self) -> Result<String, SemanticError> {
        let root = self.root.ok_or(SemanticErrorKind::EmptySemanticTree)?;
        let mut out = String::new();
        self.write_xml(&mut out, root)?;
        Ok(out)
    }

    fn write_xml<W: fmt::Write>(&self, out: &mut W, id: SemanticId) -> Result<(), SemanticError> {
        let node = self.node(id)?;
        let tag = node.node_type.as_ref();
        write!(
            out,
            "<{tag} role=\"{}\" font=\"{}\" id=\"{}\"",
            node.role, node.font, node.id
        )?;
        for (namespace, values) in node.annotation.iter() {
            write!(out, " annotation-{namespace}=\"")?;
            escape_into(out, &values.join(";"))?;
            out.write_char('"')?;
        }
        out.write_char('>')?;

        if node.is_leaf() {
            escape_into(out, &node.text)?;
        } else {
            if !node.content.is_empty() {
                out.write_str("<content>")?;
                for content in &node.content {
                    self.write_xml(out, *content)?;
                }
                out.write_str("</content>")?;
            }
            if !node.children.is_empty() {
                out.write_str("<children>")?;
                for child in &node.children {
                    self.write_xml(out, *child)?;
                }
                out.write_str("</children>")?;
            }
        }

        write!(out, "</{tag}>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathml_tree::{MathNodeType, MathTree};

    fn sum() -> SemanticTree {
        let mut tree = SemanticTree::new();
        let two = tree.create_leaf(SemanticType::Number, SemanticRole::Integer, SemanticFont::Normal, "2");
        let plus = tree.create_leaf(SemanticType::Operator, SemanticRole::Addition, SemanticFont::Normal, "+");
        let three = tree.create_leaf(SemanticType::Number, SemanticRole::Integer, SemanticFont::Normal, "3");
        let root = tree.create_node(SemanticType::InfixOp, SemanticRole::Addition, vec![two, three], vec![plus]);
        tree.set_root(root);
        tree
    }

    #[test]
    fn test_ids_follow_creation_order() {
        let tree = sum();
        let ids: Vec<usize> = tree.iter().map(|n| n.id().index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_create_node_sets_parents() {
        let tree = sum();
        let root = tree.root_node().unwrap();
        assert_eq!(root.parent(), None);
        for id in root.children().iter().chain(root.content()) {
            assert_eq!(tree.node(*id).unwrap().parent(), Some(root.id()));
        }
        assert!(root.children().iter().all(|c| !root.content().contains(c)));
    }

    #[test]
    fn test_post_order() {
        let tree = sum();
        let order: Vec<usize> = tree.post_order().iter().map(|id| id.index()).collect();
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_to_xml() {
        let mut tree = sum();
        let root = tree.root().unwrap();
        tree.node_mut(root).unwrap().annotation.add("note", "a<b");
        assert_eq!(
            tree.to_xml().unwrap(),
            "<infixop role=\"addition\" font=\"unknown\" id=\"3\" annotation-note=\"a&lt;b\">\
             <content><operator role=\"addition\" font=\"normal\" id=\"1\">+</operator></content>\
             <children><number role=\"integer\" font=\"normal\" id=\"0\">2</number>\
             <number role=\"integer\" font=\"normal\" id=\"2\">3</number></children></infixop>"
        );
    }

    #[test]
    fn test_unknown_ids() {
        let tree = sum();
        let err = tree.node(SemanticId(42)).unwrap_err();
        assert_eq!(*err.kind, SemanticErrorKind::UnknownSemanticNode { id: SemanticId(42) });
        assert!(SemanticTree::new().to_xml().is_err());
    }

    #[test]
    fn test_claimed_sources_follow_reassignment() {
        let mut math = MathTree::new();
        let row = math.add_element(None, MathNodeType::Mrow).unwrap();
        let token = math.add_token(Some(row), MathNodeType::Mn, "2").unwrap();

        let mut tree = sum();
        let two = tree.root_node().unwrap().children()[0];
        let three = tree.root_node().unwrap().children()[1];
        assert!(!tree.is_claimed(token));

        tree.set_source(two, token);
        tree.set_source(three, token);
        tree.set_source(two, token);
        assert!(tree.is_claimed(token));
        assert_eq!(tree.source(two), Some(token));

        tree.set_source(two, row);
        assert!(tree.is_claimed(token));
        tree.set_source(three, row);
        assert!(!tree.is_claimed(token));
        assert!(tree.is_claimed(row));
    }
}
