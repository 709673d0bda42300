//! Presentation tree definitions
//!
//! The input to the semantic pipeline is a MathML presentation tree. Callers
//! describe it with the owned, recursive [`MathElement`] and convert it into
//! a [`MathTree`]: an arena of [`MathNode`]s addressed by [`MathNodeId`]. The
//! arena form is what the builder reads and what the annotator writes its
//! attributes into. It is also where wrapper elements get spliced in without
//! disturbing the identity of existing nodes.

use core::fmt::{self, Debug};

use bon::bon;
use strum::{AsRefStr, Display, EnumString};

use crate::namespace::KeyMap;
use crate::types::{SemanticError, SemanticErrorKind};
use crate::utils::escape_into;

/// MathML element kinds understood by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MathNodeType {
    /// `<math>` element
    Math,
    /// `<semantics>` element
    Semantics,
    /// `<annotation>` element
    Annotation,
    /// `<annotation-xml>` element
    #[strum(serialize = "annotation-xml")]
    AnnotationXml,
    /// `<mrow>` element
    Mrow,
    /// `<mi>` element
    Mi,
    /// `<mn>` element
    Mn,
    /// `<mo>` element
    Mo,
    /// `<mtext>` element
    Mtext,
    /// `<ms>` element
    Ms,
    /// `<mspace>` element
    Mspace,
    /// `<mglyph>` element
    Mglyph,
    /// `<mfrac>` element
    Mfrac,
    /// `<msqrt>` element
    Msqrt,
    /// `<mroot>` element
    Mroot,
    /// `<msub>` element
    Msub,
    /// `<msup>` element
    Msup,
    /// `<msubsup>` element
    Msubsup,
    /// `<munder>` element
    Munder,
    /// `<mover>` element
    Mover,
    /// `<munderover>` element
    Munderover,
    /// `<mmultiscripts>` element
    Mmultiscripts,
    /// `<mprescripts>` element
    Mprescripts,
    /// `<none>` element
    #[strum(serialize = "none")]
    NoneElement,
    /// `<mtable>` element
    Mtable,
    /// `<mtr>` element
    Mtr,
    /// `<mlabeledtr>` element
    Mlabeledtr,
    /// `<mtd>` element
    Mtd,
    /// `<menclose>` element
    Menclose,
    /// `<mstyle>` element
    Mstyle,
    /// `<mpadded>` element
    Mpadded,
    /// `<mphantom>` element
    Mphantom,
    /// `<merror>` element
    Merror,
    /// `<maction>` element
    Maction,
}

impl MathNodeType {
    /// Token elements carry text instead of children.
    #[must_use]
    pub const fn is_token(self) -> bool {
        matches!(
            self,
            Self::Mi | Self::Mn | Self::Mo | Self::Mtext | Self::Ms | Self::Mspace | Self::Mglyph
        )
    }

    /// Elements whose children form a free-length row, so a subrange of them
    /// may be wrapped in an `mrow` without changing the rendering.
    #[must_use]
    pub const fn is_row_like(self) -> bool {
        matches!(
            self,
            Self::Math
                | Self::Mrow
                | Self::Mstyle
                | Self::Mpadded
                | Self::Mphantom
                | Self::Merror
                | Self::Msqrt
                | Self::Mtd
                | Self::Menclose
                | Self::Maction
        )
    }
}

/// Owned, recursive description of a presentation element
///
/// This is the form callers build input in. Convert it into a [`MathTree`]
/// with [`MathTree::from`].
///
/// # Examples
///
/// ```rust
/// use math_semantics::mathml_tree::{MathElement, MathNodeType, MathTree};
///
/// let row = MathElement::with_children(
///     MathNodeType::Mrow,
///     vec![
///         MathElement::token(MathNodeType::Mn, "2"),
///         MathElement::token(MathNodeType::Mo, "+"),
///         MathElement::token(MathNodeType::Mn, "3"),
///     ],
/// );
/// let tree = MathTree::from(row);
/// assert_eq!(
///     tree.to_markup().unwrap(),
///     "<mrow><mn>2</mn><mo>+</mo><mn>3</mn></mrow>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathElement {
    /// The element kind
    pub node_type: MathNodeType,
    /// Attributes of the element
    pub attributes: KeyMap<String, String>,
    /// Child elements
    pub children: Vec<MathElement>,
    /// Text content of token elements
    pub text: Option<String>,
}

#[bon]
impl MathElement {
    /// Create a new MathElement with the given type
    #[builder]
    pub fn new(
        /// Element kind
        node_type: MathNodeType,
        /// Element attributes
        attributes: Option<KeyMap<String, String>>,
        /// Child elements
        children: Option<Vec<MathElement>>,
        /// Token text
        text: Option<String>,
    ) -> Self {
        Self {
            node_type,
            attributes: attributes.unwrap_or_default(),
            children: children.unwrap_or_default(),
            text,
        }
    }

    /// Create a token element holding `text`
    #[must_use]
    pub fn token<S>(node_type: MathNodeType, text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            node_type,
            attributes: KeyMap::default(),
            children: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Create a new MathElement with the given type and children
    #[must_use]
    pub fn with_children(node_type: MathNodeType, children: Vec<Self>) -> Self {
        Self {
            node_type,
            attributes: KeyMap::default(),
            children,
            text: None,
        }
    }

    /// Set an attribute, returning the element
    #[must_use]
    pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Handle of a node inside a [`MathTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MathNodeId(usize);

impl MathNodeId {
    /// Position of the node in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MathNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of a [`MathTree`]
#[derive(Clone, PartialEq, Eq)]
pub struct MathNode {
    /// The element kind
    pub node_type: MathNodeType,
    /// Attributes of the element
    pub attributes: KeyMap<String, String>,
    /// Text content of token elements
    pub text: Option<String>,
    children: Vec<MathNodeId>,
    parent: Option<MathNodeId>,
}

impl Debug for MathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MathNode")
            .field("node_type", &self.node_type)
            .field("attributes", &self.attributes)
            .field("text", &self.text)
            .field(
                "children",
                &format_args!("{} children", self.children.len()),
            )
            .finish()
    }
}

impl MathNode {
    /// Ordered children
    #[must_use]
    pub fn children(&self) -> &[MathNodeId] {
        &self.children
    }

    /// The containing element, `None` for the root and detached nodes
    #[must_use]
    pub const fn parent(&self) -> Option<MathNodeId> {
        self.parent
    }

    /// Value of attribute `name`
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the whitespace-separated `class` attribute contains `token`
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|class| class == token))
    }

    /// Text content, empty for non-token elements
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Arena holding a presentation tree
///
/// Nodes are never removed, so a [`MathNodeId`] stays valid for the lifetime
/// of the tree even when wrappers are spliced above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MathTree {
    nodes: Vec<MathNode>,
    root: Option<MathNodeId>,
}

impl From<MathElement> for MathTree {
    fn from(element: MathElement) -> Self {
        let mut tree = Self::new();
        let root = tree.insert_element(element, None);
        tree.root = Some(root);
        tree
    }
}

impl MathTree {
    /// Creates an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_element(&mut self, element: MathElement, parent: Option<MathNodeId>) -> MathNodeId {
        let id = self.push(element.node_type, element.attributes, element.text, parent);
        for child in element.children {
            let child = self.insert_element(child, Some(id));
            self.nodes[id.0].children.push(child);
        }
        id
    }

    fn push(
        &mut self,
        node_type: MathNodeType,
        attributes: KeyMap<String, String>,
        text: Option<String>,
        parent: Option<MathNodeId>,
    ) -> MathNodeId {
        let id = MathNodeId(self.nodes.len());
        self.nodes.push(MathNode {
            node_type,
            attributes,
            text,
            children: Vec::new(),
            parent,
        });
        id
    }

    fn check(&self, id: MathNodeId) -> Result<(), SemanticError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(SemanticErrorKind::UnknownMathNode { id }.into())
        }
    }

    /// The root element
    #[must_use]
    pub const fn root(&self) -> Option<MathNodeId> {
        self.root
    }

    /// Number of nodes in the arena, including detached ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no node
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node
    pub fn node(&self, id: MathNodeId) -> Result<&MathNode, SemanticError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| SemanticErrorKind::UnknownMathNode { id }.into())
    }

    /// Appends a token element under `parent`, or as the root when the tree
    /// is empty and `parent` is `None`
    pub fn add_token<S>(
        &mut self,
        parent: Option<MathNodeId>,
        node_type: MathNodeType,
        text: S,
    ) -> Result<MathNodeId, SemanticError>
    where
        S: Into<String>,
    {
        let id = self.add_element(parent, node_type)?;
        self.nodes[id.0].text = Some(text.into());
        Ok(id)
    }

    /// Appends an empty element under `parent`, or as the root when the tree
    /// is empty and `parent` is `None`
    pub fn add_element(
        &mut self,
        parent: Option<MathNodeId>,
        node_type: MathNodeType,
    ) -> Result<MathNodeId, SemanticError> {
        if let Some(parent) = parent {
            self.check(parent)?;
        }
        let id = self.push(node_type, KeyMap::default(), None, parent);
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None if self.root.is_none() => self.root = Some(id),
            None => {}
        }
        Ok(id)
    }

    /// Creates a node that is not attached anywhere yet
    pub(crate) fn add_detached(&mut self, node_type: MathNodeType, text: Option<String>) -> MathNodeId {
        self.push(node_type, KeyMap::default(), text, None)
    }

    /// Sets an attribute on a node
    pub fn set_attribute<K, V>(&mut self, id: MathNodeId, key: K, value: V) -> Result<(), SemanticError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.check(id)?;
        self.nodes[id.0].attributes.insert(key.into(), value.into());
        Ok(())
    }

    /// Removes an attribute from a node, returning its value
    pub fn remove_attribute(&mut self, id: MathNodeId, key: &str) -> Result<Option<String>, SemanticError> {
        self.check(id)?;
        Ok(self.nodes[id.0].attributes.remove(key))
    }

    /// Ancestors of `id` from its parent up to the root
    pub fn ancestors(&self, id: MathNodeId) -> Result<Vec<MathNodeId>, SemanticError> {
        let mut path = Vec::new();
        let mut current = self.node(id)?.parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.node(parent)?.parent;
        }
        Ok(path)
    }

    /// Wraps `children[start..end]` of `parent` in a new `mrow` that takes
    /// their place
    pub fn wrap_range(
        &mut self,
        parent: MathNodeId,
        start: usize,
        end: usize,
    ) -> Result<MathNodeId, SemanticError> {
        self.check(parent)?;
        let len = self.nodes[parent.0].children.len();
        if start >= end || end > len {
            return Err(SemanticErrorKind::InvalidRange { id: parent, start, end }.into());
        }

        let wrapper = self.push(MathNodeType::Mrow, KeyMap::default(), None, Some(parent));
        let moved: Vec<MathNodeId> = self.nodes[parent.0]
            .children
            .splice(start..end, [wrapper])
            .collect();
        for child in &moved {
            self.nodes[child.0].parent = Some(wrapper);
        }
        self.nodes[wrapper.0].children = moved;
        Ok(wrapper)
    }

    /// Wraps a single node in a new `mrow` at the same position. Wrapping
    /// the root makes the wrapper the new root.
    pub fn wrap_node(&mut self, target: MathNodeId) -> Result<MathNodeId, SemanticError> {
        match self.node(target)?.parent {
            Some(parent) => {
                let index = self.child_index(parent, target)?;
                self.wrap_range(parent, index, index + 1)
            }
            None => {
                let wrapper = self.push(MathNodeType::Mrow, KeyMap::default(), None, None);
                self.nodes[wrapper.0].children.push(target);
                self.nodes[target.0].parent = Some(wrapper);
                if self.root == Some(target) {
                    self.root = Some(wrapper);
                }
                Ok(wrapper)
            }
        }
    }

    /// Inserts a detached node as child `index` of `parent`
    pub(crate) fn insert_child(
        &mut self,
        parent: MathNodeId,
        index: usize,
        child: MathNodeId,
    ) -> Result<(), SemanticError> {
        self.check(parent)?;
        self.check(child)?;
        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Position of `child` among the children of `parent`
    pub fn child_index(&self, parent: MathNodeId, child: MathNodeId) -> Result<usize, SemanticError> {
        self.node(parent)?
            .children
            .iter()
            .position(|c| *c == child)
            .ok_or_else(|| SemanticErrorKind::UnknownMathNode { id: child }.into())
    }

    /// Serializes the tree into `out`.
    ///
    /// Attributes are written in name order so the output is deterministic.
    pub fn write_markup<W: fmt::Write>(&self, out: &mut W) -> Result<(), SemanticError> {
        let root = self
            .root
            .ok_or(SemanticErrorKind::EmptyPresentationTree)?;
        self.write_node(out, root)
    }

    fn write_node<W: fmt::Write>(&self, out: &mut W, id: MathNodeId) -> Result<(), SemanticError> {
        let node = self.node(id)?;
        write!(out, "<{}", node.node_type.as_ref())?;

        let mut attributes: Vec<(&String, &String)> = node.attributes.iter().collect();
        attributes.sort_unstable();
        for (key, value) in attributes {
            write!(out, " {key}=\"")?;
            escape_into(out, value)?;
            out.write_char('"')?;
        }

        out.write_char('>')?;
        if let Some(text) = &node.text {
            escape_into(out, text)?;
        }
        for child in &node.children {
            self.write_node(out, *child)?;
        }
        write!(out, "</{}>", node.node_type.as_ref())?;
        Ok(())
    }

    /// Convenience helper that renders the tree into a [`String`].
    pub fn to_markup(&self) -> Result<String, SemanticError> {
        let mut buffer = String::new();
        self.write_markup(&mut buffer)?;
        Ok(buffer)
    }
}
