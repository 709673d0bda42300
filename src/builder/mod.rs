//! Tree builder
//!
//! Turns a presentation tree into a semantic tree, bottom-up. Every element
//! kind has its own handler; rows of siblings go through the row grammar in
//! [`row`] and [`operators`], which pairs fences, splits at punctuation and
//! relations, and groups operators by precedence.
//!
//! Malformed input never fails the build. Unknown symbols, unmatched fences
//! and dangling operators degrade into ordinary nodes, tagged with an
//! annotation where the degradation is worth surfacing.

mod layout;
mod operators;
mod row;
mod scripts;
mod tables;
mod tokens;

use crate::context::SemanticContext;
use crate::mathml_tree::{MathNode, MathNodeId, MathNodeType, MathTree};
use crate::semantic_tree::{SemanticId, SemanticTree};
use crate::symbols::SymbolTable;
use crate::types::{SemanticError, SemanticErrorKind, SemanticRole, SemanticType, Settings};

/// Annotation namespace marking the path from an empheq wrapper to its table.
pub const EMPHEQ_ANNOTATION: &str = "emph";
/// Annotation namespace flagging operators that lack an operand.
pub const DANGLING_ANNOTATION: &str = "dangling";
/// Annotation namespace flagging fences that found no partner.
pub const FENCE_ANNOTATION: &str = "fence";

/// Builds the semantic tree of `math`.
///
/// Roles are as assigned during grouping; run
/// [`resolve`](crate::role_resolver::resolve) afterwards to refine them.
pub fn build(
    ctx: &SemanticContext,
    math: &MathTree,
    settings: &Settings,
) -> Result<SemanticTree, SemanticError> {
    TreeBuilder::new(ctx, math, settings).build()
}

/// Single-use builder state: the registry, the input and the arena under
/// construction.
pub(crate) struct TreeBuilder<'a> {
    symbols: &'a SymbolTable,
    settings: &'a Settings,
    math: &'a MathTree,
    tree: SemanticTree,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(ctx: &'a SemanticContext, math: &'a MathTree, settings: &'a Settings) -> Self {
        Self {
            symbols: &ctx.symbols,
            settings,
            math,
            tree: SemanticTree::new(),
        }
    }

    pub(crate) fn build(mut self) -> Result<SemanticTree, SemanticError> {
        let root = self
            .math
            .root()
            .ok_or(SemanticErrorKind::EmptyPresentationTree)?;
        let id = self.element(root)?;
        self.tree.set_root(id);
        tracing::debug!(nodes = self.tree.len(), "semantic tree built");
        Ok(self.tree)
    }

    /// Builds the node for one presentation element.
    fn element(&mut self, id: MathNodeId) -> Result<SemanticId, SemanticError> {
        let math = self.math;
        let node = math.node(id)?;
        let built = match node.node_type {
            MathNodeType::Mi => self.identifier(id, node),
            MathNodeType::Mn => self.number(id, node),
            MathNodeType::Mo => self.operator(id, node),
            MathNodeType::Mtext | MathNodeType::Ms => self.text(id, node),
            MathNodeType::Mglyph => self.glyph(id, node),
            MathNodeType::Math
            | MathNodeType::Mrow
            | MathNodeType::Mstyle
            | MathNodeType::Mpadded
            | MathNodeType::Merror
            | MathNodeType::Mtd => self.row_element(id, node)?,
            MathNodeType::Semantics | MathNodeType::Maction => match node.children().first() {
                Some(first) => self.element(*first)?,
                None => self.tree.create_empty(),
            },
            MathNodeType::Annotation
            | MathNodeType::AnnotationXml
            | MathNodeType::Mspace
            | MathNodeType::Mphantom
            | MathNodeType::NoneElement
            | MathNodeType::Mprescripts => self.tree.create_empty(),
            MathNodeType::Mfrac => self.fraction(id, node)?,
            MathNodeType::Msqrt => self.square_root(id, node)?,
            MathNodeType::Mroot => self.root(id, node)?,
            MathNodeType::Menclose => self.enclose(id, node)?,
            MathNodeType::Msub
            | MathNodeType::Msup
            | MathNodeType::Msubsup
            | MathNodeType::Munder
            | MathNodeType::Mover
            | MathNodeType::Munderover => self.scripts(id, node)?,
            MathNodeType::Mmultiscripts => self.multiscripts(id, node)?,
            MathNodeType::Mtable => self.table(id, node)?,
            MathNodeType::Mtr | MathNodeType::Mlabeledtr => self.table_row(id, node)?,
        };

        if node.has_class(&self.settings.empheq_class) {
            self.mark_empheq(built);
        }
        Ok(built)
    }

    /// Builds the children of `id`, or an empty node for each missing one.
    fn fixed_children(
        &mut self,
        node: &MathNode,
        count: usize,
    ) -> Result<Vec<SemanticId>, SemanticError> {
        (0..count)
            .map(|idx| match node.children().get(idx) {
                Some(child) => self.element(*child),
                None => Ok(self.tree.create_empty()),
            })
            .collect()
    }

    /// Builds a compound node and associates it with the element it came
    /// from.
    fn sourced_node(
        &mut self,
        source: MathNodeId,
        node_type: SemanticType,
        role: SemanticRole,
        children: Vec<SemanticId>,
        content: Vec<SemanticId>,
    ) -> SemanticId {
        let id = self.tree.create_node(node_type, role, children, content);
        self.tree.set_source(id, source);
        id
    }

    /// Marks the path from `top` down to its first table.
    fn mark_empheq(&mut self, top: SemanticId) {
        let path = self.path_to_table(top).unwrap_or_else(|| {
            tracing::debug!(node = %top, "empheq wrapper without a table");
            vec![top]
        });
        for id in path {
            self.tree
                .at_mut(id)
                .annotation
                .add(EMPHEQ_ANNOTATION, &self.settings.empheq_class);
        }
    }

    fn path_to_table(&self, id: SemanticId) -> Option<Vec<SemanticId>> {
        let node = self.tree.at(id);
        if node.node_type() == SemanticType::Table {
            return Some(vec![id]);
        }
        node.children().iter().find_map(|child| {
            self.path_to_table(*child).map(|mut path| {
                path.insert(0, id);
                path
            })
        })
    }
}
