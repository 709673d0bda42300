//! Tree annotator
//!
//! Writes the semantic analysis back onto the presentation tree. Every
//! semantic node that has a presentation element receives its type, role,
//! font, id, parent, children and content ids as attributes, plus one
//! attribute per annotation namespace.
//!
//! Compound nodes created during analysis, an implicit multiplication for
//! instance, have no element of their own. The annotator gives them one by
//! wrapping the elements of their constituents in a new `mrow`, or by
//! adopting the smallest unclaimed row that holds exactly those elements.
//!
//! An equation-alignment wrapper (empheq) is handled separately: the table at
//! the bottom of the marked path is annotated first, then one `mrow` per
//! unassociated node on the path is spliced above it.

use crate::builder::EMPHEQ_ANNOTATION;
use crate::mathml_tree::{MathNodeId, MathNodeType, MathTree};
use crate::semantic_tree::{SemanticId, SemanticTree};
use crate::types::{SemanticError, SemanticErrorKind, SemanticType, Settings};
use crate::utils::join_display;

/// Attribute flagging elements the annotator inserted for invisible operators.
pub const ADDED_ATTRIBUTE: &str = "added";

/// One step of the empheq splice, bottom-up above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Splice {
    /// The node already has an element; later wrappers go around it.
    Anchor(MathNodeId),
    /// The node needs a wrapper around the current element.
    Wrap(SemanticId),
}

/// Annotates `math` with the semantic tree built from it.
#[tracing::instrument(skip_all)]
pub fn annotate(
    tree: &mut SemanticTree,
    math: &mut MathTree,
    settings: &Settings,
) -> Result<(), SemanticError> {
    let root = tree.root().ok_or(SemanticErrorKind::EmptySemanticTree)?;
    let mut annotator = Annotator {
        tree,
        math,
        settings,
    };
    annotator.visit(root)?;
    tracing::debug!(elements = annotator.math.len(), "presentation tree annotated");
    Ok(())
}

struct Annotator<'a> {
    tree: &'a mut SemanticTree,
    math: &'a mut MathTree,
    settings: &'a Settings,
}

impl Annotator<'_> {
    fn constituents(&self, id: SemanticId) -> Vec<SemanticId> {
        let node = self.tree.at(id);
        node.children().iter().chain(node.content()).copied().collect()
    }

    fn is_marked(&self, id: SemanticId) -> bool {
        self.tree.at(id).annotation.contains(EMPHEQ_ANNOTATION)
    }

    fn visit(&mut self, id: SemanticId) -> Result<(), SemanticError> {
        let parent_marked = self.tree.at(id).parent().is_some_and(|parent| self.is_marked(parent));
        if self.is_marked(id) && !parent_marked {
            return self.empheq(id);
        }
        for constituent in self.constituents(id) {
            self.visit(constituent)?;
        }
        self.finish(id)
    }

    fn finish(&mut self, id: SemanticId) -> Result<(), SemanticError> {
        if self.tree.source(id).is_none() && !self.tree.at(id).is_leaf() {
            self.ensure_external(id)?;
        }
        self.write_attributes(id)
    }

    /// The marked path from `top` down to a table, if it reaches one.
    fn marked_path(&self, top: SemanticId) -> Option<Vec<SemanticId>> {
        let mut path = vec![top];
        let mut current = top;
        while self.tree.at(current).node_type() != SemanticType::Table {
            current = self
                .tree
                .at(current)
                .children()
                .iter()
                .copied()
                .find(|child| self.is_marked(*child))?;
            path.push(current);
        }
        Some(path)
    }

    fn clear_markers(&mut self, id: SemanticId) {
        self.tree.at_mut(id).annotation.remove(EMPHEQ_ANNOTATION);
        for constituent in self.constituents(id) {
            if self.is_marked(constituent) {
                self.clear_markers(constituent);
            }
        }
    }

    fn empheq(&mut self, top: SemanticId) -> Result<(), SemanticError> {
        let path = self.marked_path(top);
        let Some((&table, above)) = path.as_deref().and_then(<[SemanticId]>::split_last) else {
            tracing::debug!(node = %top, "empheq marker without a table");
            self.clear_markers(top);
            return self.visit(top);
        };
        let Some(table_element) = self.tree.source(table) else {
            tracing::debug!(node = %table, "empheq table without an element");
            self.clear_markers(top);
            return self.visit(top);
        };

        let plan: Vec<Splice> = above
            .iter()
            .rev()
            .map(|id| match self.tree.source(*id) {
                Some(element) => Splice::Anchor(element),
                None => Splice::Wrap(*id),
            })
            .collect();

        self.tree.at_mut(table).annotation.remove(EMPHEQ_ANNOTATION);
        self.visit(table)?;

        let mut current = table_element;
        for step in &plan {
            match *step {
                Splice::Anchor(element) => current = element,
                Splice::Wrap(id) => {
                    current = self.math.wrap_node(current)?;
                    self.tree.set_source(id, current);
                }
            }
        }
        tracing::debug!(
            wrappers = plan.iter().filter(|step| matches!(step, Splice::Wrap(_))).count(),
            "empheq wrappers spliced"
        );

        let mut below = table;
        for id in above.iter().rev().copied() {
            self.tree.at_mut(id).annotation.remove(EMPHEQ_ANNOTATION);
            for constituent in self.constituents(id) {
                if constituent != below {
                    self.visit(constituent)?;
                }
            }
            self.write_attributes(id)?;
            below = id;
        }
        Ok(())
    }

    /// Lowest common ancestor of `elements` that is a strict ancestor of
    /// each of them.
    fn common_ancestor(&self, elements: &[MathNodeId]) -> Result<Option<MathNodeId>, SemanticError> {
        let Some((first, rest)) = elements.split_first() else {
            return Ok(None);
        };
        let mut chains = Vec::with_capacity(rest.len());
        for element in rest {
            chains.push(self.math.ancestors(*element)?);
        }
        Ok(self
            .math
            .ancestors(*first)?
            .into_iter()
            .find(|candidate| chains.iter().all(|chain| chain.contains(candidate))))
    }

    /// The ancestor of `element` (or itself) that is a child of `ancestor`.
    fn lift(&self, element: MathNodeId, ancestor: MathNodeId) -> Result<MathNodeId, SemanticError> {
        let mut current = element;
        while let Some(parent) = self.math.node(current)?.parent() {
            if parent == ancestor {
                break;
            }
            current = parent;
        }
        Ok(current)
    }

    /// Gives a compound node without an element one, wrapping or adopting
    /// the elements of its constituents. Leaves the node without an element
    /// when they do not share a row.
    fn ensure_external(&mut self, id: SemanticId) -> Result<(), SemanticError> {
        let mut elements = Vec::new();
        for constituent in self.constituents(id) {
            let node = self.tree.at(constituent);
            match self.tree.source(constituent) {
                Some(element) => elements.push(element),
                None if node.is_leaf() => {}
                None => {
                    tracing::debug!(node = %id, constituent = %constituent, "constituent without an element");
                    return Ok(());
                }
            }
        }
        let Some(ancestor) = self.common_ancestor(&elements)? else {
            return Ok(());
        };
        if !self.math.node(ancestor)?.node_type.is_row_like() {
            tracing::debug!(node = %id, element = %ancestor, "constituents do not share a row");
            return Ok(());
        }

        let mut indices = Vec::with_capacity(elements.len());
        for element in &elements {
            let lifted = self.lift(*element, ancestor)?;
            indices.push(self.math.child_index(ancestor, lifted)?);
        }
        let (Some(start), Some(end)) = (indices.iter().min(), indices.iter().max()) else {
            return Ok(());
        };
        let whole = *start == 0 && *end + 1 == self.math.node(ancestor)?.children().len();

        if whole && !self.tree.is_claimed(ancestor) {
            tracing::trace!(node = %id, element = %ancestor, "adopted row");
            self.tree.set_source(id, ancestor);
            return Ok(());
        }
        let wrapper = self.math.wrap_range(ancestor, *start, *end + 1)?;
        tracing::trace!(node = %id, element = %wrapper, "wrapped row");
        self.tree.set_source(id, wrapper);
        if self.settings.insert_invisible_operators {
            self.insert_invisible_operators(id, wrapper)?;
        }
        Ok(())
    }

    /// Materializes operators synthesized between the children of `id` as
    /// `mo` elements inside its new `wrapper`.
    fn insert_invisible_operators(
        &mut self,
        id: SemanticId,
        wrapper: MathNodeId,
    ) -> Result<(), SemanticError> {
        let node = self.tree.at(id);
        let children = node.children().to_vec();
        let content = node.content().to_vec();
        for (idx, op) in content.into_iter().enumerate() {
            let op_node = self.tree.at(op);
            if self.tree.source(op).is_some() || !op_node.is_leaf() || op_node.is_empty_node() {
                continue;
            }
            let Some(left) = children.get(idx).and_then(|child| self.tree.source(*child)) else {
                continue;
            };
            let lifted = self.lift(left, wrapper)?;
            let position = self.math.child_index(wrapper, lifted)? + 1;
            let element = self
                .math
                .add_detached(MathNodeType::Mo, Some(op_node.text.clone()));
            self.math.insert_child(wrapper, position, element)?;
            self.math
                .set_attribute(element, self.settings.attribute(ADDED_ATTRIBUTE), "true")?;
            self.tree.set_source(op, element);
            self.write_attributes(op)?;
        }
        Ok(())
    }

    fn write_attributes(&mut self, id: SemanticId) -> Result<(), SemanticError> {
        let Some(element) = self.tree.source(id) else {
            return Ok(());
        };
        let settings = self.settings;
        let node = self.tree.node(id)?;

        let mut attributes = vec![
            (settings.attribute("type"), node.node_type().to_string()),
            (settings.attribute("role"), node.role.to_string()),
            (settings.attribute("font"), node.font().to_string()),
            (settings.attribute("id"), node.id().to_string()),
        ];
        if let Some(parent) = node.parent() {
            attributes.push((settings.attribute("parent"), parent.to_string()));
        }
        if !node.children().is_empty() {
            attributes.push((settings.attribute("children"), join_display(node.children(), ",")));
        }
        if !node.content().is_empty() {
            attributes.push((settings.attribute("content"), join_display(node.content(), ",")));
        }
        for (namespace, values) in node.annotation.iter() {
            if namespace == EMPHEQ_ANNOTATION {
                continue;
            }
            attributes.push((
                settings.attribute(&format!("annotation-{namespace}")),
                values.join(";"),
            ));
        }

        for (key, value) in attributes {
            self.math.set_attribute(element, key, value)?;
        }
        Ok(())
    }
}
