//! Row grammar: fences, cases, punctuation and relations
//!
//! A row is processed in a fixed order. Fences are paired first, so that
//! everything between a matched pair becomes one FENCED operand. A brace
//! left open before a table turns the two into a case distinction.
//! Punctuation then splits the row into a PUNCTUATED sequence and relations
//! split each segment into a relation chain. Whatever remains between
//! relations is handed to the operator grammar.

use core::mem;

use super::{FENCE_ANNOTATION, TreeBuilder};
use crate::delimiter::{FenceItem, Matched, match_fences};
use crate::mathml_tree::{MathNode, MathNodeId};
use crate::semantic_tree::SemanticId;
use crate::symbols::Classification;
use crate::types::{SemanticError, SemanticRole, SemanticType};

/// A row constituent before fence matching. Fence glyphs stay pending until
/// the matcher decides whether they pair, since that decides their type.
#[derive(Debug)]
pub(super) enum RowItem {
    Node(SemanticId),
    Fence {
        source: MathNodeId,
        classification: Classification,
        glyph: String,
    },
}

impl TreeBuilder<'_> {
    /// Rows and row-like elements. The node covering the whole row is
    /// associated with the element unless it already belongs to a child.
    pub(super) fn row_element(
        &mut self,
        id: MathNodeId,
        node: &MathNode,
    ) -> Result<SemanticId, SemanticError> {
        let built = self.row(node.children())?;
        let empty = self.tree.at(built).is_empty_node();
        if !empty && self.tree.source(built).is_none() {
            self.tree.set_source(built, id);
        }
        Ok(built)
    }

    /// Builds the children of an element as one row.
    pub(super) fn row(&mut self, children: &[MathNodeId]) -> Result<SemanticId, SemanticError> {
        let math = self.math;
        let mut items = Vec::with_capacity(children.len());
        for child in children {
            let node = math.node(*child)?;
            if let Some(classification) = self.fence_classification(node) {
                items.push(RowItem::Fence {
                    source: *child,
                    classification,
                    glyph: node.text().trim().to_owned(),
                });
                continue;
            }
            let built = self.element(*child)?;
            if !self.tree.at(built).is_empty_node() {
                items.push(RowItem::Node(built));
            }
        }

        let nodes = self.pair_fences(items);
        Ok(self.row_nodes(nodes))
    }

    fn pair_fences(&mut self, items: Vec<RowItem>) -> Vec<SemanticId> {
        let fence_items = items.into_iter().map(|item| {
            let fence = match &item {
                RowItem::Fence {
                    glyph,
                    classification,
                    ..
                } => Some((glyph.clone(), classification.role)),
                RowItem::Node(_) => None,
            };
            match fence {
                Some((glyph, role)) => FenceItem::Fence {
                    glyph,
                    role,
                    payload: item,
                },
                None => FenceItem::Other(item),
            }
        });
        let matched = match_fences(fence_items, self.settings.fence_retry_depth);
        self.matched_nodes(matched)
    }

    fn matched_nodes(&mut self, matched: Vec<Matched<RowItem>>) -> Vec<SemanticId> {
        matched
            .into_iter()
            .map(|item| match item {
                Matched::Other(item) | Matched::Unmatched(item) => self.unpaired(item),
                Matched::Pair {
                    open,
                    interior,
                    close,
                } => self.fenced(open, interior, close),
            })
            .collect()
    }

    fn unpaired(&mut self, item: RowItem) -> SemanticId {
        match item {
            RowItem::Node(id) => id,
            RowItem::Fence {
                source,
                classification,
                glyph,
            } => self.unmatched_fence(source, classification, &glyph),
        }
    }

    fn paired(&mut self, item: RowItem) -> SemanticId {
        match item {
            RowItem::Node(id) => id,
            RowItem::Fence {
                source,
                classification,
                glyph,
            } => self.matched_fence(source, classification, &glyph),
        }
    }

    /// FENCED node: the fences as content, the interior as its own row.
    fn fenced(&mut self, open: RowItem, interior: Vec<Matched<RowItem>>, close: RowItem) -> SemanticId {
        let open = self.paired(open);
        let interior = self.matched_nodes(interior);
        let inner = self.row_nodes(interior);
        let close = self.paired(close);
        self.tree.create_node(
            SemanticType::Fenced,
            SemanticRole::Unknown,
            vec![inner],
            vec![open, close],
        )
    }

    /// Groups an already fence-matched row.
    pub(super) fn row_nodes(&mut self, nodes: Vec<SemanticId>) -> SemanticId {
        match nodes.as_slice() {
            [] => return self.tree.create_empty(),
            [single] => return *single,
            _ => {}
        }
        let nodes = self.cases(nodes);
        if let [single] = nodes.as_slice() {
            return *single;
        }
        self.punctuated(nodes)
    }

    /// An unmatched opening brace directly before a table.
    fn cases(&mut self, nodes: Vec<SemanticId>) -> Vec<SemanticId> {
        let mut out: Vec<SemanticId> = Vec::with_capacity(nodes.len());
        for id in nodes {
            let is_table = self.tree.at(id).node_type() == SemanticType::Table;
            if is_table && out.last().is_some_and(|prev| self.is_open_brace(*prev)) {
                if let Some(brace) = out.pop() {
                    tracing::trace!("cases");
                    let cases = self.tree.create_node(
                        SemanticType::Cases,
                        SemanticRole::Unknown,
                        vec![id],
                        vec![brace],
                    );
                    out.push(cases);
                }
                continue;
            }
            out.push(id);
        }
        out
    }

    fn is_open_brace(&self, id: SemanticId) -> bool {
        let node = self.tree.at(id);
        node.node_type() == SemanticType::Punctuation
            && node.role == SemanticRole::Open
            && node.annotation.has(FENCE_ANNOTATION, "unmatched")
            && node.text == "{"
    }

    fn is_separator(&self, id: SemanticId) -> bool {
        let node = self.tree.at(id);
        node.node_type() == SemanticType::Punctuation && node.role != SemanticRole::Ellipsis
    }

    /// Splits at punctuation into a PUNCTUATED sequence. A single mark at
    /// either end makes an end or start punctuation instead.
    fn punctuated(&mut self, nodes: Vec<SemanticId>) -> SemanticId {
        let marks: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, id)| self.is_separator(**id))
            .map(|(idx, _)| idx)
            .collect();
        if marks.is_empty() {
            return self.relations(nodes);
        }

        let last = nodes.len() - 1;
        let role = match marks.as_slice() {
            [idx] if *idx == last => SemanticRole::EndPunct,
            [0] => SemanticRole::StartPunct,
            _ => SemanticRole::Sequence,
        };
        tracing::trace!(?role, marks = marks.len(), "punctuated");

        let mut children = Vec::with_capacity(marks.len() + 1);
        let mut content = Vec::with_capacity(marks.len());
        let mut segment = Vec::new();
        for (idx, id) in nodes.into_iter().enumerate() {
            if marks.contains(&idx) {
                let skip_empty = matches!(role, SemanticRole::EndPunct | SemanticRole::StartPunct);
                if !(skip_empty && segment.is_empty()) {
                    children.push(self.relations(mem::take(&mut segment)));
                }
                content.push(id);
            } else {
                segment.push(id);
            }
        }
        if role != SemanticRole::EndPunct {
            children.push(self.relations(segment));
        }

        self.tree
            .create_node(SemanticType::Punctuated, role, children, content)
    }

    /// Splits at relations into RELSEQ (one relation role) or MULTIREL
    /// (mixed roles).
    fn relations(&mut self, nodes: Vec<SemanticId>) -> SemanticId {
        let mut roles = nodes
            .iter()
            .filter(|id| self.tree.at(**id).node_type() == SemanticType::Relation)
            .map(|id| self.tree.at(*id).role);
        let Some(first) = roles.next() else {
            return self.operators(nodes);
        };
        let (node_type, role) = if roles.all(|role| role == first) {
            (SemanticType::RelSeq, first)
        } else {
            (SemanticType::MultiRel, SemanticRole::Unknown)
        };
        tracing::trace!(?node_type, "relations");

        let mut children = Vec::new();
        let mut content = Vec::new();
        let mut segment = Vec::new();
        for id in nodes {
            if self.tree.at(id).node_type() == SemanticType::Relation {
                children.push(self.operators(mem::take(&mut segment)));
                content.push(id);
            } else {
                segment.push(id);
            }
        }
        children.push(self.operators(segment));

        self.tree.create_node(node_type, role, children, content)
    }
}
