//! Role resolver
//!
//! A single post-order pass over a built tree that refines roles from
//! context the builder did not have when it created a node: signs become
//! negative or positive, multiplication glyphs behind a big operator become
//! dummies, and tables and fenced expressions learn their shape. Types are
//! never changed, and a resolved tree resolves to itself.

use crate::semantic_tree::{SemanticId, SemanticTree};
use crate::types::{SemanticRole, SemanticType};

/// Refines the roles of every node reachable from the root.
#[tracing::instrument(skip_all)]
pub fn resolve(tree: &mut SemanticTree) {
    for id in tree.post_order() {
        match tree.at(id).node_type() {
            SemanticType::PrefixOp => sign(tree, id),
            SemanticType::BigOp | SemanticType::Integral => dummies(tree, id),
            SemanticType::Table => table(tree, id),
            SemanticType::Fenced => fenced(tree, id),
            _ => {}
        }
    }
}

/// A subtraction or addition glyph used as a prefix operator is a sign.
fn sign(tree: &mut SemanticTree, id: SemanticId) {
    let Some(op) = tree.at(id).content().first().copied() else {
        return;
    };
    let op_node = tree.at(op);
    if op_node.node_type() != SemanticType::Operator {
        return;
    }
    let role = match op_node.role {
        SemanticRole::Subtraction | SemanticRole::Dash | SemanticRole::Negative => {
            SemanticRole::Negative
        }
        SemanticRole::Addition | SemanticRole::Positive => SemanticRole::Positive,
        _ => return,
    };
    tree.at_mut(op).role = role;
    tree.at_mut(id).role = role;
}

/// Multiplication glyphs written between a big operator and its body.
fn dummies(tree: &mut SemanticTree, id: SemanticId) {
    let content: Vec<SemanticId> = tree.at(id).content().iter().skip(1).copied().collect();
    for op in content {
        let node = tree.at_mut(op);
        if node.node_type() == SemanticType::Operator && node.role == SemanticRole::Multiplication {
            node.role = SemanticRole::Dummy;
        }
    }
}

/// Row sizes of a table: cells of a ROW, one for a LINE.
fn shape(tree: &SemanticTree, table: SemanticId) -> Vec<usize> {
    tree.at(table)
        .children()
        .iter()
        .map(|row| {
            let row = tree.at(*row);
            match row.node_type() {
                SemanticType::Row => row.children().len(),
                _ => 1,
            }
        })
        .collect()
}

fn matrix_role(tree: &SemanticTree, table: SemanticId, fenced: SemanticId) -> SemanticRole {
    let rows = shape(tree, table);
    let neutral = tree
        .at(fenced)
        .content()
        .first()
        .is_some_and(|open| tree.at(*open).role == SemanticRole::Neutral);
    match rows.as_slice() {
        [columns] if *columns > 1 => SemanticRole::RowVector,
        _ if rows.len() > 1 && rows.iter().all(|columns| *columns == 1) => SemanticRole::Vector,
        _ if rows.iter().all(|columns| *columns == rows.len()) => {
            if neutral {
                SemanticRole::Determinant
            } else {
                SemanticRole::SquareMatrix
            }
        }
        _ => SemanticRole::Matrix,
    }
}

/// Whether a cell's content opens with a relation, as in aligned equations.
fn starts_with_relation(tree: &SemanticTree, content: SemanticId) -> bool {
    let node = tree.at(content);
    match node.node_type() {
        SemanticType::Relation => true,
        SemanticType::RelSeq | SemanticType::MultiRel => node
            .children()
            .first()
            .is_some_and(|first| tree.at(*first).is_empty_node()),
        _ => false,
    }
}

fn cell_contents(tree: &SemanticTree, table: SemanticId) -> Vec<SemanticId> {
    let mut contents = Vec::new();
    for row in tree.at(table).children() {
        let row = tree.at(*row);
        match row.node_type() {
            SemanticType::Row => {
                for cell in row.children() {
                    contents.extend(tree.at(*cell).children().first().copied());
                }
            }
            _ => contents.extend(row.children().first().copied()),
        }
    }
    contents
}

fn table(tree: &mut SemanticTree, id: SemanticId) {
    let parent = tree.at(id).parent();
    let role = match parent.map(|parent| (parent, tree.at(parent).node_type())) {
        Some((fenced, SemanticType::Fenced)) => matrix_role(tree, id, fenced),
        Some((_, SemanticType::Cases)) => SemanticRole::Cases,
        _ => {
            let narrow = shape(tree, id).iter().all(|columns| *columns <= 1);
            if narrow
                || cell_contents(tree, id)
                    .into_iter()
                    .any(|content| starts_with_relation(tree, content))
            {
                SemanticRole::Multiline
            } else {
                SemanticRole::Table
            }
        }
    };
    tracing::trace!(table = %id, ?role, "table role");

    tree.at_mut(id).role = role;
    let rows = tree.at(id).children().to_vec();
    for row in rows {
        let row_node = tree.at_mut(row);
        if !matches!(row_node.node_type(), SemanticType::Row | SemanticType::Line) {
            continue;
        }
        row_node.role = role;
        if row_node.node_type() == SemanticType::Row {
            let cells = row_node.children().to_vec();
            for cell in cells {
                tree.at_mut(cell).role = role;
            }
        }
    }
}

fn fenced(tree: &mut SemanticTree, id: SemanticId) {
    let node = tree.at(id);
    let inner = node.children().first().map(|child| tree.at(*child));
    let role = match inner {
        Some(inner) if inner.node_type() == SemanticType::Table => inner.role,
        Some(inner)
            if inner.node_type() == SemanticType::Fraction
                && inner.role == SemanticRole::Binomial =>
        {
            SemanticRole::Binomial
        }
        _ => {
            let Some(open) = node.content().first() else {
                return;
            };
            match tree.at(*open).role {
                SemanticRole::Open | SemanticRole::Close => SemanticRole::LeftRight,
                SemanticRole::Top | SemanticRole::Bottom => SemanticRole::AboveBelow,
                SemanticRole::Neutral => SemanticRole::Neutral,
                SemanticRole::Metric => SemanticRole::Metric,
                _ => return,
            }
        }
    };
    tree.at_mut(id).role = role;
}
