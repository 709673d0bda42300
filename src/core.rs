//! Pipeline entry points
//!
//! Each run is a pure function of its input: a fresh presentation arena is
//! built from the caller's element, analysed, and handed back annotated.

use crate::annotator::annotate;
use crate::builder::build;
use crate::context::SemanticContext;
use crate::mathml_tree::{MathElement, MathTree};
use crate::role_resolver::resolve;
use crate::semantic_tree::SemanticTree;
use crate::types::{SemanticError, Settings};

/// Builds and resolves the semantic tree of `math` without touching it.
#[tracing::instrument(skip_all)]
pub fn semantic_tree(
    ctx: &SemanticContext,
    math: &MathTree,
    settings: &Settings,
) -> Result<SemanticTree, SemanticError> {
    let mut tree = build(ctx, math, settings)?;
    resolve(&mut tree);
    Ok(tree)
}

/// Builds, resolves and annotates: `math` receives the semantic attributes
/// and any wrapper rows the annotation needs.
#[tracing::instrument(skip_all)]
pub fn enrich(
    ctx: &SemanticContext,
    math: &mut MathTree,
    settings: &Settings,
) -> Result<SemanticTree, SemanticError> {
    let mut tree = semantic_tree(ctx, math, settings)?;
    annotate(&mut tree, math, settings)?;
    Ok(tree)
}

/// Enriches `element` and returns the annotated markup.
#[tracing::instrument(skip_all)]
pub fn enrich_to_string(
    ctx: &SemanticContext,
    element: MathElement,
    settings: &Settings,
) -> Result<String, SemanticError> {
    let mut math = MathTree::from(element);
    enrich(ctx, &mut math, settings)?;
    math.to_markup()
}
