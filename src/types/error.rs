//! Error handling for the semantic pipeline
//!
//! Malformed mathematics never produces an error: unknown symbols, unmatched
//! fences and dangling operators all degrade locally. What remains are
//! violations of the tree handles themselves and failures of the markup
//! writer.

use alloc::boxed::Box;
use core::fmt;

use thiserror::Error;

use crate::mathml_tree::MathNodeId;
use crate::semantic_tree::SemanticId;

/// Error returned by the pipeline entry points.
#[derive(Debug, Error)]
#[error("semantic enrichment error: {kind}")]
pub struct SemanticError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<SemanticErrorKind>,
}

impl SemanticError {
    /// Create a new SemanticError with the given kind
    pub fn new<T: Into<SemanticErrorKind>>(kind: T) -> Self {
        Self {
            kind: Box::new(kind.into()),
        }
    }
}

impl From<SemanticErrorKind> for SemanticError {
    fn from(kind: SemanticErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<fmt::Error> for SemanticError {
    fn from(_: fmt::Error) -> Self {
        Self::new(SemanticErrorKind::MarkupWriteFailure)
    }
}

/// Describes the specific reason for a [`SemanticError`].
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SemanticErrorKind {
    #[error("presentation tree has no root element")]
    EmptyPresentationTree,
    #[error("presentation node {id} does not belong to this tree")]
    UnknownMathNode { id: MathNodeId },
    #[error("children {start}..{end} of presentation node {id} cannot be wrapped")]
    InvalidRange {
        id: MathNodeId,
        start: usize,
        end: usize,
    },
    #[error("semantic node {id} does not belong to this tree")]
    UnknownSemanticNode { id: SemanticId },
    #[error("semantic tree has no root node")]
    EmptySemanticTree,
    #[error("Failed to write markup")]
    MarkupWriteFailure,
}
