//! Semantic enrichment of presentation MathML
//!
//! Turns a presentation tree into a semantic tree that says what the notation
//! means: which fences pair, which operators bind what, whether a table is a
//! matrix, a determinant or a system of cases. The analysis is then written
//! back onto the presentation tree as `semantic-*` attributes, ready for a
//! speech or braille generator.
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::non_ascii_literal)]
#![warn(clippy::pointer_format)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::absolute_paths)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::impl_trait_in_params)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::return_and_then)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::map_with_unused_argument_over_ranges)]
#![warn(clippy::missing_asserts_for_indexing)]
#![warn(clippy::separated_literal_suffix)]
#![warn(clippy::ref_patterns)]
// Not sure
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::single_call_fn)]

extern crate alloc;

pub mod annotator;
pub mod builder;
pub mod context;
pub mod core;
pub mod delimiter;
pub mod mathml_tree;
pub mod namespace;
pub mod role_resolver;
pub mod semantic_tree;
pub mod symbols;
pub mod types;
pub mod unicode;
pub mod utils;

/// Global context for semantic enrichment, holding the symbol registry
/// consulted while building semantic trees.
///
/// The registry classifies every glyph by type, role and font, and records
/// secondary facts such as which letters may act as a differential. One
/// context can be shared across threads and reused for any number of runs.
///
/// # Examples
///
/// ```rust
/// use math_semantics::*;
///
/// let ctx = SemanticContext::default();
/// // Context is now ready with the built-in symbol registry
/// assert!(!ctx.symbols.is_empty());
/// ```
pub use crate::context::SemanticContext;

/// Enriches a presentation element and returns the annotated markup.
///
/// This runs the complete pipeline: the element is copied into an arena, the
/// semantic tree is built from it, roles are refined, and every element that
/// corresponds to a semantic node receives `semantic-type`, `semantic-role`,
/// `semantic-font`, `semantic-id` and the structural id lists.
///
/// # Parameters
///
/// * `ctx` - The [`SemanticContext`] holding the symbol registry
/// * `element` - The root of the presentation tree
/// * `settings` - Configuration for fence matching, dangling operators and
///   attribute naming
///
/// # Examples
///
/// ```rust
/// use math_semantics::mathml_tree::MathNodeType;
/// use math_semantics::{MathElement, SemanticContext, Settings, enrich_to_string};
///
/// fn main() -> Result<(), math_semantics::SemanticError> {
///     let ctx = SemanticContext::default();
///     let element = MathElement::with_children(
///         MathNodeType::Mrow,
///         vec![
///             MathElement::token(MathNodeType::Mn, "2"),
///             MathElement::token(MathNodeType::Mo, "+"),
///             MathElement::token(MathNodeType::Mn, "3"),
///         ],
///     );
///
///     let markup = enrich_to_string(&ctx, element, &Settings::default())?;
///     assert!(markup.contains("semantic-role=\"addition\""));
///     Ok(())
/// }
/// ```
pub use crate::core::enrich_to_string;

/// Enriches a presentation tree in place and returns its semantic tree.
///
/// Wrapper rows created for nodes without an element of their own are
/// spliced into `math`; existing element ids stay valid.
pub use crate::core::enrich;

/// Builds and resolves the semantic tree of a presentation tree without
/// annotating it.
pub use crate::core::semantic_tree;

pub use crate::mathml_tree::{MathElement, MathTree};
pub use crate::semantic_tree::{SemanticNode, SemanticTree};
pub use crate::types::{
    DanglingOperatorPolicy, SemanticError, SemanticErrorKind, SemanticFont, SemanticRole,
    SemanticType, Settings,
};
