//! Configuration for tree building and annotation.

use bon::bon;

/// What to do with a binary operator that has no operand on one side.
///
/// Neither choice is a correctness guarantee; both are degradations of input
/// that is ambiguous to begin with. The node is tagged with a `dangling`
/// annotation in either case so the generator can hedge its phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingOperatorPolicy {
    /// Bind the operator to the operand it does have, as a prefix operator
    /// at the start of a run and as a postfix operator at the end.
    #[default]
    Prefix,
    /// Keep the operator as a bare operand leaf.
    Operand,
}

/// Resolved settings for one enrichment run.
///
/// # Cross-references
/// - See [`Settings::builder`] for ergonomic construction of settings.
/// - Related to [`DanglingOperatorPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How many stack entries below the top a mismatched closing fence may be
    /// retried against before both fences degrade to punctuation.
    ///
    /// `1` retries exactly once; `0` disables the retry.
    pub fence_retry_depth: usize,
    /// Treatment of binary operators lacking an operand.
    pub dangling_operators: DanglingOperatorPolicy,
    /// Prefix of every attribute written by the annotator, e.g. `semantic-`
    /// yields `semantic-type`, `semantic-role` and so on.
    pub attribute_prefix: String,
    /// Class token marking an equation-alignment wrapper (empheq) in the
    /// presentation tree.
    pub empheq_class: String,
    /// Whether synthesized invisible operators get their own `<mo>` element
    /// inside wrappers created by the annotator.
    pub insert_invisible_operators: bool,
}

#[bon]
impl Settings {
    /// Creates a new [`Settings`] instance from optional configuration values.
    ///
    /// # Default Values
    /// - `fence_retry_depth`: `1`
    /// - `dangling_operators`: [`DanglingOperatorPolicy::Prefix`]
    /// - `attribute_prefix`: `"semantic-"`
    /// - `empheq_class`: `"empheq"`
    /// - `insert_invisible_operators`: `false`
    #[must_use]
    #[builder]
    pub fn new(
        /// Fence rematch window.
        fence_retry_depth: Option<usize>,
        /// Dangling operator treatment.
        dangling_operators: Option<DanglingOperatorPolicy>,
        /// Attribute prefix.
        attribute_prefix: Option<String>,
        /// Empheq marker class.
        empheq_class: Option<String>,
        /// Insert `<mo>` elements for invisible operators.
        insert_invisible_operators: Option<bool>,
    ) -> Self {
        Self {
            fence_retry_depth: fence_retry_depth.unwrap_or(1),
            dangling_operators: dangling_operators.unwrap_or_default(),
            attribute_prefix: attribute_prefix.unwrap_or_else(|| "semantic-".to_owned()),
            empheq_class: empheq_class.unwrap_or_else(|| "empheq".to_owned()),
            insert_invisible_operators: insert_invisible_operators.unwrap_or(false),
        }
    }

    /// Full attribute name for `name` under the configured prefix.
    #[must_use]
    pub fn attribute(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.attribute_prefix.len() + name.len());
        out.push_str(&self.attribute_prefix);
        out.push_str(name);
        out
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
