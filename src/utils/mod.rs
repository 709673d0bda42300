//! Utility functions shared by the markup writers.

use core::fmt;

/// Escapes markup special characters in a string.
///
/// Used for text content and attribute values written by
/// [`MathTree::write_markup`](crate::mathml_tree::MathTree::write_markup) and
/// [`SemanticTree::to_xml`](crate::semantic_tree::SemanticTree::to_xml).
///
/// # Examples
/// ```
/// use math_semantics::utils::escape;
///
/// assert_eq!(escape("a & b"), "a &amp; b");
/// assert_eq!(escape("a < b"), "a &lt; b");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::new();
    let _ = escape_into(&mut escaped, text);
    escaped
}

/// Writes the escaped representation of `text` into the provided writer.
///
/// Streams directly into any `fmt::Write` implementor so the tree writers
/// never build intermediate strings per node.
#[inline]
pub fn escape_into<W: fmt::Write>(writer: &mut W, text: &str) -> fmt::Result {
    let mut last = 0;
    for (idx, ch) in text.char_indices() {
        let replacement = match ch {
            '&' => Some("&amp;"),
            '>' => Some("&gt;"),
            '<' => Some("&lt;"),
            '"' => Some("&quot;"),
            '\'' => Some("&#x27;"),
            _ => None,
        };

        if let Some(rep) = replacement {
            if last < idx {
                writer.write_str(&text[last..idx])?;
            }
            writer.write_str(rep)?;
            last = idx + ch.len_utf8();
        }
    }

    if last < text.len() {
        writer.write_str(&text[last..])
    } else {
        Ok(())
    }
}

/// Joins displayable items with a separator, e.g. node ids for the
/// `children`/`content` attributes.
#[must_use]
pub fn join_display<T: fmt::Display>(items: &[T], separator: &str) -> String {
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        let _ = fmt::Write::write_fmt(&mut out, format_args!("{item}"));
    }
    out
}
