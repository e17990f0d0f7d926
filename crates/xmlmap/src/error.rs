//! Mapping error types.

/// Errors produced while mapping an object graph to a document tree.
///
/// The mapper performs no validation of name configuration: renames that
/// collide simply produce duplicate sibling names, which downstream XML
/// consumers may reject. The only configuration it rejects outright is an
/// attribute flag on a value that has no text form.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A field is flagged for attribute output but holds a sequence or
    /// nested object, which cannot be rendered as attribute text.
    #[error("field `{field}` is flagged as an attribute but holds a nested value")]
    AttributeOnNested {
        /// Declared name of the offending field.
        field: &'static str,
    },
}
