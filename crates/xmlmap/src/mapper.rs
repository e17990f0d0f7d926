//! The recursive object-to-XML mapping algorithm.
//!
//! One depth-first pass over the object graph builds the document tree
//! bottom-up. The traversal is pure and synchronous: no state is shared
//! across calls, and the returned tree is never mutated afterwards.

use tracing::{debug, trace};
use xmlmap_tree::{Document, Element};

use crate::error::MapError;
use crate::options::SerializationOptions;
use crate::schema::{FieldOptions, Value, XmlSchema};

/// Map a value into a complete XML document.
///
/// The mapped root element is named after [`XmlSchema::type_name`]. When
/// `options.root_element` is set and non-empty, an outer element of that name
/// wraps the mapped root as its only child. The document namespace is taken
/// from `options.namespace` and applies to every element.
///
/// # Errors
///
/// Returns [`MapError::AttributeOnNested`] if any field in the graph is
/// flagged for attribute output but holds a sequence or nested object.
pub fn serialize_document(
    value: &dyn XmlSchema,
    options: &SerializationOptions,
) -> Result<Document, MapError> {
    debug!(type_name = value.type_name(), "serializing document");

    let mut root = Element::new(value.type_name());
    map_into(&mut root, value, options)?;

    let top = match options.root_element.as_deref() {
        Some(wrapper) if !wrapper.is_empty() => Element::new(wrapper).with_child(root),
        _ => root,
    };

    let mut document = Document::new(top);
    if let Some(ns) = &options.namespace {
        document = document.with_namespace(ns.clone());
    }
    Ok(document)
}

/// Map each declared field of `value` into `parent`, in declaration order.
///
/// Fields with an absent value are skipped entirely. Scalar and timestamp
/// fields become text elements, or attributes on `parent` when flagged.
/// Sequence fields become a wrapper element whose children are all named
/// after the first item's type name, even when the sequence is
/// heterogeneous. Nested objects recurse.
///
/// # Errors
///
/// Returns [`MapError::AttributeOnNested`] for an attribute flag on a
/// sequence or nested object field.
pub fn map_into(
    parent: &mut Element,
    value: &dyn XmlSchema,
    options: &SerializationOptions,
) -> Result<(), MapError> {
    for field in value.fields() {
        let Some(field_value) = field.value else {
            trace!(field = field.name, "skipping unset field");
            continue;
        };

        let name = effective_name(field.name, &field.options);

        match field_value {
            Value::Scalar(ref scalar) => {
                emit_scalar(parent, name, scalar.render(), field.options.attribute);
            }
            Value::DateTime(ref timestamp) => {
                let text = options.date_format.render(timestamp);
                emit_scalar(parent, name, text, field.options.attribute);
            }
            Value::Sequence(items) => {
                if field.options.attribute {
                    return Err(MapError::AttributeOnNested { field: field.name });
                }
                let mut wrapper = Element::new(name);
                // All items share the first item's tag name, even when the
                // sequence is heterogeneous.
                let mut item_tag: Option<String> = None;
                for item in items {
                    let tag = item_tag
                        .get_or_insert_with(|| item.type_name().to_string())
                        .clone();
                    let mut child = Element::new(tag);
                    map_into(&mut child, item, options)?;
                    wrapper.push_child(child);
                }
                parent.push_child(wrapper);
            }
            Value::Complex(nested) => {
                if field.options.attribute {
                    return Err(MapError::AttributeOnNested { field: field.name });
                }
                let mut element = Element::new(name);
                map_into(&mut element, nested, options)?;
                parent.push_child(element);
            }
        }
    }

    Ok(())
}

/// Resolve a field's output name: a non-empty rename replaces the declared
/// name, and the transform always applies last.
fn effective_name(declared: &'static str, options: &FieldOptions) -> String {
    let base = match options.rename {
        Some(renamed) if !renamed.is_empty() => renamed,
        _ => declared,
    };
    match options.transform {
        Some(transform) => transform(base),
        None => base.to_string(),
    }
}

/// Attach a rendered scalar as an attribute on `parent` or as a text child.
fn emit_scalar(parent: &mut Element, name: String, text: String, as_attribute: bool) {
    if as_attribute {
        parent.set_attribute(name, text);
    } else {
        parent.push_child(Element::new(name).with_text(text));
    }
}
