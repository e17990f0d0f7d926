//! Rendering a document tree to XML text.
//!
//! Output conventions:
//!
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//! - The document namespace, when present, is declared as `xmlns` on the
//!   top-level element only; descendants inherit it.
//! - Childless, textless elements are written as empty-element tags.
//! - Text and attribute values are escaped by quick-xml; no pretty-printing.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::node::{Document, Element};

/// Errors that can occur while writing a document to text.
///
/// Uses `io::Result` internally because `quick_xml::Writer` closures require
/// `io::Result<()>`.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),
}

/// Render a document as XML text with declaration and namespace.
///
/// # Errors
///
/// Returns [`WriteError`] if writing fails.
pub fn to_xml(document: &Document) -> Result<Vec<u8>, WriteError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, document.root(), document.namespace())?;

    Ok(buf)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
    namespace: Option<&str>,
) -> io::Result<()> {
    let mut builder = writer.create_element(element.name());

    if let Some(ns) = namespace {
        builder = builder.with_attribute(("xmlns", ns));
    }
    for attr in element.attributes() {
        builder = builder.with_attribute((attr.name(), attr.value()));
    }

    if let Some(text) = element.text() {
        builder.write_text_content(BytesText::new(text))?;
    } else if element.children().is_empty() {
        builder.write_empty()?;
    } else {
        builder.write_inner_content(|w| {
            for child in element.children() {
                write_element(w, child, None)?;
            }
            Ok(())
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(document: &Document) -> String {
        let bytes = to_xml(document).expect("write failed");
        String::from_utf8(bytes).expect("valid UTF-8")
    }

    #[test]
    fn test_should_write_declaration_and_empty_root() {
        let doc = Document::new(Element::new("User"));

        assert_eq!(
            render(&doc),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><User/>"
        );
    }

    #[test]
    fn test_should_declare_namespace_on_root_only() {
        let doc = Document::new(
            Element::new("User").with_child(Element::new("Name").with_text("ada")),
        )
        .with_namespace("urn:example");

        let xml = render(&doc);
        assert!(xml.contains("<User xmlns=\"urn:example\">"));
        assert!(xml.contains("<Name>ada</Name>"));
        assert_eq!(xml.matches("xmlns").count(), 1);
    }

    #[test]
    fn test_should_write_attributes_before_content() {
        let doc = Document::new(
            Element::new("User")
                .with_attribute("Id", "7")
                .with_child(Element::new("Name").with_text("ada")),
        );

        assert_eq!(
            render(&doc),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><User Id=\"7\"><Name>ada</Name></User>"
        );
    }

    #[test]
    fn test_should_escape_text_and_attribute_values() {
        let doc = Document::new(
            Element::new("Note")
                .with_attribute("Tag", "a&b")
                .with_child(Element::new("Body").with_text("1 < 2 & 3 > 2")),
        );

        let xml = render(&doc);
        assert!(xml.contains("Tag=\"a&amp;b\""));
        assert!(xml.contains("<Body>1 &lt; 2 &amp; 3 &gt; 2</Body>"));
    }

    #[test]
    fn test_should_write_nested_elements_in_order() {
        let doc = Document::new(
            Element::new("User")
                .with_child(Element::new("Name").with_text("ada"))
                .with_child(
                    Element::new("Address").with_child(Element::new("City").with_text("London")),
                ),
        );

        assert_eq!(
            render(&doc),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <User><Name>ada</Name><Address><City>London</City></Address></User>"
        );
    }
}
