//! Document, element, and attribute nodes.

/// A name/value pair attached to an element, distinct from child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Create an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A named XML node holding attributes, child elements, and optional text
/// content.
///
/// An element is expected to carry either text content or child elements,
/// not both; the writer gives text precedence if both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing any existing attribute of the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            self.attributes.push(Attribute { name, value });
        }
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Builder form of [`push_child`](Self::push_child).
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Builder form of [`set_text`](Self::set_text).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// All attributes, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// All child elements, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// The first child element with the given tag name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// The text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A complete XML document: one top-level element plus an optional namespace
/// shared by every element in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    namespace: Option<String>,
    root: Element,
}

impl Document {
    /// Create a document with unqualified element names.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            namespace: None,
            root,
        }
    }

    /// Qualify every element in the document with a namespace URI.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// The document namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The top-level element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_replace_attribute_with_same_name() {
        let mut el = Element::new("User");
        el.set_attribute("Id", "1");
        el.set_attribute("Id", "2");

        assert_eq!(el.attributes().len(), 1);
        assert_eq!(el.attribute("Id"), Some("2"));
    }

    #[test]
    fn test_should_keep_children_in_insertion_order() {
        let el = Element::new("User")
            .with_child(Element::new("First"))
            .with_child(Element::new("Second"))
            .with_child(Element::new("Third"));

        let names: Vec<_> = el.children().iter().map(Element::name).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_should_find_child_by_name() {
        let el = Element::new("User").with_child(Element::new("Address").with_text("x"));

        assert!(el.child("Address").is_some());
        assert!(el.child("Missing").is_none());
    }

    #[test]
    fn test_should_carry_namespace_on_document() {
        let doc = Document::new(Element::new("User")).with_namespace("urn:example");

        assert_eq!(doc.namespace(), Some("urn:example"));
        assert_eq!(doc.root().name(), "User");
    }
}
