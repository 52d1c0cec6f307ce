// crates/xml-tree/src/tree.rs
//! In-memory XML tree

/// A node inside an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Text, entity-escaped on output
    Text(String),
    /// Text wrapped in a CDATA section, written without escaping
    CData(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An XML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates `<name>text</name>`
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// Creates `<name><![CDATA[text]]></name>`
    pub fn cdata_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_cdata(text)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Sets an attribute, replacing the value if the key already exists
    ///
    /// New keys keep insertion order.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_cdata(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::CData(text.into()));
        self
    }

    /// Appends a child node
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the value of an attribute
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterates over direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Returns the first direct child element with the given name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// Concatenated text and CDATA content of direct children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) | Node::CData(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_existing() {
        let mut el = Element::new("rss").with_attr("version", "1.0");
        el.set_attr("xmlns:itunes", "x");
        el.set_attr("version", "2.0");

        assert_eq!(el.attr("version"), Some("2.0"));
        assert_eq!(el.attributes()[0].0, "version");
        assert_eq!(el.attributes()[1].0, "xmlns:itunes");
    }

    #[test]
    fn test_find_and_text() {
        let el = Element::new("item")
            .with_child(Element::cdata_element("title", "Ep 1"))
            .with_child(Element::text_element("guid", "urn:1"));

        assert_eq!(el.find("title").map(Element::text), Some("Ep 1".to_string()));
        assert_eq!(el.find("guid").map(Element::text), Some("urn:1".to_string()));
        assert!(el.find("link").is_none());
        assert_eq!(el.child_elements().count(), 2);
    }

    #[test]
    fn test_empty_element() {
        let el = Element::new("enclosure").with_attr("url", "x");
        assert!(el.is_empty());
        assert_eq!(el.text(), "");
    }
}
