// crates/xml-tree/src/writer.rs
//! Tree serialization through quick-xml

use crate::error::{XmlError, XmlResult};
use crate::tree::{Element, Node};
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serializes an [`Element`] tree to a string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlWriter {
    indent: usize,
}

impl XmlWriter {
    /// Creates a writer producing compact output
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-prints with `indent` spaces per level; `0` keeps output compact
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Serializes `root` and everything below it
    pub fn to_string(&self, root: &Element) -> XmlResult<String> {
        let bytes = if self.indent == 0 {
            let mut writer = Writer::new(Vec::new());
            write_element(&mut writer, root)?;
            writer.into_inner()
        } else {
            let mut writer = Writer::new_with_indent(Vec::new(), b' ', self.indent);
            write_element(&mut writer, root)?;
            writer.into_inner()
        };

        log::trace!("Serialized <{}> into {} bytes", root.name(), bytes.len());
        Ok(String::from_utf8(bytes)?)
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> XmlResult<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return write(writer, Event::Empty(start));
    }

    write(writer, Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(nested) => write_element(writer, nested)?,
            Node::Text(text) => write(writer, Event::Text(BytesText::new(text)))?,
            Node::CData(text) => {
                let content = split_cdata_terminator(text);
                write(writer, Event::CData(BytesCData::new(content.as_str())))?
            }
        }
    }
    write(writer, Event::End(BytesEnd::new(element.name())))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> XmlResult<()> {
    writer
        .write_event(event)
        .map_err(|e| XmlError::Write(e.to_string()))
}

/// Closes and reopens the section around every `]]>` so it cannot end the CDATA early
fn split_cdata_terminator(text: &str) -> String {
    text.replace("]]>", "]]]]><![CDATA[>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_output() {
        let root = Element::new("a").with_child(Element::text_element("b", "1"));
        let xml = XmlWriter::new().to_string(&root).expect("serialize");
        assert_eq!(xml, "<a><b>1</b></a>");
    }

    #[test]
    fn test_empty_element_self_closes() {
        let root = Element::new("enclosure").with_attr("url", "http://x/e.mp3");
        let xml = XmlWriter::new().to_string(&root).expect("serialize");
        assert_eq!(xml, r#"<enclosure url="http://x/e.mp3"/>"#);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let root = Element::new("t")
            .with_attr("q", "a\"b<c")
            .with_text("x < y & z");
        let xml = XmlWriter::new().to_string(&root).expect("serialize");
        assert!(xml.contains("x &lt; y &amp; z"));
        assert!(xml.contains("&quot;"));
        assert!(!xml.contains("a\"b"));
    }

    #[test]
    fn test_cdata_is_not_escaped() {
        let root = Element::cdata_element("d", "<p>Tom & Jerry</p>");
        let xml = XmlWriter::new().to_string(&root).expect("serialize");
        assert_eq!(xml, "<d><![CDATA[<p>Tom & Jerry</p>]]></d>");
    }

    #[test]
    fn test_cdata_terminator_is_split() {
        let root = Element::cdata_element("d", "a]]>b");
        let xml = XmlWriter::new().to_string(&root).expect("serialize");
        assert_eq!(xml, "<d><![CDATA[a]]]]><![CDATA[>b]]></d>");
    }

    #[test]
    fn test_indented_output_keeps_text_inline() {
        let root = Element::new("channel")
            .with_child(Element::cdata_element("title", "Pod"))
            .with_child(Element::text_element("language", "en"));
        let xml = XmlWriter::new()
            .with_indent(4)
            .to_string(&root)
            .expect("serialize");

        assert!(xml.contains("\n    <title><![CDATA[Pod]]></title>"));
        assert!(xml.contains("\n    <language>en</language>"));
        assert!(xml.ends_with("\n</channel>"));
    }
}
