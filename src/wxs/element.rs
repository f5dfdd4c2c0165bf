//! Generic XML element representation and serialization.
//!
//! Every concept in the descriptor (directory, file, shortcut, registry
//! entry, product) is expressed as one [`XmlElement`]. The only operations
//! nodes support are setting attributes, appending children, and
//! serialization, so a single tagged-node type covers all of them.

use std::borrow::Cow;

/// A generic XML element: tag name, ordered attributes, ordered children.
///
/// Attribute insertion order is preserved so serialization is deterministic
/// across runs with the same input.
///
/// # Examples
///
/// ```
/// use wixgen::XmlElement;
///
/// let media = XmlElement::new("Media")
///     .attr("Id", "1")
///     .attr("Cabinet", "app.cab")
///     .attr("EmbedCab", "yes");
///
/// assert_eq!(media.attribute("Cabinet"), Some("app.cab"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: Option<String>,
}

impl XmlElement {
    /// Creates an element with the given tag name and no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Appends an attribute, preserving insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a single child element.
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a sequence of child elements.
    pub fn children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the text content, emitted before any child elements.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the direct child elements.
    pub fn child_elements(&self) -> &[XmlElement] {
        &self.children
    }

    /// Returns this element and all transitive children, depth-first.
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut nodes = Vec::new();
        self.collect_into(&mut nodes);
        nodes
    }

    fn collect_into<'a>(&'a self, nodes: &mut Vec<&'a XmlElement>) {
        nodes.push(self);
        for child in &self.children {
            child.collect_into(nodes);
        }
    }

    /// Serializes the element tree to an XML document string.
    ///
    /// `pretty` indents nested elements by two spaces; compact output emits
    /// the whole document on one line. No schema validation is performed,
    /// this is purely structural serialization.
    pub fn to_xml(&self, pretty: bool) -> String {
        let mut out = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        if pretty {
            out.push('\n');
        }
        self.write_into(&mut out, 0, pretty);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize, pretty: bool) {
        if pretty {
            for _ in 0..depth {
                out.push_str("  ");
            }
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>");
            if pretty {
                out.push('\n');
            }
            return;
        }

        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_text(text));
        }
        if !self.children.is_empty() {
            if pretty {
                out.push('\n');
            }
            for child in &self.children {
                child.write_into(out, depth + 1, pretty);
            }
            if pretty {
                for _ in 0..depth {
                    out.push_str("  ");
                }
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
        if pretty {
            out.push('\n');
        }
    }
}

/// Escapes XML attribute-value special characters.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Escapes XML text-content special characters.
fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_closing_element() {
        let el = XmlElement::new("Media").attr("Id", "1");
        assert_eq!(
            el.to_xml(false),
            r#"<?xml version="1.0" encoding="UTF-8"?><Media Id="1"/>"#
        );
    }

    #[test]
    fn attribute_order_is_insertion_order() {
        let el = XmlElement::new("Package")
            .attr("InstallerVersion", "200")
            .attr("Compressed", "yes");
        let xml = el.to_xml(false);
        let installer = xml.find("InstallerVersion").unwrap();
        let compressed = xml.find("Compressed").unwrap();
        assert!(installer < compressed);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let el = XmlElement::new("Property").attr("Value", r#"a&b<c>"d'"#);
        let xml = el.to_xml(false);
        assert!(xml.contains("a&amp;b&lt;c&gt;&quot;d&apos;"));
    }

    #[test]
    fn text_content_is_escaped() {
        let el = XmlElement::new("Note").text("a & b < c");
        let xml = el.to_xml(false);
        assert!(xml.contains("<Note>a &amp; b &lt; c</Note>"));
    }

    #[test]
    fn pretty_output_indents_children() {
        let el = XmlElement::new("Directory")
            .attr("Id", "INSTALLDIR")
            .child(XmlElement::new("Component").attr("Id", "a"));
        let xml = el.to_xml(true);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Directory Id=\"INSTALLDIR\">\n  <Component Id=\"a\"/>\n</Directory>\n"
        );
    }

    #[test]
    fn compact_output_has_no_newlines() {
        let el = XmlElement::new("A").child(XmlElement::new("B").child(XmlElement::new("C")));
        assert!(!el.to_xml(false).contains('\n'));
    }

    #[test]
    fn descendants_walks_depth_first() {
        let el = XmlElement::new("A")
            .child(XmlElement::new("B").child(XmlElement::new("C")))
            .child(XmlElement::new("D"));
        let names: Vec<_> = el.descendants().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }
}
