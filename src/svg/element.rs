//! Generic SVG element tree.
//!
//! Every node in a panel document is an [`Element`]: a tag, an ordered list of
//! string attributes and an ordered list of owned children. Specialized
//! elements (text paths, border rectangles, gradients) are built by the free
//! functions in [`super::shapes`] rather than by distinct types, so the tree
//! stays homogeneous and serializes through a single code path.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::SvgOptions;
use super::format::fmt_num;
use crate::errors::Result;

/// XML declaration emitted ahead of every serialized document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// A tagged node with attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element whose first attribute is `id`. An empty id is
    /// simply not stored.
    pub fn with_id(tag: impl Into<String>, id: &str) -> Self {
        let mut elem = Self::new(tag);
        elem.set_attr("id", id);
        elem
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Look up an attribute value by name.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Children in document (z-) order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Set an attribute. Empty values are ignored, so optional attributes can
    /// be passed through unconditionally. Setting an existing key replaces
    /// its value without changing its position.
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if value.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((key.to_string(), value)),
        }
        self
    }

    /// Set a numeric attribute, formatted with six significant digits.
    pub fn set_attr_num(&mut self, key: &str, value: f64) -> &mut Self {
        self.set_attr(key, fmt_num(value))
    }

    /// Append a child after all existing children.
    pub fn append(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Builder form of [`Element::set_attr_num`].
    pub fn attr_num(mut self, key: &str, value: f64) -> Self {
        self.set_attr_num(key, value);
        self
    }

    /// Builder form of [`Element::append`].
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Serialize this element as the root of a standalone XML document.
    ///
    /// The output is the XML declaration, the pretty-printed tree and a
    /// trailing newline. It depends only on the tree, so repeated calls
    /// produce identical text.
    pub fn to_svg_string(&self, options: &SvgOptions) -> Result<String> {
        let mut writer =
            Writer::new_with_indent(Vec::new(), options.indent_char, options.indent_size);
        self.write_to(&mut writer)?;
        let body = writer.into_inner();

        let mut out = String::with_capacity(XML_DECLARATION.len() + body.len() + 2);
        out.push_str(XML_DECLARATION);
        out.push('\n');
        out.push_str(&String::from_utf8_lossy(&body));
        out.push('\n');
        Ok(out)
    }

    fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.tag.as_str());
        for (key, value) in &self.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            for child in &self.children {
                child.write_to(writer)?;
            }
            writer.write_event(Event::End(BytesEnd::new(self.tag.as_str())))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr_names(elem: &Element) -> Vec<&str> {
        elem.attrs().map(|(k, _)| k).collect()
    }

    #[test]
    fn empty_values_are_not_stored() {
        let mut elem = Element::with_id("path", "");
        elem.set_attr("style", "").set_attr("d", "M1 2");
        assert_eq!(attr_names(&elem), ["d"]);
        assert_eq!(elem.id(), None);
    }

    #[test]
    fn empty_value_does_not_clear_existing_attribute() {
        let elem = Element::new("rect").attr("fill", "red").attr("fill", "");
        assert_eq!(elem.get_attr("fill"), Some("red"));
    }

    #[test]
    fn resetting_a_key_keeps_its_position() {
        let elem = Element::new("rect")
            .attr("x", "0")
            .attr("y", "0")
            .attr("x", "5");
        assert_eq!(
            elem.attrs().collect::<Vec<_>>(),
            [("x", "5"), ("y", "0")]
        );
    }

    #[test]
    fn numeric_attributes_use_six_significant_digits() {
        let elem = Element::new("rect")
            .attr_num("width", 5.08 * 3.0)
            .attr_num("height", 128.5)
            .attr_num("x", 1.0 / 3.0);
        assert_eq!(elem.get_attr("width"), Some("15.24"));
        assert_eq!(elem.get_attr("height"), Some("128.5"));
        assert_eq!(elem.get_attr("x"), Some("0.333333"));
    }

    #[test]
    fn append_chains_and_preserves_order() {
        let mut root = Element::new("g");
        root.append(Element::with_id("path", "a"))
            .append(Element::with_id("path", "b"))
            .append(Element::with_id("path", "c"));
        let ids: Vec<_> = root.children().iter().filter_map(Element::id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn serializes_with_declaration_and_indentation() {
        let root = Element::new("svg")
            .attr("a", "1")
            .child(Element::new("path").attr("d", "M1 2"))
            .child(Element::with_id("g", "x").child(Element::new("rect")));
        let text = root.to_svg_string(&SvgOptions::default()).unwrap();
        assert_eq!(
            text,
            concat!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
                "<svg a=\"1\">\n",
                "    <path d=\"M1 2\"/>\n",
                "    <g id=\"x\">\n",
                "        <rect/>\n",
                "    </g>\n",
                "</svg>\n",
            )
        );
    }

    #[test]
    fn indentation_follows_options() {
        let root = Element::new("svg").child(Element::new("g").child(Element::new("path")));
        let options = SvgOptions {
            indent_char: b'\t',
            indent_size: 1,
        };
        let text = root.to_svg_string(&options).unwrap();
        assert!(text.contains("\n\t<g>\n\t\t<path/>\n\t</g>\n"), "{text}");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let root = Element::new("text").attr("label", r#"a<b & "c""#);
        let text = root.to_svg_string(&SvgOptions::default()).unwrap();
        assert!(
            text.contains(r#"label="a&lt;b &amp; &quot;c&quot;""#),
            "{text}"
        );
    }

    #[test]
    fn serialization_is_repeatable() {
        let root = Element::new("svg").child(Element::new("path").attr("d", "M0 0Z"));
        let options = SvgOptions::default();
        assert_eq!(
            root.to_svg_string(&options).unwrap(),
            root.to_svg_string(&options).unwrap()
        );
    }
}
