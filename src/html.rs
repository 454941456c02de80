//! Owned HTML node tree, built from html5ever's `RcDom`.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::RenderError;

// A bare fragment makes html5ever complain about the missing doctype.
const DOCUMENT_PREFIX: &str = "<!DOCTYPE html><html><head></head><body>";
const DOCUMENT_SUFFIX: &str = "</body></html>";

/// Parsed HTML: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Always lower-case.
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl HtmlNode {
    pub fn text(text: impl Into<String>) -> Self {
        HtmlNode::Text(text.into())
    }

    pub fn element(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(Element::new(tag, children))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            HtmlNode::Element(element) => Some(element),
            HtmlNode::Text(_) => None,
        }
    }

    /// Text of this node and all its descendants, in document order.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl Element {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            children,
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Descendant elements whose tag is one of `tags`, in document order.
    /// The element itself is not included.
    pub fn descendants<'a>(&'a self, tags: &[&str]) -> Vec<&'a Element> {
        let mut found = Vec::new();
        let mut stack: Vec<&Element> = self.child_elements().rev().collect();
        while let Some(element) = stack.pop() {
            if tags.contains(&element.tag.as_str()) {
                found.push(element);
            }
            stack.extend(element.child_elements().rev());
        }
        found
    }

    fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(HtmlNode::as_element)
    }
}

/// Parse an HTML fragment into the nodes of its `<body>`.
///
/// With `strict`, any parse error html5ever reports rejects the whole input.
pub fn parse_fragment(
    html: &str,
    max_depth: usize,
    strict: bool,
) -> Result<Vec<HtmlNode>, RenderError> {
    let source = format!("{DOCUMENT_PREFIX}{html}{DOCUMENT_SUFFIX}");
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut source.as_bytes())?;

    if strict {
        if let Some(error) = dom.errors.borrow().first() {
            return Err(RenderError::Malformed(error.to_string()));
        }
    }

    let Some(body) = find_body(&dom.document) else {
        return Ok(Vec::new());
    };

    let mut nodes = Vec::new();
    for child in body.children.borrow().iter() {
        if let Some(node) = convert(child, 1, max_depth)? {
            nodes.push(node);
        }
    }
    tracing::debug!("Parsed {} top-level HTML nodes", nodes.len());
    Ok(nodes)
}

fn find_body(handle: &Handle) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            match &*name.local {
                "body" => return Some(child.clone()),
                "html" => {
                    if let Some(body) = find_body(child) {
                        return Some(body);
                    }
                }
                _ => {}
            }
        }
    }
    None
}

fn convert(handle: &Handle, depth: usize, max_depth: usize) -> Result<Option<HtmlNode>, RenderError> {
    if depth > max_depth {
        return Err(RenderError::NestingTooDeep { max_depth });
    }

    match &handle.data {
        NodeData::Text { contents } => Ok(Some(HtmlNode::Text(contents.borrow().to_string()))),
        NodeData::Element { name, attrs, .. } => {
            let mut element = Element::new(&name.local, Vec::new());
            for attr in attrs.borrow().iter() {
                element
                    .attributes
                    .push((attr.name.local.to_string(), attr.value.to_string()));
            }
            for child in handle.children.borrow().iter() {
                if let Some(node) = convert(child, depth + 1, max_depth)? {
                    element.children.push(node);
                }
            }
            Ok(Some(HtmlNode::Element(element)))
        }
        // Comments, doctypes and processing instructions carry nothing visible
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Vec<HtmlNode> {
        parse_fragment(html, 128, true).unwrap()
    }

    #[test]
    fn parses_body_children() {
        let nodes = parse("<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>\n");
        let tags: Vec<_> = nodes
            .iter()
            .map(|node| match node {
                HtmlNode::Element(element) => element.tag.clone(),
                HtmlNode::Text(text) => format!("#text {:?}", text),
            })
            .collect();
        assert_eq!(tags, ["h1", "#text \"\\n\"", "p", "#text \"\\n\""]);
        assert_eq!(nodes[2].inner_text(), "Some bold text.");
    }

    #[test]
    fn tags_are_lower_case() {
        let nodes = parse("<H2>Loud</H2>");
        assert_eq!(nodes[0].as_element().unwrap().tag, "h2");
    }

    #[test]
    fn attributes_are_kept() {
        let nodes = parse(r#"<p><img src="cat.png" alt="A cat"></p>"#);
        let img = nodes[0].as_element().unwrap().descendants(&["img"])[0];
        assert_eq!(img.attribute("alt"), Some("A cat"));
        assert_eq!(img.attribute("src"), Some("cat.png"));
        assert_eq!(img.attribute("title"), None);
    }

    #[test]
    fn entities_are_decoded() {
        let nodes = parse("<p>a &lt; b &amp;&amp; c</p>");
        assert_eq!(nodes[0].inner_text(), "a < b && c");
    }

    #[test]
    fn comments_are_dropped() {
        let nodes = parse("<p>visible<!-- hidden --></p>");
        assert_eq!(nodes[0].as_element().unwrap().children.len(), 1);
    }

    #[test]
    fn descendants_in_document_order() {
        let nodes = parse("<ol><li>one</li><li>two<ul><li>inner</li></ul></li><li>three</li></ol>");
        let list = nodes[0].as_element().unwrap();
        let items: Vec<_> = list
            .descendants(&["li"])
            .iter()
            .map(|li| li.inner_text())
            .collect();
        assert_eq!(items, ["one", "twoinner", "inner", "three"]);
    }

    #[test]
    fn stray_end_tag_is_malformed_in_strict_mode() {
        let result = parse_fragment("<p>text</p></div>", 128, true);
        assert!(matches!(result, Err(RenderError::Malformed(_))));

        let lenient = parse_fragment("<p>text</p></div>", 128, false).unwrap();
        assert_eq!(lenient[0].inner_text(), "text");
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let html = format!("{}x{}", "<div>".repeat(20), "</div>".repeat(20));
        let result = parse_fragment(&html, 10, true);
        assert!(matches!(
            result,
            Err(RenderError::NestingTooDeep { max_depth: 10 })
        ));
        assert!(parse_fragment(&html, 64, true).is_ok());
    }
}
